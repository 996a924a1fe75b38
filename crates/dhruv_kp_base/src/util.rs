//! Shared angle and house-number helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// House that is `offset` houses away from `house` (both 1-based).
///
/// `nth_house_from(1, 1)` = 1, `nth_house_from(1, 12)` = 12, `nth_house_from(12, 2)` = 1.
pub fn nth_house_from(house: u8, offset: u8) -> u8 {
    ((house as u16 + offset as u16 - 2) % 12) as u8 + 1
}

/// The house immediately before `house` (the 12th from it).
pub fn twelfth_from(house: u8) -> u8 {
    nth_house_from(house, 12)
}

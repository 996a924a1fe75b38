//! Golden significator hierarchy for a reference chart (equal-sign houses).
//!
//! Lagna 61.94 deg (Mithuna). Expected lists are derived by hand from the
//! whole-sign occupancy and ownership of each body.

use dhruv_kp_base::{
    BodyRecord, Graha, HouseCusps, NatalChart, SignificationLevel, SignificatorHierarchy,
};

fn reference_records() -> Vec<BodyRecord> {
    vec![
        BodyRecord::new("Ascendant", 61.93967623192282),
        BodyRecord::new("Sun", 238.9742740947627),
        BodyRecord::new("Moon", 102.61399211366938),
        BodyRecord::new("Mars", 180.7372162146417),
        BodyRecord::new("Mercury", 232.71524181214052),
        BodyRecord::new("Jupiter", 40.12135014486877).retrograde(),
        BodyRecord::new("Venus", 283.30586447359785),
        BodyRecord::new("Saturn", 31.702209636581917).retrograde(),
        BodyRecord::new("Rahu", 82.74511318206047).retrograde(),
        BodyRecord::new("Ketu", 262.74511318206047).retrograde(),
        BodyRecord::new("Uranus", 11.2),
        BodyRecord::new("Neptune", 280.4),
    ]
}

fn hierarchy() -> SignificatorHierarchy {
    let chart = NatalChart::from_records(&reference_records(), None).unwrap();
    SignificatorHierarchy::build(&chart)
}

#[test]
fn occupancy_matches_whole_signs() {
    let chart = NatalChart::from_records(&reference_records(), None).unwrap();
    let expected = [
        (Graha::Surya, 6),
        (Graha::Chandra, 2),
        (Graha::Mangal, 5),
        (Graha::Buddh, 6),
        (Graha::Guru, 12),
        (Graha::Shukra, 8),
        (Graha::Shani, 12),
        (Graha::Rahu, 1),
        (Graha::Ketu, 7),
    ];
    for (g, house) in expected {
        assert_eq!(chart.planet(g).unwrap().house, house, "{g}");
    }
    assert_eq!(chart.planets().len(), 9);
}

#[test]
fn level1_star_lord_occupancy() {
    let h = hierarchy();
    let expected = [
        (Graha::Surya, 6),   // Buddh's star
        (Graha::Chandra, 12), // Shani's star
        (Graha::Mangal, 5),  // own star
        (Graha::Buddh, 6),   // own star
        (Graha::Guru, 2),    // Chandra's star
        (Graha::Shukra, 2),  // Chandra's star
        (Graha::Shani, 6),   // Surya's star
        (Graha::Rahu, 12),   // Guru's star
        (Graha::Ketu, 8),    // Shukra's star
    ];
    for (g, house) in expected {
        assert_eq!(h.set(g).level1, vec![house], "{g}");
    }
}

#[test]
fn level3_star_lord_ownership() {
    let h = hierarchy();
    assert_eq!(h.set(Graha::Surya).level3, vec![1, 4]);
    assert_eq!(h.set(Graha::Chandra).level3, vec![8, 9]);
    assert_eq!(h.set(Graha::Mangal).level3, vec![6, 11]);
    assert_eq!(h.set(Graha::Guru).level3, vec![2]);
    assert_eq!(h.set(Graha::Shani).level3, vec![3]);
    assert_eq!(h.set(Graha::Ketu).level3, vec![5, 12]);
    assert_eq!(h.set(Graha::Rahu).level3, vec![7, 10]);
}

#[test]
fn level4_own_ownership() {
    let h = hierarchy();
    assert_eq!(h.set(Graha::Surya).level4, vec![3]);
    assert_eq!(h.set(Graha::Chandra).level4, vec![2]);
    assert_eq!(h.set(Graha::Buddh).level4, vec![1, 4]);
    assert_eq!(h.set(Graha::Guru).level4, vec![7, 10]);
    assert_eq!(h.set(Graha::Shukra).level4, vec![5, 12]);
    assert_eq!(h.set(Graha::Shani).level4, vec![8, 9]);
    assert!(h.set(Graha::Rahu).level4.is_empty());
    assert!(h.set(Graha::Ketu).level4.is_empty());
}

#[test]
fn every_house_in_range() {
    let h = hierarchy();
    for (_, set) in h.iter() {
        for house in set.all_houses() {
            assert!((1..=12).contains(&house));
        }
    }
}

#[test]
fn strength_takes_minimum_level() {
    let h = hierarchy();
    // Mangal: house 5 at levels 1 and 2, house 6 at levels 3 and 4
    assert_eq!(h.strength(Graha::Mangal, 5), Some(SignificationLevel::StarLordOccupancy));
    assert_eq!(h.strength(Graha::Mangal, 6), Some(SignificationLevel::StarLordOwnership));
    assert_eq!(h.strength(Graha::Mangal, 2), None);
}

/// Cusps shift both occupancy and ownership.
#[test]
fn cusp_based_hierarchy_differs() {
    let cusps = HouseCusps::equal_from(61.93967623192282);
    let chart = NatalChart::from_records(&reference_records(), Some(cusps)).unwrap();
    let h = SignificatorHierarchy::build(&chart);
    // Mars at 180.74 lies in [151.94, 181.94) → house 4
    assert_eq!(chart.planet(Graha::Mangal).unwrap().house, 4);
    assert_eq!(h.set(Graha::Mangal).level2, vec![4]);
    for (_, set) in h.iter() {
        for house in set.all_houses() {
            assert!((1..=12).contains(&house));
        }
    }
}

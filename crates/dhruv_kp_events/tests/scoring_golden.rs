//! Scoring and promise checks against a reference chart.
//!
//! Lagna 61.94 deg (Mithuna), equal-sign houses, natal Moon in Pushya.
//! Signified houses per ruler in this chart:
//! Surya {1,3,4,6}, Buddh {1,4,6}, Shani {3,6,8,9,12}, Shukra {2,5,8,12}.

use dhruv_kp_base::{
    BodyRecord, Graha, KpError, NatalChart, SignificatorHierarchy, dasha_chain,
};
use dhruv_kp_events::{
    EventCategory, EventEngine, EventError, FactorKind, KpConfig, Polarity, PromiseVerdict,
    ScoringConfig, TransitSnapshot, default_catalog, score_event,
};

const BIRTH_JD: f64 = 2_447_892.5;
const NATAL_MOON: f64 = 102.61399211366938;

fn reference_chart() -> NatalChart {
    let recs = vec![
        BodyRecord::new("Ascendant", 61.93967623192282),
        BodyRecord::new("Sun", 238.9742740947627),
        BodyRecord::new("Moon", NATAL_MOON),
        BodyRecord::new("Mars", 180.7372162146417),
        BodyRecord::new("Mercury", 232.71524181214052),
        BodyRecord::new("Jupiter", 40.12135014486877),
        BodyRecord::new("Venus", 283.30586447359785),
        BodyRecord::new("Saturn", 31.702209636581917),
        BodyRecord::new("Rahu", 82.74511318206047),
        BodyRecord::new("Ketu", 262.74511318206047),
    ];
    NatalChart::from_records(&recs, None).unwrap()
}

fn category(id: &str, houses: &[u8]) -> EventCategory {
    EventCategory::new(id, id, "", houses, houses[0], Polarity::Favorable)
}

/// Houses {2, 7, 11} with no active lord signifying any of them: score 0
/// and an empty contributor list.
#[test]
fn unsignified_event_scores_zero() {
    let h = SignificatorHierarchy::build(&reference_chart());
    let score = score_event(
        &category("marriage", &[2, 7, 11]),
        &[Graha::Surya, Graha::Buddh, Graha::Shani, Graha::Surya],
        &h,
        None,
        &ScoringConfig::default(),
    );
    assert_eq!(score.score, 0);
    assert!(score.factors.is_empty());
}

/// Career {2, 6, 10}: every lord signifies 6 at level 1.
/// 40/3 + 30/3 + 20/3 + 10/3 = 33.33, plus 20% synergy = 40.
#[test]
fn career_all_levels_level1() {
    let h = SignificatorHierarchy::build(&reference_chart());
    let rulers = [Graha::Buddh, Graha::Surya, Graha::Shani, Graha::Buddh];
    let cfg = ScoringConfig::default();
    let score = score_event(&category("career", &[2, 6, 10]), &rulers, &h, None, &cfg);
    assert_eq!(score.score, 40);
    assert_eq!(score.factors.len(), 5);
    assert!((score.factors[0].points - 40.0 / 3.0).abs() < 1e-9);
    assert_eq!(score.factors[4].kind, FactorKind::Synergy);
    assert!((score.factors[4].points - 20.0 / 3.0).abs() < 1e-9);

    // Transit Moon in Ashwini (Ketu): Ketu signifies none of 2, 6, 10
    let ketu_star = TransitSnapshot { moon_longitude: 1.0 };
    let s = score_event(&category("career", &[2, 6, 10]), &rulers, &h, Some(&ketu_star), &cfg);
    assert_eq!(s.score, 40);

    // Transit Moon in Jyeshtha (Buddh): Buddh signifies 6
    let buddh_star = TransitSnapshot { moon_longitude: 230.0 };
    let s = score_event(&category("career", &[2, 6, 10]), &rulers, &h, Some(&buddh_star), &cfg);
    assert_eq!(s.score, 45);
}

/// Weaker levels earn proportionally less.
#[test]
fn strength_multipliers_apply() {
    let h = SignificatorHierarchy::build(&reference_chart());
    let cfg = ScoringConfig::default();
    // Shukra: 5 only at level 4 (own ownership) → 0.8 / 1.5 * 40
    let s = score_event(
        &category("children", &[5]),
        &[Graha::Shukra, Graha::Surya, Graha::Surya, Graha::Surya],
        &h,
        None,
        &cfg,
    );
    assert_eq!(s.score, 21);
}

#[test]
fn engine_requires_hierarchy() {
    let engine = EventEngine::new(KpConfig::default()).unwrap();
    let chain = dasha_chain(NATAL_MOON, BIRTH_JD, BIRTH_JD + 10_000.0);
    assert_eq!(
        engine.score("career", &chain, None),
        Err(EventError::Kp(KpError::UndefinedHierarchy))
    );
}

#[test]
fn engine_scores_are_bounded_and_repeatable() {
    let engine = EventEngine::for_chart(&reference_chart());
    for days in [0.0, 1_000.0, 12_345.0, 40_000.0, 90_000.0] {
        let chain = dasha_chain(NATAL_MOON, BIRTH_JD, BIRTH_JD + days);
        for e in default_catalog() {
            let a = engine.score(&e.id, &chain, None).unwrap();
            let b = engine.score(&e.id, &chain, None).unwrap();
            assert!(a.score <= 100);
            assert_eq!(a, b);
        }
    }
}

/// Marriage: cusp 7 at 241.94 deg is in Mula, sub of Shukra. Shukra signifies
/// 2 and none of the detriment houses 1, 6, 10.
#[test]
fn marriage_promised_in_reference_chart() {
    let engine = EventEngine::for_chart(&reference_chart());
    let p = engine.promise("marriage").unwrap();
    assert_eq!(p.cusp_house, 7);
    assert_eq!(p.sub_lord, Graha::Shukra);
    assert_eq!(p.verdict, PromiseVerdict::Promised);
    assert_eq!(p.supporting_houses, vec![2]);
    assert!(p.opposing_houses.is_empty());
    assert_eq!(p.strength, 90);
}

#[test]
fn custom_weights_from_toml() {
    let cfg = KpConfig::from_toml_str(
        r#"
        [scoring]
        level_weights = [100.0, 0.0, 0.0, 0.0]
        synergy_fraction = 0.0
        "#,
    )
    .unwrap();
    let mut engine = EventEngine::new(cfg).unwrap();
    engine.attach_chart(&reference_chart());
    let h = engine.hierarchy().unwrap();
    let s = score_event(
        &category("career", &[6]),
        &[Graha::Buddh, Graha::Guru, Graha::Guru, Graha::Guru],
        h,
        None,
        &engine.config().scoring,
    );
    assert_eq!(s.score, 100);
}

use chrono::{TimeZone, Utc};
use urania::influence::{keywords_for_sign, InfluenceCategory};
use urania::western::ZodiacSign;
use urania::DailySky;

fn new_year_sky() -> DailySky {
    DailySky::compute(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

#[test]
fn test_influences_new_year_2024() {
    let sky = new_year_sky();
    let scores = sky.influences;

    assert_eq!(scores.structure, 100.0);
    assert!((scores.energy - 70.3112).abs() < 1e-3);
    assert!((scores.harmony - 30.5441).abs() < 1e-3);
    assert_eq!(
        scores.top(2),
        vec![InfluenceCategory::Structure, InfluenceCategory::Energy]
    );
    for (_, value) in scores.iter() {
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn test_keywords_follow_dominant_categories() {
    let sky = new_year_sky();
    let keywords = keywords_for_sign(ZodiacSign::Aries, &sky.influences, sky.moon_phase());
    assert_eq!(
        keywords,
        vec!["architecture", "scaffolding", "kinetic", "catalytic", "high-temperature"]
    );
}

#[test]
fn test_category_names_parse() {
    assert_eq!(
        "Expansion".parse::<InfluenceCategory>().unwrap(),
        InfluenceCategory::Expansion
    );
    assert!("luck".parse::<InfluenceCategory>().is_err());
}

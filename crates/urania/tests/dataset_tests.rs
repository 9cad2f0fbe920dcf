use chrono::{TimeZone, Utc};
use urania::{generate_daily_dataset, GenerationOptions, TemplateBank};

#[test]
fn test_same_date_same_json() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let bank = TemplateBank::builtin();
    let options = GenerationOptions::default();

    let first = generate_daily_dataset(dt, &options, &bank).to_json(true).unwrap();
    let second = generate_daily_dataset(dt, &options, &bank).to_json(true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dataset_shape() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let dataset = generate_daily_dataset(dt, &GenerationOptions::default(), &TemplateBank::builtin());
    let value: serde_json::Value = serde_json::from_str(&dataset.to_json(false).unwrap()).unwrap();

    assert_eq!(value["lastUpdated"], "2024-01-01");
    assert_eq!(value["julian_day"], 2460310.5);
    assert_eq!(value["planetary_positions"]["sun"]["sign"], "Capricorn");
    assert_eq!(value["planetary_positions"]["sun"]["degree"], 9.7);
    assert_eq!(value["planetary_positions"]["sun"]["longitude"], 279.7);
    assert_eq!(value["planetary_positions"]["moon"]["phase"], "Waning Gibbous");
    assert!(value["planetary_positions"]["mars"].get("phase").is_none());
    assert_eq!(value["major_aspects"].as_array().unwrap().len(), 8);
    assert_eq!(value["major_aspects"][0]["type"], "trine");
    assert_eq!(value["influences"]["structure"], 100.0);
    assert_eq!(value["calculation_methods"].as_array().unwrap().len(), 10);
    assert_eq!(value["centroids"].as_object().unwrap().len(), 12);
    assert_eq!(value["points"].as_array().unwrap().len(), 120);
    assert_eq!(value["readings"].as_object().unwrap().len(), 12);
    assert_eq!(value["compatibility_matrix"].as_object().unwrap().len(), 78);
    assert_eq!(value["compatibility_matrix"]["Aries-Leo"]["score"], 80.0);
    assert_eq!(value["daily_protocol"]["weekend"], false);
    assert!(value.get("predictions").is_none());
    assert_eq!(dataset.predictions.len(), 120);
}

#[test]
fn test_weekend_dataset_protocol() {
    let sunday = Utc.with_ymd_and_hms(2024, 1, 7, 9, 30, 0).unwrap();
    let dataset = generate_daily_dataset(sunday, &GenerationOptions::default(), &TemplateBank::builtin());
    assert!(dataset.daily_protocol.weekend);
    assert!(dataset.daily_protocol.avoidance.is_none());
}

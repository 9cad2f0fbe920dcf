use crate::predictions::selector::PredictionRecord;
use crate::western::ZodiacSign;
use std::collections::BTreeMap;

/// Highest-confidence prediction for a sign; ties keep generation order.
pub fn headline_for(sign: ZodiacSign, predictions: &[PredictionRecord]) -> Option<&PredictionRecord> {
    let mut ranked: Vec<&PredictionRecord> = predictions.iter().filter(|p| p.sign == sign).collect();
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    ranked.first().copied()
}

/// One headline reading per sign that has at least one prediction.
pub fn synthesize_daily_readings(predictions: &[PredictionRecord]) -> BTreeMap<ZodiacSign, String> {
    ZodiacSign::all()
        .filter_map(|sign| headline_for(sign, predictions).map(|p| (sign, p.prediction.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sign: ZodiacSign, method: &'static str, confidence: f64) -> PredictionRecord {
        PredictionRecord {
            sign,
            method,
            method_description: "",
            prediction: format!("{} via {}.", sign, method),
            confidence,
            keywords: Vec::new(),
        }
    }

    #[test]
    fn test_headline_prefers_confidence_then_order() {
        let predictions = vec![
            record(ZodiacSign::Leo, "first", 0.61),
            record(ZodiacSign::Leo, "second", 0.74),
            record(ZodiacSign::Leo, "third", 0.74),
            record(ZodiacSign::Aries, "other", 0.99),
        ];
        let headline = headline_for(ZodiacSign::Leo, &predictions).unwrap();
        assert_eq!(headline.method, "second");
    }

    #[test]
    fn test_headline_ignores_input_order_with_nan() {
        let forward = vec![
            record(ZodiacSign::Virgo, "low", 0.2),
            record(ZodiacSign::Virgo, "nan", f64::NAN),
            record(ZodiacSign::Virgo, "high", 0.9),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let a = headline_for(ZodiacSign::Virgo, &forward).unwrap();
        let b = headline_for(ZodiacSign::Virgo, &backward).unwrap();
        assert_eq!(a.method, b.method);

        let finite: Vec<_> = forward.into_iter().filter(|p| !p.confidence.is_nan()).collect();
        assert_eq!(headline_for(ZodiacSign::Virgo, &finite).unwrap().method, "high");
    }

    #[test]
    fn test_readings_skip_missing_signs() {
        let predictions = vec![record(ZodiacSign::Pisces, "only", 0.5)];
        let readings = synthesize_daily_readings(&predictions);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[&ZodiacSign::Pisces], "Pisces via only.");
    }
}

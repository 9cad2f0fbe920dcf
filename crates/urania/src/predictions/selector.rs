use crate::influence::{keywords_for_sign, InfluenceCategory};
use crate::predictions::methods::{CalculationMethod, CALCULATION_METHODS};
use crate::predictions::seed::{
    pick_index, prediction_seed, pseudo_random, JITTER_OFFSET, KEYWORD_GATE_OFFSET,
    KEYWORD_PICK_OFFSET,
};
use crate::predictions::templates::{render_template, TemplateBank};
use crate::sky::DailySky;
use crate::western::ZodiacSign;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

const JITTER_SCALE: f64 = 0.05;

/// One reading for a (method, sign) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRecord {
    pub sign: ZodiacSign,
    pub method: &'static str,
    #[serde(rename = "methodDescription")]
    pub method_description: &'static str,
    pub prediction: String,
    /// In [0, 1], three decimals
    pub confidence: f64,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Avoid reusing a template of the same category within one run
    pub dedupe_templates: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            dedupe_templates: true,
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Template index chosen by the seed alone
pub fn seeded_template_index(seed: i64, bank: &TemplateBank, category: InfluenceCategory) -> usize {
    let len = bank.templates(category).len();
    if len == 0 {
        0
    } else {
        pick_index(seed, len)
    }
}

/// `(influence/100 + modifier) / 2` plus a small seeded jitter, clamped to [0, 1]
pub fn confidence_for(method: &CalculationMethod, sky: &DailySky, seed: i64) -> f64 {
    let base = sky.influences.get(method.emphasis) / 100.0;
    let modifier = method.modifier(sky);
    let jitter = pseudo_random(seed + JITTER_OFFSET) * JITTER_SCALE;
    round3(((base + modifier) / 2.0 + jitter).clamp(0.0, 1.0))
}

fn compose(
    sign: ZodiacSign,
    method: &CalculationMethod,
    sky: &DailySky,
    bank: &TemplateBank,
    template_index: usize,
    seed: i64,
) -> PredictionRecord {
    let keywords = keywords_for_sign(sign, &sky.influences, sky.moon_phase());
    let template = bank
        .templates(method.emphasis)
        .get(template_index)
        .map(String::as_str)
        .unwrap_or("");

    let mut text = render_template(template, sign.name())
        .trim_end()
        .trim_end_matches('.')
        .to_string();

    if !keywords.is_empty() && pseudo_random(seed + KEYWORD_GATE_OFFSET) < method.keyword_probability {
        let keyword = &keywords[pick_index(seed + KEYWORD_PICK_OFFSET, keywords.len())];
        text.push_str(&format!(" exhibiting distinct {} characteristics", keyword));
    }
    text.push('.');

    PredictionRecord {
        sign,
        method: method.name,
        method_description: method.description,
        prediction: text,
        confidence: confidence_for(method, sky, seed),
        keywords,
    }
}

/// Pure selection for one (sign, method) pair on the sky's date.
pub fn select_prediction(
    sign: ZodiacSign,
    method: &CalculationMethod,
    sky: &DailySky,
    bank: &TemplateBank,
) -> PredictionRecord {
    let seed = prediction_seed(sky.date_seed(), sign, method.name);
    let index = seeded_template_index(seed, bank, method.emphasis);
    compose(sign, method, sky, bank, index, seed)
}

/// Per-run generator; tracks used templates when dedupe is on
pub struct PredictionGenerator<'a> {
    bank: &'a TemplateBank,
    options: GenerationOptions,
    used: BTreeMap<InfluenceCategory, HashSet<usize>>,
}

impl<'a> PredictionGenerator<'a> {
    pub fn new(bank: &'a TemplateBank, options: GenerationOptions) -> Self {
        Self {
            bank,
            options,
            used: BTreeMap::new(),
        }
    }

    /// Seeded index, advanced to the next unused template of its category
    /// when dedupe is on; falls back to the seeded index once all are used.
    fn claim_index(&mut self, category: InfluenceCategory, seeded: usize) -> usize {
        if !self.options.dedupe_templates {
            return seeded;
        }
        let len = self.bank.templates(category).len();
        let used = self.used.entry(category).or_default();
        let chosen = (0..len)
            .map(|step| (seeded + step) % len)
            .find(|candidate| !used.contains(candidate))
            .unwrap_or(seeded);
        used.insert(chosen);
        chosen
    }

    pub fn generate_one(
        &mut self,
        sign: ZodiacSign,
        method: &CalculationMethod,
        sky: &DailySky,
    ) -> PredictionRecord {
        let seed = prediction_seed(sky.date_seed(), sign, method.name);
        let seeded = seeded_template_index(seed, self.bank, method.emphasis);
        let index = self.claim_index(method.emphasis, seeded);
        compose(sign, method, sky, self.bank, index, seed)
    }

    /// Every method × sign, method-major order
    pub fn generate_all(&mut self, sky: &DailySky) -> Vec<PredictionRecord> {
        let mut predictions = Vec::with_capacity(CALCULATION_METHODS.len() * 12);
        for method in CALCULATION_METHODS.iter() {
            for sign in ZodiacSign::all() {
                predictions.push(self.generate_one(sign, method, sky));
            }
        }
        log::debug!(
            "generated {} predictions for {}",
            predictions.len(),
            sky.date_label()
        );
        predictions
    }
}

pub fn generate_predictions(
    sky: &DailySky,
    bank: &TemplateBank,
    options: GenerationOptions,
) -> Vec<PredictionRecord> {
    PredictionGenerator::new(bank, options).generate_all(sky)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sky() -> DailySky {
        DailySky::compute(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_select_is_pure() {
        let sky = sky();
        let bank = TemplateBank::builtin();
        let method = &CALCULATION_METHODS[3];
        let a = select_prediction(ZodiacSign::Libra, method, &sky, &bank);
        let b = select_prediction(ZodiacSign::Libra, method, &sky, &bank);
        assert_eq!(a, b);
        assert!(a.prediction.ends_with('.'));
        assert!(!a.prediction.ends_with(".."));
        assert!((0.0..=1.0).contains(&a.confidence));
        assert_eq!(a.confidence, round3(a.confidence));
    }

    #[test]
    fn test_claim_index_advances_and_wraps() {
        let bank = TemplateBank::builtin();
        let mut generator = PredictionGenerator::new(&bank, GenerationOptions::default());
        let category = InfluenceCategory::Emotion;
        assert_eq!(generator.claim_index(category, 9), 9);
        assert_eq!(generator.claim_index(category, 9), 0);
        assert_eq!(generator.claim_index(category, 0), 1);
        for _ in 0..7 {
            generator.claim_index(category, 4);
        }
        // exhausted: falls back to the seeded index
        assert_eq!(generator.claim_index(category, 4), 4);
    }

    #[test]
    fn test_claim_index_without_dedupe() {
        let bank = TemplateBank::builtin();
        let options = GenerationOptions {
            dedupe_templates: false,
        };
        let mut generator = PredictionGenerator::new(&bank, options);
        assert_eq!(generator.claim_index(InfluenceCategory::Energy, 2), 2);
        assert_eq!(generator.claim_index(InfluenceCategory::Energy, 2), 2);
    }

    #[test]
    fn test_generate_all_counts() {
        let sky = sky();
        let predictions = generate_predictions(&sky, &TemplateBank::builtin(), GenerationOptions::default());
        assert_eq!(predictions.len(), 120);
        for sign in ZodiacSign::all() {
            assert_eq!(predictions.iter().filter(|p| p.sign == sign).count(), 10);
        }
        assert_eq!(predictions[0].method, CALCULATION_METHODS[0].name);
        assert_eq!(predictions[0].sign, ZodiacSign::Aries);
    }
}

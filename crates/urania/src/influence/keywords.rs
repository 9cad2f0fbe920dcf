use crate::ephemeris::MoonPhase;
use crate::influence::scores::{InfluenceCategory, InfluenceScores};
use crate::western::{Element, ZodiacSign};

const MAX_KEYWORDS: usize = 5;

pub fn category_keywords(category: InfluenceCategory) -> &'static [&'static str] {
    match category {
        InfluenceCategory::Energy => &["kinetic", "catalytic", "activation", "exothermic", "ATP"],
        InfluenceCategory::Communication => {
            &["transduction", "network", "signaling", "information", "feedback"]
        }
        InfluenceCategory::Emotion => &["dynamic", "responsive", "adaptive", "fluctuation", "sensitivity"],
        InfluenceCategory::Harmony => &["equilibrium", "binding", "affinity", "coordination", "balance"],
        InfluenceCategory::Expansion => {
            &["amplification", "proliferation", "upregulation", "growth", "scaling"]
        }
        InfluenceCategory::Structure => {
            &["architecture", "scaffolding", "checkpoint", "integrity", "assembly"]
        }
    }
}

pub fn element_keywords(element: Element) -> &'static [&'static str] {
    match element {
        Element::Fire => &["high-temperature", "rapid", "energetic", "combustion"],
        Element::Earth => &["stable", "crystalline", "solid-phase", "substrate"],
        Element::Air => &["gaseous", "volatile", "diffusion", "dispersion"],
        Element::Water => &["aqueous", "soluble", "fluid", "hydration"],
    }
}

pub fn moon_phase_keywords(phase: MoonPhase) -> &'static [&'static str] {
    match phase {
        MoonPhase::Full => &["maximum", "peak"],
        MoonPhase::New => &["initiation", "minimal"],
        p if p.is_waxing() => &["increasing", "accumulation"],
        p if p.is_waning() => &["decreasing", "depletion"],
        _ => &[],
    }
}

/// Keyword pool for one sign: the dominant two categories, the sign's element,
/// then the moon phase, capped at five.
pub fn keywords_for_sign(
    sign: ZodiacSign,
    influences: &InfluenceScores,
    phase: MoonPhase,
) -> Vec<String> {
    let mut keywords: Vec<&str> = Vec::new();

    for category in influences.top(2) {
        keywords.extend(category_keywords(category).iter().take(2));
    }
    keywords.extend(element_keywords(sign.element()).iter().take(1));
    keywords.extend(moon_phase_keywords(phase));

    keywords
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_for_sign() {
        let mut scores = InfluenceScores::default();
        scores.add(InfluenceCategory::Structure, 100.0);
        scores.add(InfluenceCategory::Harmony, 80.0);

        let keywords = keywords_for_sign(ZodiacSign::Pisces, &scores, MoonPhase::Full);
        assert_eq!(
            keywords,
            vec!["architecture", "scaffolding", "equilibrium", "binding", "aqueous"]
        );
    }

    #[test]
    fn test_every_phase_has_keywords() {
        for phase in [
            MoonPhase::New,
            MoonPhase::WaxingCrescent,
            MoonPhase::FirstQuarter,
            MoonPhase::WaxingGibbous,
            MoonPhase::Full,
            MoonPhase::WaningGibbous,
            MoonPhase::LastQuarter,
            MoonPhase::WaningCrescent,
        ] {
            assert_eq!(moon_phase_keywords(phase).len(), 2);
        }
    }
}

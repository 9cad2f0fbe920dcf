//! Pairwise sign compatibility for a given day.
//!
//! `score = clamp(element_affinity * quality_modifier + day_bonus, 0, 100)`.
//! The day bonus depends on the Venus-Mars aspect and on whether the two
//! rulers share a sign today.

use crate::aspects::AspectKind;
use crate::compatibility::tables::{
    element_affinity, element_description, quality_interaction, CompatibilityLevel,
};
use crate::ephemeris::CelestialBody;
use crate::sky::DailySky;
use crate::western::{get_sign_ruler, ZodiacSign};
use serde::Serialize;

const HARMONIOUS_VENUS_MARS_BONUS: f64 = 15.0;
const SQUARE_VENUS_MARS_PENALTY: f64 = 5.0;
const SHARED_RULER_SIGN_BONUS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityEntry {
    pub signs: [ZodiacSign; 2],
    /// In [0, 100], one decimal
    pub score: f64,
    pub level: CompatibilityLevel,
    pub binding_affinity: String,
    pub synthesis: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub today_specific: String,
    pub element_harmony: f64,
    pub quality_modifier: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayBonus {
    pub bonus: f64,
    pub description: String,
}

/// Venus-Mars aspect and shared ruler placement for the day
pub fn day_bonus(a: ZodiacSign, b: ZodiacSign, sky: &DailySky) -> DayBonus {
    let mut bonus = 0.0;
    let mut notes: Vec<String> = Vec::new();

    if let Some(aspect) = sky
        .aspects
        .find_between(CelestialBody::Venus, CelestialBody::Mars)
    {
        match aspect.kind {
            AspectKind::Trine | AspectKind::Sextile => {
                bonus += HARMONIOUS_VENUS_MARS_BONUS;
                notes.push(format!(
                    "Today's Venus-{} enhances binding kinetics (+{}%)",
                    aspect.kind, HARMONIOUS_VENUS_MARS_BONUS
                ));
            }
            AspectKind::Square => {
                bonus -= SQUARE_VENUS_MARS_PENALTY;
                notes.push(format!(
                    "Venus-Mars square creates competing reaction pathways (-{}%)",
                    SQUARE_VENUS_MARS_PENALTY
                ));
            }
            _ => {}
        }
    }

    let rulers = (
        sky.position(get_sign_ruler(a)),
        sky.position(get_sign_ruler(b)),
    );
    if let (Some(ruler_a), Some(ruler_b)) = rulers {
        if ruler_a.sign == ruler_b.sign {
            bonus += SHARED_RULER_SIGN_BONUS;
            notes.push(format!("Shared planetary substrate in {}", ruler_a.sign));
        }
    }

    let description = if notes.is_empty() {
        "Standard planetary conditions".to_string()
    } else {
        notes.join("; ")
    };
    DayBonus { bonus, description }
}

/// Score before the day bonus: element affinity times the quality modifier
pub fn base_score(a: ZodiacSign, b: ZodiacSign) -> f64 {
    element_affinity(a.element(), b.element()) * quality_interaction(a.quality(), b.quality()).modifier
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn compute_compatibility(a: ZodiacSign, b: ZodiacSign, sky: &DailySky) -> CompatibilityEntry {
    let (element_a, element_b) = (a.element(), b.element());
    let element_score = element_affinity(element_a, element_b);
    let quality = quality_interaction(a.quality(), b.quality());
    let day = day_bonus(a, b, sky);

    let score = (element_score * quality.modifier + day.bonus).clamp(0.0, 100.0);
    let level = CompatibilityLevel::from_score(score);
    let percent = score.round();

    let mut strengths = Vec::new();
    let mut challenges = Vec::new();

    if element_score >= 80.0 {
        strengths.push(format!(
            "{}-{} synergy optimizes energy transfer",
            element_a, element_b
        ));
    } else if element_score <= 50.0 {
        challenges.push(format!(
            "{}-{} opposition requires buffering conditions",
            element_a, element_b
        ));
    }

    if quality.modifier >= 1.05 {
        strengths.push("Complementary catalytic mechanisms enhance overall throughput".to_string());
    } else if quality.modifier <= 0.9 {
        challenges.push("Similar kinetic profiles may lead to competitive inhibition".to_string());
    }

    if let Some(theme) = a.themes().iter().find(|t| b.themes().contains(t)) {
        strengths.push(format!("Shared {} pathway provides common substrate", theme));
    }

    if strengths.is_empty() {
        strengths.push("Moderate catalytic cooperation possible with optimization".to_string());
    }
    if challenges.is_empty() {
        challenges.push("Minor pH and temperature adjustments may be required".to_string());
    }

    let synthesis = format!(
        "Your {}-{} pairing demonstrates {} compatibility ({}% binding affinity). {}. {}. {}.",
        a,
        b,
        level.name().to_lowercase(),
        percent,
        level.lab_descriptor(),
        element_description(element_a, element_b),
        quality.description
    );

    CompatibilityEntry {
        signs: [a, b],
        score: round1(score),
        level,
        binding_affinity: format!("{} ({}% cooperative)", level, percent),
        synthesis,
        strengths,
        challenges,
        today_specific: day.description,
        element_harmony: element_score,
        quality_modifier: quality.modifier,
        date: sky.date_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sky() -> DailySky {
        DailySky::compute(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_base_scores() {
        assert!((base_score(ZodiacSign::Aries, ZodiacSign::Leo) - 80.0).abs() < 1e-9);
        // fire-water with cardinal-cardinal
        assert!((base_score(ZodiacSign::Aries, ZodiacSign::Cancer) - 49.5).abs() < 1e-9);
        assert!((base_score(ZodiacSign::Gemini, ZodiacSign::Pisces) - 42.5).abs() < 1e-9);
    }

    #[test]
    fn test_self_pair_gets_shared_ruler_bonus() {
        let sky = sky();
        let day = day_bonus(ZodiacSign::Virgo, ZodiacSign::Virgo, &sky);
        assert!(day.description.contains("Shared planetary substrate"));
    }

    #[test]
    fn test_entry_is_well_formed() {
        let sky = sky();
        for a in ZodiacSign::all() {
            for b in ZodiacSign::all() {
                let entry = compute_compatibility(a, b, &sky);
                assert!((0.0..=100.0).contains(&entry.score));
                assert!(!entry.strengths.is_empty());
                assert!(!entry.challenges.is_empty());
                assert_eq!(entry.date, "2024-01-01");
            }
        }
    }

    #[test]
    fn test_shared_theme_is_a_strength() {
        let entry = compute_compatibility(ZodiacSign::Libra, ZodiacSign::Libra, &sky());
        assert!(entry
            .strengths
            .iter()
            .any(|s| s == "Shared balance pathway provides common substrate"));
    }
}

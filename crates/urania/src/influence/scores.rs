//! Influence Aggregator: planetary placements and aspects → six thematic scores.

use crate::aspects::AspectSet;
use crate::ephemeris::{CelestialBody, Position};
use crate::error::UraniaError;
use crate::western::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PLACEMENT_WEIGHT: f64 = 30.0;
const ELEMENT_BONUS: f64 = 10.0;
const ASPECT_WEIGHT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfluenceCategory {
    Energy,
    Communication,
    Emotion,
    Harmony,
    Expansion,
    Structure,
}

impl InfluenceCategory {
    pub const ALL: [InfluenceCategory; 6] = [
        InfluenceCategory::Energy,
        InfluenceCategory::Communication,
        InfluenceCategory::Emotion,
        InfluenceCategory::Harmony,
        InfluenceCategory::Expansion,
        InfluenceCategory::Structure,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            InfluenceCategory::Energy => "energy",
            InfluenceCategory::Communication => "communication",
            InfluenceCategory::Emotion => "emotion",
            InfluenceCategory::Harmony => "harmony",
            InfluenceCategory::Expansion => "expansion",
            InfluenceCategory::Structure => "structure",
        }
    }

    /// Category a body feeds through its placement
    pub fn primary_for(body: CelestialBody) -> InfluenceCategory {
        match body {
            CelestialBody::Sun | CelestialBody::Mars => InfluenceCategory::Energy,
            CelestialBody::Moon => InfluenceCategory::Emotion,
            CelestialBody::Mercury => InfluenceCategory::Communication,
            CelestialBody::Venus => InfluenceCategory::Harmony,
            CelestialBody::Jupiter => InfluenceCategory::Expansion,
            CelestialBody::Saturn => InfluenceCategory::Structure,
        }
    }

    /// Category a body triggers when it takes part in an aspect; the Sun triggers none
    pub fn triggered_by(body: CelestialBody) -> Option<InfluenceCategory> {
        match body {
            CelestialBody::Sun => None,
            other => Some(Self::primary_for(other)),
        }
    }

    pub fn for_element(element: Element) -> InfluenceCategory {
        match element {
            Element::Fire => InfluenceCategory::Energy,
            Element::Air => InfluenceCategory::Communication,
            Element::Water => InfluenceCategory::Emotion,
            Element::Earth => InfluenceCategory::Structure,
        }
    }
}

impl fmt::Display for InfluenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InfluenceCategory {
    type Err = UraniaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InfluenceCategory::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UraniaError::UnknownCategory(s.to_string()))
    }
}

/// Six category scores, each in [0, 100] once normalized
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InfluenceScores {
    pub energy: f64,
    pub communication: f64,
    pub emotion: f64,
    pub harmony: f64,
    pub expansion: f64,
    pub structure: f64,
}

impl InfluenceScores {
    pub fn get(&self, category: InfluenceCategory) -> f64 {
        match category {
            InfluenceCategory::Energy => self.energy,
            InfluenceCategory::Communication => self.communication,
            InfluenceCategory::Emotion => self.emotion,
            InfluenceCategory::Harmony => self.harmony,
            InfluenceCategory::Expansion => self.expansion,
            InfluenceCategory::Structure => self.structure,
        }
    }

    fn slot(&mut self, category: InfluenceCategory) -> &mut f64 {
        match category {
            InfluenceCategory::Energy => &mut self.energy,
            InfluenceCategory::Communication => &mut self.communication,
            InfluenceCategory::Emotion => &mut self.emotion,
            InfluenceCategory::Harmony => &mut self.harmony,
            InfluenceCategory::Expansion => &mut self.expansion,
            InfluenceCategory::Structure => &mut self.structure,
        }
    }

    pub fn add(&mut self, category: InfluenceCategory, amount: f64) {
        *self.slot(category) += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (InfluenceCategory, f64)> + '_ {
        InfluenceCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    pub fn max(&self) -> f64 {
        self.iter().map(|(_, v)| v).fold(0.0, f64::max)
    }

    /// Scale so the largest category is exactly 100; all-zero stays all-zero.
    pub fn normalized(&self) -> InfluenceScores {
        let max = self.max();
        let mut out = InfluenceScores::default();
        if max > 0.0 {
            for (category, value) in self.iter() {
                let scaled = if value == max { 100.0 } else { value / max * 100.0 };
                *out.slot(category) = scaled.clamp(0.0, 100.0);
            }
        }
        out
    }

    /// Categories sorted by descending score; ties keep declaration order
    pub fn ranked(&self) -> Vec<(InfluenceCategory, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<InfluenceCategory> {
        self.ranked().into_iter().take(n).map(|(c, _)| c).collect()
    }
}

/// Aggregate placements and aspects into normalized scores.
pub fn compute_influences(positions: &[Position], aspects: &AspectSet) -> InfluenceScores {
    let mut raw = InfluenceScores::default();

    for position in positions {
        raw.add(InfluenceCategory::primary_for(position.body), PLACEMENT_WEIGHT);
        raw.add(
            InfluenceCategory::for_element(position.sign.element()),
            ELEMENT_BONUS,
        );
    }

    for aspect in aspects.iter() {
        let strength = aspect.strength();
        for body in CelestialBody::all().filter(|b| aspect.involves(*b)) {
            if let Some(category) = InfluenceCategory::triggered_by(body) {
                raw.add(category, ASPECT_WEIGHT * strength);
            }
        }
    }

    raw.normalized()
}

//! Reading templates, grouped by influence category.
//!
//! Templates may contain the `{sign}` placeholder and nothing else in braces.

use crate::error::UraniaError;
use crate::influence::InfluenceCategory;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SIGN_PLACEHOLDER: &str = "{sign}";

const ENERGY_TEMPLATES: &[&str] = &[
    "Experimental data indicates your {sign} kinetic energy is peaking, suggesting a perfect time to initiate complex protocols.",
    "Catalytic efficiency in {sign} systems is currently optimal; use this momentum to overcome activation barriers.",
    "Thermodynamic conditions are favorable for {sign} reactions, so expect rapid progress on high-energy tasks.",
    "Your metabolic flux analysis shows a surge in productive output; prioritize demanding experiments today.",
    "ATP synthesis levels are elevated in your sector, providing the fuel needed for sustained effort.",
    "Electrochemical gradients are aligned, minimizing resistance to your current objectives.",
    "Reaction velocities are accelerating; precise control will yield high-throughput results.",
    "Activation energies are lowered for {sign}, making difficult tasks significantly easier to start.",
    "System entropy is low, allowing for highly organized and efficient work patterns.",
    "Exothermic potential is high; channel this output into creative or constructive pathways.",
];

const COMMUNICATION_TEMPLATES: &[&str] = &[
    "Signal transduction pathways are clear, ensuring your messages are received without noise.",
    "Network topology optimizes connectivity for {sign}, facilitating seamless collaboration.",
    "Data transmission rates are high; complex concepts can be communicated with exceptional clarity.",
    "Feedback loops are remarkably stable, allowing for constructive exchanges and rapid iteration.",
    "Your signal-to-noise ratio is excellent today, so focus on precise, high-fidelity communication.",
    "Intercellular signaling protocols are functioning perfectly; reach out to collaborators now.",
    "Transcriptional regulation is efficient, meaning your words will have a lasting impact.",
    "Neural plasticity is enhanced, making this an ideal time for learning or teaching new concepts.",
    "Frequency modulation is optimal; your ideas will resonate clearly with your audience.",
    "Heuristic analysis suggests a breakthrough in how you process and share information.",
];

const EMOTION_TEMPLATES: &[&str] = &[
    "Homeostatic mechanisms are perfectly balanced, providing a stable emotional baseline.",
    "Buffer solutions are effective today, neutralizing acidic stress and maintaining pH stability.",
    "Fluid dynamics are smooth, allowing you to navigate complex social currents with ease.",
    "Osmotic pressure is equalized; expect a day of comfortable exchanges and minimal stress.",
    "Your adaptive immune response is strong, protecting you from external negativity.",
    "Sensitivity thresholds are optimized: you are perceptive without being overwhelmed.",
    "Aqueous phase interactions are favorable, promoting fluidity in your personal connections.",
    "Diffusion gradients are gentle, allowing feelings to flow naturally without turbulence.",
    "Solubility is high; stubborn emotional precipitates are finally dissolving.",
    "Equilibrium constants favor stability, keeping your internal state steady and calm.",
];

const HARMONY_TEMPLATES: &[&str] = &[
    "Cooperative binding affinity is high, making teamwork and partnership effortless.",
    "Resonance frequencies are aligned; you will find it easy to synchronize with others.",
    "Symbiotic potentials are maximized, so look for mutually beneficial interactions.",
    "Molecular docking studies predict a perfect fit for your collaborative endeavors.",
    "Allosteric regulation is working in your favor; small adjustments will have positive global effects.",
    "Constructive interference patterns are amplifying success in your social sphere.",
    "Lattice structures are stable, providing a solid foundation for your relationships.",
    "Phase synchronization is achieved; you and your peers are moving in perfect step.",
    "Hybridization efficiency is excellent; combining ideas will produce superior results.",
    "Van der Waals forces are strong today, drawing supportive elements into your orbit.",
];

const EXPANSION_TEMPLATES: &[&str] = &[
    "Growth phase kinetics are exponential; small inputs will yield massive outputs.",
    "Your sphere of influence is undergoing rapid volumetric expansion.",
    "Resource availability is high, supporting the scaling up of your ambitions.",
    "Replication forks are active; expect productivity to multiply significantly.",
    "Upregulation of key success factors is detected, so seize this growth opportunity.",
    "Horizon scanning reveals expansive new territories ready for exploration.",
    "Amplification cycles are engaging; your efforts are being magnified.",
    "Logarithmic growth is predicted for your current projects, so prepare for scale.",
    "Diversity indices are increasing, enriching your experience with new variables.",
    "Saturation limits have not been reached; there is still plenty of room to grow.",
];

const STRUCTURE_TEMPLATES: &[&str] = &[
    "Crystal lattice integrity is at maximum; your plans are solid and unbreakable.",
    "Scaffolding proteins are in place, providing the support needed for ambitious construction.",
    "Structural assays confirm that your foundations are robust and reliable.",
    "Tensile strength is high; you can handle significant pressure without deformation.",
    "Architectural fidelity is preserved, so stick to the blueprint for guaranteed success.",
    "Rigid-body dynamics favor stability; stand your ground effectively.",
    "Polymerization is proceeding smoothly; small steps are linking into a cohesive whole.",
    "Quality control checkpoints are all green; proceed with confidence.",
    "The underlying framework of your life is showing exceptional resilience today.",
    "Geometric alignment is precise; everything is fitting exactly where it should.",
];

lazy_static::lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{([^{}]*)\}").expect("Invalid regex");

    static ref BUILTIN: TemplateBank = TemplateBank::from_lists(&[
        (InfluenceCategory::Energy, ENERGY_TEMPLATES),
        (InfluenceCategory::Communication, COMMUNICATION_TEMPLATES),
        (InfluenceCategory::Emotion, EMOTION_TEMPLATES),
        (InfluenceCategory::Harmony, HARMONY_TEMPLATES),
        (InfluenceCategory::Expansion, EXPANSION_TEMPLATES),
        (InfluenceCategory::Structure, STRUCTURE_TEMPLATES),
    ]);
}

/// Template lists keyed by category; deserialization goes through validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<InfluenceCategory, Vec<String>>",
    into = "BTreeMap<InfluenceCategory, Vec<String>>"
)]
pub struct TemplateBank {
    categories: BTreeMap<InfluenceCategory, Vec<String>>,
}

impl TemplateBank {
    pub fn new(categories: BTreeMap<InfluenceCategory, Vec<String>>) -> Result<Self, UraniaError> {
        let bank = Self { categories };
        bank.validate()?;
        Ok(bank)
    }

    fn from_lists(lists: &[(InfluenceCategory, &[&str])]) -> Self {
        let categories = lists
            .iter()
            .map(|(category, templates)| {
                (*category, templates.iter().map(|t| t.to_string()).collect())
            })
            .collect();
        Self { categories }
    }

    /// The built-in bank, ten templates per category
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Replace whole categories with the given lists; untouched categories keep their templates.
    pub fn with_overrides(
        &self,
        overrides: BTreeMap<InfluenceCategory, Vec<String>>,
    ) -> Result<Self, UraniaError> {
        let mut categories = self.categories.clone();
        categories.extend(overrides);
        Self::new(categories)
    }

    pub fn templates(&self, category: InfluenceCategory) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every category must have at least one non-blank template using only known placeholders.
    pub fn validate(&self) -> Result<(), UraniaError> {
        for category in InfluenceCategory::ALL {
            let templates = self.templates(category);
            if templates.is_empty() {
                return Err(UraniaError::InvalidTemplateBank(format!(
                    "category '{}' has no templates",
                    category
                )));
            }
            for (index, template) in templates.iter().enumerate() {
                if template.trim().is_empty() {
                    return Err(UraniaError::InvalidTemplateBank(format!(
                        "{}[{}] is blank",
                        category, index
                    )));
                }
                if let Some(unknown) = PLACEHOLDER_RE
                    .captures_iter(template)
                    .map(|c| c[0].to_string())
                    .find(|token| token != SIGN_PLACEHOLDER)
                {
                    return Err(UraniaError::InvalidTemplateBank(format!(
                        "{}[{}] uses unknown placeholder {}",
                        category, index, unknown
                    )));
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<BTreeMap<InfluenceCategory, Vec<String>>> for TemplateBank {
    type Error = UraniaError;

    fn try_from(categories: BTreeMap<InfluenceCategory, Vec<String>>) -> Result<Self, Self::Error> {
        Self::new(categories)
    }
}

impl From<TemplateBank> for BTreeMap<InfluenceCategory, Vec<String>> {
    fn from(bank: TemplateBank) -> Self {
        bank.categories
    }
}

impl Default for TemplateBank {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Substitute the sign name into every placeholder
pub fn render_template(template: &str, sign_name: &str) -> String {
    template.replace(SIGN_PLACEHOLDER, sign_name)
}

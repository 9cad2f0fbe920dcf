use crate::aspects::types::{Aspect, AspectCore, AspectKind, AspectSet};
use crate::ephemeris::Position;

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Angular separation of two longitudes, folded into [0, 180]
    pub fn separation(lon1: f64, lon2: f64) -> f64 {
        let raw_diff = (lon1 - lon2).abs().rem_euclid(360.0);
        if raw_diff > 180.0 {
            360.0 - raw_diff
        } else {
            raw_diff
        }
    }

    /// Classify the aspect between two longitudes.
    ///
    /// Rules are tried in `AspectKind::PRIORITY` order and the first match wins.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<AspectCore> {
        let angle = Self::separation(lon1, lon2);

        AspectKind::PRIORITY.iter().find_map(|kind| {
            let orb = (angle - kind.exact_angle()).abs();
            if orb < kind.max_orb() {
                Some(AspectCore { kind: *kind, orb })
            } else {
                None
            }
        })
    }

    /// Compute aspects between every pair of positions (i < j, input order)
    pub fn compute_aspects(&self, positions: &[Position]) -> AspectSet {
        let mut pairs = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let p1 = &positions[i];
                let p2 = &positions[j];

                if let Some(core) = self.calculate_aspect(p1.longitude, p2.longitude) {
                    pairs.push(Aspect {
                        bodies: [p1.body, p2.body],
                        kind: core.kind,
                        angle: core.kind.exact_angle(),
                        orb: core.orb,
                    });
                }
            }
        }

        log::debug!("detected {} aspects among {} bodies", pairs.len(), positions.len());
        AspectSet { pairs }
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn compute_aspects(positions: &[Position]) -> AspectSet {
    AspectCalculator::new().compute_aspects(positions)
}

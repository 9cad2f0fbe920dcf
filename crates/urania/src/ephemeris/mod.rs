pub mod julian;
pub mod lunar;
pub mod mean_motion;
pub mod types;

pub use julian::{date_seed, days_since_j2000, julian_day, midnight_utc, J2000_EPOCH};
pub use lunar::{moon_phase, synodic_fraction};
pub use mean_motion::{compute_all, compute_position, is_retrograde, MeanMotionEstimator};
pub use types::{CelestialBody, Ephemeris, MoonPhase, OrbitalElements, Position};

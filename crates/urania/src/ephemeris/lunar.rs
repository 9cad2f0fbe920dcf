use crate::ephemeris::types::MoonPhase;

/// Julian Day of the reference new moon (2000-01-06)
pub const NEW_MOON_EPOCH: f64 = 2451550.1;
/// Mean synodic month in days
pub const SYNODIC_MONTH: f64 = 29.53;

// Upper bounds of each phase bucket as a fraction of the cycle; the final
// bucket wraps back into New Moon.
const PHASE_BOUNDS: &[(f64, MoonPhase)] = &[
    (0.0625, MoonPhase::New),
    (0.1875, MoonPhase::WaxingCrescent),
    (0.3125, MoonPhase::FirstQuarter),
    (0.4375, MoonPhase::WaxingGibbous),
    (0.5625, MoonPhase::Full),
    (0.6875, MoonPhase::WaningGibbous),
    (0.8125, MoonPhase::LastQuarter),
    (0.9375, MoonPhase::WaningCrescent),
];

/// Fraction of the synodic cycle elapsed since the reference new moon, in [0, 1).
pub fn synodic_fraction(julian_day: f64) -> f64 {
    let fraction = (julian_day - NEW_MOON_EPOCH).rem_euclid(SYNODIC_MONTH) / SYNODIC_MONTH;
    // rem_euclid can round up to the modulus for tiny negative inputs
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

pub fn phase_from_fraction(fraction: f64) -> MoonPhase {
    PHASE_BOUNDS
        .iter()
        .find(|(bound, _)| fraction < *bound)
        .map(|(_, phase)| *phase)
        .unwrap_or(MoonPhase::New)
}

pub fn moon_phase(julian_day: f64) -> MoonPhase {
    phase_from_fraction(synodic_fraction(julian_day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_buckets() {
        assert_eq!(phase_from_fraction(0.0), MoonPhase::New);
        assert_eq!(phase_from_fraction(0.0624), MoonPhase::New);
        assert_eq!(phase_from_fraction(0.0625), MoonPhase::WaxingCrescent);
        assert_eq!(phase_from_fraction(0.25), MoonPhase::FirstQuarter);
        assert_eq!(phase_from_fraction(0.4), MoonPhase::WaxingGibbous);
        assert_eq!(phase_from_fraction(0.5), MoonPhase::Full);
        assert_eq!(phase_from_fraction(0.6), MoonPhase::WaningGibbous);
        assert_eq!(phase_from_fraction(0.75), MoonPhase::LastQuarter);
        assert_eq!(phase_from_fraction(0.9), MoonPhase::WaningCrescent);
        assert_eq!(phase_from_fraction(0.9375), MoonPhase::New);
        assert_eq!(phase_from_fraction(0.9999), MoonPhase::New);
    }

    #[test]
    fn test_reference_new_moon() {
        assert_eq!(moon_phase(NEW_MOON_EPOCH), MoonPhase::New);
        assert_eq!(moon_phase(NEW_MOON_EPOCH + SYNODIC_MONTH / 2.0), MoonPhase::Full);
        // before the epoch the cycle still runs forward
        assert_eq!(moon_phase(NEW_MOON_EPOCH - SYNODIC_MONTH / 2.0), MoonPhase::Full);
    }
}

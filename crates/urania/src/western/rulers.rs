//! Sign rulers for Western astrology.
//!
//! Only the traditional rulerships are used; the outer planets are not modelled.

use crate::ephemeris::CelestialBody;
use crate::western::signs::ZodiacSign;

/// Get the traditional ruler of a sign
pub fn get_sign_ruler(sign: ZodiacSign) -> CelestialBody {
    sign.meta().ruler
}

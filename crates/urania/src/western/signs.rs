//! Zodiac signs and their fixed attributes.
//!
//! The twelve signs partition the ecliptic into equal 30° arcs starting at Aries.
//! Each sign carries an element, a quality, a traditional ruler and three themes.

use crate::ephemeris::CelestialBody;
use crate::error::UraniaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SIGN_SPAN_DEGREES: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Ordered alphabetically so a sorted pair gives the canonical modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignMeta {
    pub sign: ZodiacSign,
    pub element: Element,
    pub quality: Quality,
    pub ruler: CelestialBody,
    pub themes: [&'static str; 3],
}

lazy_static::lazy_static! {
    static ref SIGNS: Vec<SignMeta> = vec![
        SignMeta { sign: ZodiacSign::Aries, element: Element::Fire, quality: Quality::Cardinal, ruler: CelestialBody::Mars, themes: ["initiative", "action", "courage"] },
        SignMeta { sign: ZodiacSign::Taurus, element: Element::Earth, quality: Quality::Fixed, ruler: CelestialBody::Venus, themes: ["stability", "value", "cultivation"] },
        SignMeta { sign: ZodiacSign::Gemini, element: Element::Air, quality: Quality::Mutable, ruler: CelestialBody::Mercury, themes: ["communication", "duality", "curiosity"] },
        SignMeta { sign: ZodiacSign::Cancer, element: Element::Water, quality: Quality::Cardinal, ruler: CelestialBody::Moon, themes: ["nurturing", "protection", "emotion"] },
        SignMeta { sign: ZodiacSign::Leo, element: Element::Fire, quality: Quality::Fixed, ruler: CelestialBody::Sun, themes: ["creativity", "expression", "leadership"] },
        SignMeta { sign: ZodiacSign::Virgo, element: Element::Earth, quality: Quality::Mutable, ruler: CelestialBody::Mercury, themes: ["precision", "service", "analysis"] },
        SignMeta { sign: ZodiacSign::Libra, element: Element::Air, quality: Quality::Cardinal, ruler: CelestialBody::Venus, themes: ["balance", "partnership", "harmony"] },
        SignMeta { sign: ZodiacSign::Scorpio, element: Element::Water, quality: Quality::Fixed, ruler: CelestialBody::Mars, themes: ["intensity", "transformation", "depth"] },
        SignMeta { sign: ZodiacSign::Sagittarius, element: Element::Fire, quality: Quality::Mutable, ruler: CelestialBody::Jupiter, themes: ["expansion", "philosophy", "adventure"] },
        SignMeta { sign: ZodiacSign::Capricorn, element: Element::Earth, quality: Quality::Cardinal, ruler: CelestialBody::Saturn, themes: ["achievement", "structure", "ambition"] },
        SignMeta { sign: ZodiacSign::Aquarius, element: Element::Air, quality: Quality::Fixed, ruler: CelestialBody::Saturn, themes: ["innovation", "community", "uniqueness"] },
        SignMeta { sign: ZodiacSign::Pisces, element: Element::Water, quality: Quality::Mutable, ruler: CelestialBody::Jupiter, themes: ["intuition", "compassion", "transcendence"] },
    ];
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn all() -> impl Iterator<Item = ZodiacSign> {
        Self::ALL.iter().copied()
    }

    /// Position in the canonical Aries..Pisces order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> ZodiacSign {
        Self::ALL[index % 12]
    }

    /// Sign containing an ecliptic longitude; any real input is normalized first.
    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        let lon = longitude.rem_euclid(360.0);
        Self::from_index((lon / SIGN_SPAN_DEGREES).floor() as usize)
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn meta(self) -> &'static SignMeta {
        &SIGNS[self.index()]
    }

    pub fn element(self) -> Element {
        self.meta().element
    }

    pub fn quality(self) -> Quality {
        self.meta().quality
    }

    pub fn themes(self) -> &'static [&'static str; 3] {
        &self.meta().themes
    }

    /// Start of the sign's arc on the ecliptic.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SIGN_SPAN_DEGREES
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = UraniaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ZodiacSign::all()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UraniaError::UnknownSign(s.to_string()))
    }
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Cardinal, Quality::Fixed, Quality::Mutable];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Quality::Cardinal => "cardinal",
            Quality::Fixed => "fixed",
            Quality::Mutable => "mutable",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_longitude_partitions_circle() {
        for (i, sign) in ZodiacSign::all().enumerate() {
            let start = i as f64 * 30.0;
            assert_eq!(ZodiacSign::from_longitude(start), sign);
            assert_eq!(ZodiacSign::from_longitude(start + 29.999), sign);
        }
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-0.5), ZodiacSign::Pisces);
    }

    #[test]
    fn test_sign_attributes() {
        assert_eq!(ZodiacSign::Aries.element(), Element::Fire);
        assert_eq!(ZodiacSign::Leo.quality(), Quality::Fixed);
        assert_eq!(ZodiacSign::Pisces.quality(), Quality::Mutable);
        assert_eq!(ZodiacSign::Capricorn.meta().ruler, CelestialBody::Saturn);
        assert_eq!(ZodiacSign::Libra.themes()[2], "harmony");
    }

    #[test]
    fn test_parse_sign_names() {
        assert_eq!("scorpio".parse::<ZodiacSign>().unwrap(), ZodiacSign::Scorpio);
        assert_eq!(" Virgo ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Virgo);
        assert_eq!(
            "Ophiuchus".parse::<ZodiacSign>(),
            Err(UraniaError::UnknownSign("Ophiuchus".to_string()))
        );
    }
}

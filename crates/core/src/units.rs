//! Measurement unit vocabularies and normalization.
//!
//! The backend's unit spelling evolved over time and across locales: full
//! words (`meter`, `squaremeters`), abbreviations (`qm`, `cbm`), exponent
//! notation (`m^2`), Unicode superscripts (`m²`), and mixed case all occur
//! in stored data. Each family normalizes any of those onto a closed enum,
//! falling back to the base metric unit so display and total computation
//! never have to special-case a historical spelling.

use serde::{Deserialize, Serialize};

/// Canonicalize a raw unit string before table lookup: lowercase, strip
/// whitespace, and rewrite superscript/caret exponents to plain digits.
fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace('²', "2")
        .replace('³', "3")
        .replace("^2", "2")
        .replace("^3", "3")
}

/// Unit for length measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    M,
    CM,
    MM,
    KM,
}

impl LengthUnit {
    /// Map an arbitrary unit string onto a length unit.
    ///
    /// Unrecognized input (blank included) falls back to [`LengthUnit::M`].
    pub fn from_raw(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "m" | "meter" | "meters" => Self::M,
            "cm" => Self::CM,
            "mm" => Self::MM,
            "km" => Self::KM,
            _ => Self::M,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::M => "m",
            Self::CM => "cm",
            Self::MM => "mm",
            Self::KM => "km",
        }
    }
}

/// Unit for area measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    #[default]
    M,
    CM,
    MM,
    KM,
}

impl AreaUnit {
    /// Map an arbitrary unit string onto an area unit.
    ///
    /// Bare length spellings (`m`, `cm`, ...) are accepted because some
    /// server versions store the area unit that way. Unrecognized input
    /// falls back to [`AreaUnit::M`].
    pub fn from_raw(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "m2" | "qm" | "sqm" | "squaremeter" | "squaremeters" | "m" => Self::M,
            "cm2" | "cm" => Self::CM,
            "mm2" | "mm" => Self::MM,
            "km2" | "km" => Self::KM,
            _ => Self::M,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::M => "m²",
            Self::CM => "cm²",
            Self::MM => "mm²",
            Self::KM => "km²",
        }
    }
}

/// Unit for room (volume) measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomUnit {
    #[default]
    M,
    CM,
    MM,
    KM,
}

impl RoomUnit {
    /// Map an arbitrary unit string onto a volume unit.
    ///
    /// Bare length spellings are accepted, as with [`AreaUnit::from_raw`].
    /// Unrecognized input falls back to [`RoomUnit::M`].
    pub fn from_raw(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "m3" | "cbm" | "cubicmeter" | "cubicmeters" | "m" => Self::M,
            "cm3" | "cm" => Self::CM,
            "mm3" | "mm" => Self::MM,
            "km3" | "km" => Self::KM,
            _ => Self::M,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::M => "m³",
            Self::CM => "cm³",
            Self::MM => "mm³",
            Self::KM => "km³",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_unit_accepts_full_words_and_case() {
        assert_eq!(LengthUnit::from_raw("Meter"), LengthUnit::M);
        assert_eq!(LengthUnit::from_raw("METERS"), LengthUnit::M);
        assert_eq!(LengthUnit::from_raw("cm"), LengthUnit::CM);
        assert_eq!(LengthUnit::from_raw(" km "), LengthUnit::KM);
    }

    #[test]
    fn length_unit_falls_back_to_base() {
        assert_eq!(LengthUnit::from_raw(""), LengthUnit::M);
        assert_eq!(LengthUnit::from_raw("furlong"), LengthUnit::M);
    }

    #[test]
    fn area_unit_accepts_superscript_and_caret() {
        assert_eq!(AreaUnit::from_raw("m²"), AreaUnit::M);
        assert_eq!(AreaUnit::from_raw("m^2"), AreaUnit::M);
        assert_eq!(AreaUnit::from_raw("CM²"), AreaUnit::CM);
        assert_eq!(AreaUnit::from_raw("km^2"), AreaUnit::KM);
    }

    #[test]
    fn area_unit_accepts_trade_abbreviations() {
        assert_eq!(AreaUnit::from_raw("qm"), AreaUnit::M);
        assert_eq!(AreaUnit::from_raw("sqm"), AreaUnit::M);
        assert_eq!(AreaUnit::from_raw("SquareMeters"), AreaUnit::M);
    }

    #[test]
    fn area_unit_accepts_bare_length_spelling() {
        // Some server versions store the area unit as a plain length unit.
        assert_eq!(AreaUnit::from_raw("m"), AreaUnit::M);
        assert_eq!(AreaUnit::from_raw("mm"), AreaUnit::MM);
    }

    #[test]
    fn room_unit_accepts_cbm_and_words() {
        assert_eq!(RoomUnit::from_raw("cbm"), RoomUnit::M);
        assert_eq!(RoomUnit::from_raw("CubicMeter"), RoomUnit::M);
        assert_eq!(RoomUnit::from_raw("m³"), RoomUnit::M);
        assert_eq!(RoomUnit::from_raw("cm^3"), RoomUnit::CM);
    }

    #[test]
    fn room_unit_falls_back_to_base() {
        assert_eq!(RoomUnit::from_raw(""), RoomUnit::M);
        assert_eq!(RoomUnit::from_raw("gallons"), RoomUnit::M);
    }

    #[test]
    fn labels_carry_superscripts() {
        assert_eq!(LengthUnit::M.label(), "m");
        assert_eq!(AreaUnit::CM.label(), "cm²");
        assert_eq!(RoomUnit::KM.label(), "km³");
    }
}

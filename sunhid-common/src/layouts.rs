//! Sun keyboard layouts as reported by the keyboard's DIP switches.
//!
//! See <https://docs.oracle.com/cd/E19683-01/806-6642/new-357/index.html>

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layout {
    UnitedStates,
    FrenchBelgium,
    CanadaFrench,
    Denmark,
    Germany,
    Italy,
    Netherlands,
    Norway,
    Portugal,
    SpainLatinAmerica,
    SwedenFinland,
    SwissFrench,
    SwissGerman,
    UnitedKingdom,
    /// A layout id this converter has no name for.
    Other(u8),
}

impl Layout {
    pub const ALL: [Layout; 14] = [
        Layout::UnitedStates,
        Layout::FrenchBelgium,
        Layout::CanadaFrench,
        Layout::Denmark,
        Layout::Germany,
        Layout::Italy,
        Layout::Netherlands,
        Layout::Norway,
        Layout::Portugal,
        Layout::SpainLatinAmerica,
        Layout::SwedenFinland,
        Layout::SwissFrench,
        Layout::SwissGerman,
        Layout::UnitedKingdom,
    ];

    pub fn from_id(id: u8) -> Self {
        match id {
            0b00000 => Self::UnitedStates,
            0b00010 => Self::FrenchBelgium,
            0b00011 => Self::CanadaFrench,
            0b00100 => Self::Denmark,
            0b00101 => Self::Germany,
            0b00110 => Self::Italy,
            0b00111 => Self::Netherlands,
            0b01000 => Self::Norway,
            0b01001 => Self::Portugal,
            0b01010 => Self::SpainLatinAmerica,
            0b01011 => Self::SwedenFinland,
            0b01100 => Self::SwissFrench,
            0b01101 => Self::SwissGerman,
            0b01110 => Self::UnitedKingdom,
            id => Self::Other(id),
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Self::UnitedStates => 0b00000,
            Self::FrenchBelgium => 0b00010,
            Self::CanadaFrench => 0b00011,
            Self::Denmark => 0b00100,
            Self::Germany => 0b00101,
            Self::Italy => 0b00110,
            Self::Netherlands => 0b00111,
            Self::Norway => 0b01000,
            Self::Portugal => 0b01001,
            Self::SpainLatinAmerica => 0b01010,
            Self::SwedenFinland => 0b01011,
            Self::SwissFrench => 0b01100,
            Self::SwissGerman => 0b01101,
            Self::UnitedKingdom => 0b01110,
            Self::Other(id) => *id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UnitedStates => "united-states",
            Self::FrenchBelgium => "french-belgium",
            Self::CanadaFrench => "canada-french",
            Self::Denmark => "denmark",
            Self::Germany => "germany",
            Self::Italy => "italy",
            Self::Netherlands => "netherlands",
            Self::Norway => "norway",
            Self::Portugal => "portugal",
            Self::SpainLatinAmerica => "spain-latin-america",
            Self::SwedenFinland => "sweden-finland",
            Self::SwissFrench => "swiss-french",
            Self::SwissGerman => "swiss-german",
            Self::UnitedKingdom => "united-kingdom",
            Self::Other(_) => "other",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.name() == name)
    }
}

#[cfg(test)]
#[path = "layouts_test.rs"]
mod test;

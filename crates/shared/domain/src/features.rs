use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Display};

pub const AGE_GATE: &str = "age_gate";
pub const NAV: &str = "nav";
pub const CATALOG: &str = "catalog";
pub const FOOTER: &str = "footer";
pub const CONTACT: &str = "contact";
pub const REVEAL: &str = "reveal";

/// The feature modules wired to page-ready.
///
/// Declaration order is start-up order: `Reveal` comes last so it sees
/// every reveal-tagged element the catalog injects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureKind {
    AgeGate,
    Nav,
    Catalog,
    Footer,
    Contact,
    Reveal,
}

impl FeatureKind {
    pub const ALL: [Self; 6] =
        [Self::AgeGate, Self::Nav, Self::Catalog, Self::Footer, Self::Contact, Self::Reveal];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AgeGate => AGE_GATE,
            Self::Nav => NAV,
            Self::Catalog => CATALOG,
            Self::Footer => FOOTER,
            Self::Contact => CONTACT,
            Self::Reveal => REVEAL,
        }
    }

    #[must_use]
    pub const fn flag(self) -> FeatureSet {
        match self {
            Self::AgeGate => FeatureSet::AGE_GATE,
            Self::Nav => FeatureSet::NAV,
            Self::Catalog => FeatureSet::CATALOG,
            Self::Footer => FeatureSet::FOOTER,
            Self::Contact => FeatureSet::CONTACT,
            Self::Reveal => FeatureSet::REVEAL,
        }
    }
}

impl Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Represents a set of enabled features.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const AGE_GATE = 1 << 0;
        const NAV = 1 << 1;
        const CATALOG = 1 << 2;
        const FOOTER = 1 << 3;
        const CONTACT = 1 << 4;
        const REVEAL = 1 << 5;

        const ALL = Self::AGE_GATE.bits()
            | Self::NAV.bits()
            | Self::CATALOG.bits()
            | Self::FOOTER.bits()
            | Self::CONTACT.bits()
            | Self::REVEAL.bits();
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl FeatureSet {
    /// Enabled kinds in start-up order.
    pub fn kinds(self) -> impl Iterator<Item = FeatureKind> {
        FeatureKind::ALL.into_iter().filter(move |kind| self.contains(kind.flag()))
    }
}

impl From<&str> for FeatureSet {
    fn from(s: &str) -> Self {
        match s {
            AGE_GATE => Self::AGE_GATE,
            NAV => Self::NAV,
            CATALOG => Self::CATALOG,
            FOOTER => Self::FOOTER,
            CONTACT => Self::CONTACT,
            REVEAL => Self::REVEAL,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for FeatureSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

/// Accepts raw bits, a single name, or a list of names.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeatureSetRepr {
    Bits(u32),
    Name(String),
    Names(Vec<String>),
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match FeatureSetRepr::deserialize(deserializer)? {
            FeatureSetRepr::Bits(bits) => Self::from(bits),
            FeatureSetRepr::Name(name) => Self::from(name.as_str()),
            FeatureSetRepr::Names(names) => {
                names.iter().fold(Self::empty(), |set, name| set | Self::from(name.as_str()))
            },
        })
    }
}

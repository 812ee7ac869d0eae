use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of waste categories the service can report.
///
/// The declaration order is the classifier's output index order, so
/// `Category::ALL[i]` is the category for probability `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "plastic bottle")]
    PlasticBottle,
    #[serde(rename = "plastic bag")]
    PlasticBag,
    #[serde(rename = "lithium battery")]
    LithiumBattery,
    #[serde(rename = "aerosol sprays")]
    AerosolSprays,
}

impl Category {
    pub const COUNT: usize = 4;

    pub const ALL: [Category; Category::COUNT] = [
        Category::PlasticBottle,
        Category::PlasticBag,
        Category::LithiumBattery,
        Category::AerosolSprays,
    ];

    /// Stable, language-independent key. Also the untranslated display name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::PlasticBottle => "plastic bottle",
            Self::PlasticBag => "plastic bag",
            Self::LithiumBattery => "lithium battery",
            Self::AerosolSprays => "aerosol sprays",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::PlasticBottle => 0,
            Self::PlasticBag => 1,
            Self::LithiumBattery => 2,
            Self::AerosolSprays => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Maps a reference image file name to a category by its prefix,
    /// e.g. `lithium_battery3.jpg`. Returns `None` for unknown prefixes.
    pub fn from_file_prefix(file_name: &str) -> Option<Self> {
        const PREFIXES: [(&str, Category); 4] = [
            ("plastic_bag", Category::PlasticBag),
            ("plastic_bottle", Category::PlasticBottle),
            ("lithium_battery", Category::LithiumBattery),
            ("aerosol_spray", Category::AerosolSprays),
        ];
        PREFIXES
            .iter()
            .find(|(prefix, _)| file_name.starts_with(prefix))
            .map(|(_, category)| *category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.key() == s)
            .copied()
            .ok_or_else(|| format!("Unknown waste category: {}", s))
    }
}

/// Languages with a localization pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Kannada,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Kannada];

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Kannada => "kn",
        }
    }

    /// Parses an exact language code (`en`, `hi`, `kn`).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().find(|l| l.code() == code).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

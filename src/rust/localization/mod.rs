//! Localized display names and disposal guidance for each waste category.
//!
//! The built-in tables cover every (language, category) pair. The store still
//! degrades gracefully when a pack or an entry is absent, which only happens
//! for stores assembled by hand.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, Language};

mod en;
mod hi;
mod kn;

/// Disposal tip used when no guidance exists for a category.
pub const FALLBACK_DISPOSAL_TIP: &str = "Sort and dispose according to local waste guidelines.";

/// Disposal guidance for one category in one language.
///
/// Serialized field names match the `/predict` response, so a `Guidance` can
/// be flattened straight into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    pub disposal_tip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_reuse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_reuse_video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_idea: Option<String>,
}

impl Guidance {
    /// Generic guidance carrying only [`FALLBACK_DISPOSAL_TIP`].
    pub fn fallback() -> Self {
        Self {
            disposal_tip: FALLBACK_DISPOSAL_TIP.to_string(),
            bad_effect: None,
            alternative: None,
            creative_reuse: None,
            creative_reuse_video: None,
            profit_idea: None,
        }
    }

    fn from_static(entry: &StaticGuidance) -> Self {
        Self {
            disposal_tip: entry.disposal_tip.to_string(),
            bad_effect: Some(entry.bad_effect.to_string()),
            alternative: Some(entry.alternative.to_string()),
            creative_reuse: Some(entry.creative_reuse.to_string()),
            creative_reuse_video: Some(entry.creative_reuse_video.to_string()),
            profit_idea: Some(entry.profit_idea.to_string()),
        }
    }
}

/// Compile-time guidance row used by the per-language tables.
pub(crate) struct StaticGuidance {
    pub disposal_tip: &'static str,
    pub bad_effect: &'static str,
    pub alternative: &'static str,
    pub creative_reuse: &'static str,
    pub creative_reuse_video: &'static str,
    pub profit_idea: &'static str,
}

/// Display names and guidance for a single language.
#[derive(Debug, Clone, Default)]
pub struct LanguagePack {
    names: HashMap<Category, String>,
    guidance: HashMap<Category, Guidance>,
}

impl LanguagePack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, category: Category, display_name: impl Into<String>, guidance: Guidance) -> Self {
        self.names.insert(category, display_name.into());
        self.guidance.insert(category, guidance);
        self
    }

    pub fn with_name(mut self, category: Category, display_name: impl Into<String>) -> Self {
        self.names.insert(category, display_name.into());
        self
    }

    fn from_tables(names: &[&str; Category::COUNT], guidance: &[StaticGuidance; Category::COUNT]) -> Self {
        Category::ALL.iter().fold(Self::new(), |pack, &category| {
            let i = category.index();
            pack.with_entry(category, names[i], Guidance::from_static(&guidance[i]))
        })
    }
}

/// Result of a localization lookup, with fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEntry {
    pub language: Language,
    pub display_name: String,
    pub guidance: Guidance,
}

/// Read-only (language, category) lookup table.
#[derive(Debug, Clone)]
pub struct LocalizationStore {
    packs: HashMap<Language, LanguagePack>,
    default_language: Language,
}

impl Default for LocalizationStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocalizationStore {
    /// English, Hindi and Kannada tables for all four categories.
    pub fn builtin() -> Self {
        Self::empty(Language::English)
            .with_pack(Language::English, LanguagePack::from_tables(&en::NAMES, &en::GUIDANCE))
            .with_pack(Language::Hindi, LanguagePack::from_tables(&hi::NAMES, &hi::GUIDANCE))
            .with_pack(Language::Kannada, LanguagePack::from_tables(&kn::NAMES, &kn::GUIDANCE))
    }

    pub fn empty(default_language: Language) -> Self {
        Self {
            packs: HashMap::new(),
            default_language,
        }
    }

    pub fn with_pack(mut self, language: Language, pack: LanguagePack) -> Self {
        self.packs.insert(language, pack);
        self
    }

    /// Resolves a language code, falling back to the default language for
    /// unrecognized codes.
    pub fn resolve_language(&self, code: &str) -> Language {
        Language::from_code(code.trim()).unwrap_or(self.default_language)
    }

    /// Looks up display text for `category` in the language named by `code`.
    pub fn lookup(&self, code: &str, category: Category) -> LocalizedEntry {
        self.lookup_language(self.resolve_language(code), category)
    }

    pub fn lookup_language(&self, language: Language, category: Category) -> LocalizedEntry {
        let (language, pack) = match self.packs.get(&language) {
            Some(pack) => (language, Some(pack)),
            None => {
                log::warn!("No localization pack for '{}', using '{}'", language, self.default_language);
                (self.default_language, self.packs.get(&self.default_language))
            }
        };

        let display_name = pack
            .and_then(|p| p.names.get(&category))
            .cloned()
            .unwrap_or_else(|| category.key().to_string());

        let guidance = match pack.and_then(|p| p.guidance.get(&category)) {
            Some(guidance) => guidance.clone(),
            None => {
                log::warn!("No disposal guidance for '{}' in '{}'", category, language);
                Guidance::fallback()
            }
        };

        LocalizedEntry {
            language,
            display_name,
            guidance,
        }
    }
}

//! The hybrid classification flow: exact catalog match first, model second.

use image::RgbImage;
use serde::Serialize;

use crate::category::Category;
use crate::classifier::{ClassifierError, ImageInference};
use crate::imaging::decode_rgb_bounded;
use crate::index::{perceptual_hash, KnownImageIndex};
use crate::localization::{Guidance, LocalizationStore};

/// Confidence reported for an exact catalog match.
pub const CATALOG_MATCH_CONFIDENCE: f32 = 1.0;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// How a result's category was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Catalog,
    Model,
}

/// One classification, shaped like the `/predict` response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    #[serde(skip)]
    pub category: Category,
    #[serde(skip)]
    pub source: MatchSource,
    pub waste_type: String,
    pub confidence: f32,
    #[serde(flatten)]
    pub guidance: Guidance,
}

/// Immutable, shareable classification pipeline.
pub struct ClassificationService {
    index: KnownImageIndex,
    model: Box<dyn ImageInference>,
    localization: LocalizationStore,
}

impl ClassificationService {
    pub fn new(index: KnownImageIndex, model: Box<dyn ImageInference>, localization: LocalizationStore) -> Self {
        Self {
            index,
            model,
            localization,
        }
    }

    /// Classifies encoded image bytes and localizes the result.
    ///
    /// `language` is a language code; unrecognized codes use the default
    /// language.
    ///
    /// # Errors
    /// - `Decode` if the bytes are empty or not a decodable image
    /// - `Classifier` if the fallback model fails
    pub fn classify(&self, bytes: &[u8], language: &str) -> Result<ClassificationResult, ServiceError> {
        let image = decode_rgb(bytes)?;
        self.classify_image(&image, language)
    }

    /// Same as [`ClassificationService::classify`] for an already decoded image.
    pub fn classify_image(&self, image: &RgbImage, language: &str) -> Result<ClassificationResult, ServiceError> {
        let hash = perceptual_hash(image);

        let (category, confidence, source) = match self.index.lookup(&hash) {
            Some(category) => {
                log::debug!("Catalog match for hash {}: {}", hash, category);
                (category, CATALOG_MATCH_CONFIDENCE, MatchSource::Catalog)
            }
            None => {
                let prediction = self.model.predict_image(image)?;
                log::debug!(
                    "Model prediction {} ({:.3}), distribution {:?}",
                    prediction.category,
                    prediction.confidence,
                    prediction.probabilities
                );
                (prediction.category, prediction.confidence, MatchSource::Model)
            }
        };

        let entry = self.localization.lookup(language, category);
        Ok(ClassificationResult {
            category,
            source,
            waste_type: entry.display_name,
            confidence,
            guidance: entry.guidance,
        })
    }
}

/// Decodes any supported image format into 8-bit RGB. Images whose header
/// declares more than [`crate::imaging::MAX_IMAGE_PIXELS`] are refused before decoding.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, ServiceError> {
    decode_rgb_bounded(bytes).map_err(|e| ServiceError::Decode(e.to_string()))
}

//! Waste image classification with a perceptual-hash catalog shortcut.
//!
//! An uploaded image is first hashed and looked up in a catalog of known
//! reference images; an exact match is reported at confidence 1.0. Anything
//! else goes through an ONNX image classifier. Either way the category is
//! returned with localized disposal guidance.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ecosort::{
//!     ClassificationService, Classifier, KnownImageIndex, LocalizationStore, ReferenceCatalog,
//! };
//!
//! let (index, _report) = KnownImageIndex::build(&ReferenceCatalog::builtin("reference_images"));
//! let classifier = Classifier::builder()
//!     .with_model_file("models/waste_mobilenet_v2.onnx")?
//!     .build()?;
//! let service = ClassificationService::new(index, Box::new(classifier), LocalizationStore::builtin());
//!
//! let bytes = std::fs::read("upload.jpg")?;
//! let result = service.classify(&bytes, "hi")?;
//! println!("{} ({:.2})", result.waste_type, result.confidence);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Everything the service holds is immutable after construction, so a single
//! `ClassificationService` can be shared through `Arc` by any number of
//! request handlers.

pub mod category;
pub mod classifier;
pub mod config;
pub mod imaging;
pub mod index;
pub mod localization;
pub mod model_manager;
mod runtime;
pub mod server;
pub mod service;

pub use category::{Category, Language};
pub use classifier::{
    preprocess, Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, ImageInference, InputSpec,
    PixelRange, Prediction, TensorLayout,
};
pub use config::{ModelLocation, ServerConfig};
pub use imaging::{ImageDecodeError, MAX_IMAGE_PIXELS};
pub use index::{perceptual_hash, IndexError, IndexReport, KnownImageIndex, ReferenceCatalog};
pub use localization::{Guidance, LocalizationStore, LocalizedEntry};
pub use model_manager::{ModelError, ModelManager, ModelSource};
pub use runtime::{create_session_builder, RuntimeConfig};
pub use service::{ClassificationResult, ClassificationService, MatchSource, ServiceError};

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

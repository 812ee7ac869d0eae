mod error;
mod inference;
mod model;
pub mod builder;
mod preprocess;
mod utils;

pub use error::ClassifierError;
pub use inference::{ImageInference, Prediction};
pub use model::Classifier;
pub use builder::ClassifierBuilder;
pub use preprocess::{preprocess, InputSpec, PixelRange, TensorLayout};

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Path to the ONNX model file
    pub model_path: String,
    /// Name of the model's image input
    pub input_name: String,
    /// Geometry and normalization applied before inference
    pub input_spec: InputSpec,
}

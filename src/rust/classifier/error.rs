use ort::Error as OrtError;
use std::fmt;

/// Errors raised while loading or running the waste image classifier.
#[derive(Debug)]
pub enum ClassifierError {
    /// The ONNX model file could not be found, read or turned into a session
    ModelLoad(String),
    /// The model's inputs or outputs do not fit a four-category image classifier
    InvalidModel(String),
    /// The image or input geometry cannot be fed to the model
    InvalidInput(String),
    /// The session failed while running an image
    Inference(String),
    /// The model produced a score vector of the wrong length
    ScoreCount { expected: usize, actual: usize },
    /// The model produced NaN or infinite scores
    NonFiniteScores,
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoad(msg) => write!(f, "Failed to load classifier model: {}", msg),
            Self::InvalidModel(msg) => write!(f, "Unsupported classifier model: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid classifier input: {}", msg),
            Self::Inference(msg) => write!(f, "Image inference failed: {}", msg),
            Self::ScoreCount { expected, actual } => write!(
                f,
                "Classifier returned {} scores, expected one per waste category ({})",
                actual, expected
            ),
            Self::NonFiniteScores => f.write_str("Classifier returned non-finite scores"),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<OrtError> for ClassifierError {
    fn from(err: OrtError) -> Self {
        ClassifierError::ModelLoad(err.to_string())
    }
}

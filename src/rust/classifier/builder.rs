use std::path::Path;
use std::sync::Arc;

use log::{error, info};
use ort::session::Session;
use ort::value::ValueType;

use super::error::ClassifierError;
use super::model::Classifier;
use super::preprocess::InputSpec;
use super::utils::{check_static_dims, DimCheck};
use crate::category::Category;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// A builder for constructing a Classifier with a fluent interface.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    model_path: Option<String>,
    session: Option<Session>,
    input_spec: InputSpec,
    runtime_config: RuntimeConfig,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder with the default (MobileNetV2)
    /// input spec and runtime configuration
    pub fn new() -> Self {
        Self {
            model_path: None,
            session: None,
            input_spec: InputSpec::default(),
            runtime_config: RuntimeConfig::default(),
        }
    }

    /// Sets the runtime configuration for ONNX model execution.
    ///
    /// Must be called before [`ClassifierBuilder::with_model_file`], which
    /// creates the session.
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Overrides the input geometry and normalization
    ///
    /// # Example
    /// ```
    /// use ecosort::{ClassifierBuilder, InputSpec, PixelRange, TensorLayout};
    ///
    /// let builder = ClassifierBuilder::new().with_input_spec(InputSpec {
    ///     width: 256,
    ///     height: 256,
    ///     layout: TensorLayout::Nchw,
    ///     range: PixelRange::ImageNet,
    /// });
    /// ```
    pub fn with_input_spec(mut self, spec: InputSpec) -> Self {
        self.input_spec = spec;
        self
    }

    /// Loads an ONNX model from disk
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - The path is empty
    ///   - A model is already set
    ///   - The file doesn't exist
    ///   - ONNX Runtime fails to load the model
    pub fn with_model_file<P: AsRef<Path>>(mut self, model_path: P) -> Result<Self, ClassifierError> {
        let model_path = model_path.as_ref();
        if model_path.as_os_str().is_empty() {
            return Err(ClassifierError::ModelLoad("Model path cannot be empty".to_string()));
        }
        if self.model_path.is_some() {
            return Err(ClassifierError::ModelLoad("Model path already set".to_string()));
        }
        if !model_path.exists() {
            return Err(ClassifierError::ModelLoad(format!("Model file not found: {}", model_path.display())));
        }

        // Create session using the singleton environment
        let session = create_session_builder(&self.runtime_config)?
            .commit_from_file(model_path)
            .map_err(|e| {
                error!("Failed to load model {}: {}", model_path.display(), e);
                ClassifierError::ModelLoad(format!("Failed to load model: {}", e))
            })?;
        info!("Model loaded from {}", model_path.display());

        self.model_path = Some(model_path.to_string_lossy().to_string());
        self.session = Some(session);
        Ok(self)
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The constructed Classifier if successful, or an error if:
    ///   - No model has been loaded
    ///   - The model structure doesn't match the input spec or category count
    pub fn build(mut self) -> Result<Classifier, ClassifierError> {
        let session = self.session.take()
            .ok_or_else(|| ClassifierError::ModelLoad("No ONNX model loaded".into()))?;
        let model_path = self.model_path.take()
            .ok_or_else(|| ClassifierError::ModelLoad("Model path must be set".to_string()))?;

        Self::validate_model(&session, &self.input_spec)?;
        info!("Model structure validated successfully");

        let input_name = session.inputs[0].name.clone();

        Ok(Classifier {
            model_path,
            session: Arc::new(session),
            input_name,
            input_spec: self.input_spec,
        })
    }

    /// Validates that the model has the expected input/output structure
    ///
    /// # Returns
    /// * `Result<(), ClassifierError>` - Ok if validation passes, or an error if:
    ///   - The model has no inputs or no outputs
    ///   - The first input is a tensor whose rank is not 4
    ///   - A static input dimension disagrees with the input spec
    ///   - A static class dimension of the first output is not the category count
    fn validate_model(session: &Session, spec: &InputSpec) -> Result<(), ClassifierError> {
        let input = session.inputs.first().ok_or_else(|| {
            ClassifierError::InvalidModel("Model must have at least 1 image input".to_string())
        })?;
        let output = session.outputs.first().ok_or_else(|| {
            ClassifierError::InvalidModel("Model must have at least 1 output for class scores".to_string())
        })?;

        if let ValueType::Tensor { dimensions, .. } = &input.input_type {
            match check_static_dims(dimensions, &spec.shape()) {
                DimCheck::Ok => {}
                DimCheck::RankMismatch => {
                    return Err(ClassifierError::InvalidModel(format!(
                        "Model input '{}' must be rank 4, found shape {:?}",
                        input.name, dimensions
                    )));
                }
                DimCheck::DimMismatch(axis) => {
                    return Err(ClassifierError::InvalidModel(format!(
                        "Model input '{}' has shape {:?}, input spec expects {:?} (axis {})",
                        input.name,
                        dimensions,
                        spec.shape(),
                        axis
                    )));
                }
            }
        }

        if let ValueType::Tensor { dimensions, .. } = &output.output_type {
            if let Some(&classes) = dimensions.last() {
                if classes > 0 && classes as usize != Category::COUNT {
                    return Err(ClassifierError::InvalidModel(format!(
                        "Model output '{}' has {} classes, expected {}",
                        output.name,
                        classes,
                        Category::COUNT
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_file() {
        let result = ClassifierBuilder::new().with_model_file("/nonexistent/model.onnx");
        assert!(matches!(result, Err(ClassifierError::ModelLoad(_))));
    }

    #[test]
    fn test_empty_model_path() {
        let result = ClassifierBuilder::new().with_model_file("");
        assert!(matches!(result, Err(ClassifierError::ModelLoad(_))));
    }

    #[test]
    fn test_build_without_model() {
        let result = ClassifierBuilder::new().build();
        assert!(matches!(result, Err(ClassifierError::ModelLoad(_))));
    }
}

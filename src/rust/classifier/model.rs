use std::collections::HashMap;
use std::sync::Arc;

use ndarray::Array4;
use ort::session::Session;
use ort::value::Tensor;

use super::error::ClassifierError;
use super::inference::ImageInference;
use super::preprocess::InputSpec;

/// A thread-safe waste classifier backed by an ONNX model.
///
/// The session is wrapped in `Arc` and only ever used through `&self`, so one
/// `Classifier` can serve concurrent requests without locking.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use ecosort::{Classifier, ImageInference};
///
/// let classifier = Classifier::builder()
///     .with_model_file("models/waste_mobilenet_v2.onnx")?
///     .build()?;
///
/// let image = image::open("bottle.jpg")?.to_rgb8();
/// let prediction = classifier.predict_image(&image)?;
/// println!("{} ({:.2})", prediction.category, prediction.confidence);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Classifier {
    pub model_path: String,
    pub session: Arc<Session>,
    pub input_name: String,
    pub input_spec: InputSpec,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            model_path: self.model_path.clone(),
            input_name: self.input_name.clone(),
            input_spec: self.input_spec,
        }
    }
}

impl ImageInference for Classifier {
    fn input_spec(&self) -> &InputSpec {
        &self.input_spec
    }

    /// Runs one forward pass.
    ///
    /// # Model Input Format
    /// - A single float tensor shaped by [`InputSpec::shape`]
    ///
    /// # Model Output Format
    /// - The first output, flattened; `[1, 4]` and `[4]` are both accepted
    ///
    /// # Errors
    /// - `Inference` if tensor creation, execution or extraction fails
    fn run(&self, input: Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let input_dyn = input.into_dyn();
        let input_view = input_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(self.input_name.as_str(), Tensor::from_array(&input_view)
            .map_err(|e| ClassifierError::Inference(format!("Failed to create input tensor: {}", e)))?);

        let outputs = self.session.run(input_tensors)
            .map_err(|e| ClassifierError::Inference(format!("Failed to run model: {}", e)))?;
        let output_tensor = outputs[0].try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Inference(format!("Failed to extract output tensor: {}", e)))?;

        Ok(output_tensor.iter().copied().collect())
    }
}

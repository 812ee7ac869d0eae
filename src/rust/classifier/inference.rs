use image::RgbImage;
use ndarray::Array4;

use super::error::ClassifierError;
use super::preprocess::{preprocess, InputSpec};
use super::utils::{argmax, is_distribution, softmax};
use crate::category::Category;

/// The classifier's verdict for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub category: Category,
    /// Probability of `category`, in [0, 1]
    pub confidence: f32,
    /// Full distribution in `Category::ALL` order
    pub probabilities: [f32; Category::COUNT],
}

impl Prediction {
    /// Turns raw model output into a prediction.
    ///
    /// Scores that are not already a probability distribution are passed
    /// through softmax first, so both logit and softmax heads are accepted.
    ///
    /// # Errors
    /// - `ScoreCount` if there is not exactly one score per category
    /// - `NonFiniteScores` if any score is NaN or infinite
    pub fn from_scores(scores: &[f32]) -> Result<Self, ClassifierError> {
        if scores.len() != Category::COUNT {
            return Err(ClassifierError::ScoreCount {
                expected: Category::COUNT,
                actual: scores.len(),
            });
        }
        if scores.iter().any(|x| !x.is_finite()) {
            return Err(ClassifierError::NonFiniteScores);
        }

        let probs = if is_distribution(scores) { scores.to_vec() } else { softmax(scores) };

        let mut probabilities = [0.0f32; Category::COUNT];
        for (slot, p) in probabilities.iter_mut().zip(&probs) {
            *slot = p.clamp(0.0, 1.0);
        }

        let best = argmax(&probabilities)
            .and_then(Category::from_index)
            .ok_or(ClassifierError::ScoreCount {
                expected: Category::COUNT,
                actual: 0,
            })?;

        Ok(Self {
            category: best,
            confidence: probabilities[best.index()],
            probabilities,
        })
    }
}

/// A fixed-input image model producing one score per waste category.
///
/// Implementors only supply the input geometry and a raw forward pass;
/// [`ImageInference::predict_image`] handles resizing, normalization and
/// turning scores into a [`Prediction`]. Implementations are shared across
/// request threads, hence the `Send + Sync` bound.
pub trait ImageInference: Send + Sync {
    /// Geometry and normalization the model expects.
    fn input_spec(&self) -> &InputSpec;

    /// Runs the model on a preprocessed single-image batch and returns its
    /// raw output scores.
    fn run(&self, input: Array4<f32>) -> Result<Vec<f32>, ClassifierError>;

    /// Preprocesses `image`, runs the model and picks the arg-max category.
    ///
    /// # Errors
    /// - `InvalidInput` if the image or input spec has no pixels
    /// - Forwards all errors from `run()` and [`Prediction::from_scores`]
    fn predict_image(&self, image: &RgbImage) -> Result<Prediction, ClassifierError> {
        let input = preprocess(image, self.input_spec())?;
        let scores = self.run(input)?;
        Prediction::from_scores(&scores)
    }
}

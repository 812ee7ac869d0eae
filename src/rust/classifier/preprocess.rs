use image::imageops::{self, FilterType};
use image::RgbImage;
use ndarray::Array4;

use super::error::ClassifierError;

const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Memory layout of the model's image input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorLayout {
    /// `[batch, height, width, channels]`, the Keras default
    Nhwc,
    /// `[batch, channels, height, width]`
    Nchw,
}

/// How 8-bit channel values are mapped to model input values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelRange {
    /// `x / 127.5 - 1`, giving [-1, 1] (MobileNetV2)
    SignedUnit,
    /// `x / 255`, giving [0, 1]
    Unit,
    /// `(x / 255 - mean) / std` with the ImageNet statistics
    ImageNet,
}

impl PixelRange {
    fn apply(&self, value: u8, channel: usize) -> f32 {
        let x = f32::from(value);
        match self {
            Self::SignedUnit => x / 127.5 - 1.0,
            Self::Unit => x / 255.0,
            Self::ImageNet => (x / 255.0 - IMAGENET_MEAN[channel]) / IMAGENET_STD[channel],
        }
    }
}

/// Input geometry and normalization expected by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub width: u32,
    pub height: u32,
    pub layout: TensorLayout,
    pub range: PixelRange,
}

impl Default for InputSpec {
    /// MobileNetV2 as exported from Keras: 224x224 RGB, NHWC, [-1, 1].
    fn default() -> Self {
        Self {
            width: 224,
            height: 224,
            layout: TensorLayout::Nhwc,
            range: PixelRange::SignedUnit,
        }
    }
}

impl InputSpec {
    /// Tensor shape for a single image.
    pub fn shape(&self) -> [usize; 4] {
        let (h, w) = (self.height as usize, self.width as usize);
        match self.layout {
            TensorLayout::Nhwc => [1, h, w, 3],
            TensorLayout::Nchw => [1, 3, h, w],
        }
    }
}

/// Resizes `image` to the spec's geometry (bicubic) and converts it into a
/// normalized single-image batch tensor.
pub fn preprocess(image: &RgbImage, spec: &InputSpec) -> Result<Array4<f32>, ClassifierError> {
    if spec.width == 0 || spec.height == 0 {
        return Err(ClassifierError::InvalidInput(format!(
            "Model input size must be non-zero, got {}x{}",
            spec.width, spec.height
        )));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(ClassifierError::InvalidInput("Image has no pixels".into()));
    }

    let resized = if image.dimensions() == (spec.width, spec.height) {
        image.clone()
    } else {
        imageops::resize(image, spec.width, spec.height, FilterType::CatmullRom)
    };

    let mut tensor = Array4::<f32>::zeros(spec.shape());
    for (x, y, pixel) in resized.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        for c in 0..3 {
            let value = spec.range.apply(pixel[c], c);
            match spec.layout {
                TensorLayout::Nhwc => tensor[[0, y, x, c]] = value,
                TensorLayout::Nchw => tensor[[0, c, y, x]] = value,
            }
        }
    }
    Ok(tensor)
}

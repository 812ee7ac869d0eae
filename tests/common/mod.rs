#![allow(dead_code)]

use std::path::Path;

use ecosort::{ClassifierError, ImageInference, InputSpec};
use image::{Rgb, RgbImage};
use ndarray::Array4;

/// 64x64 image made of an 8x8 grid of black/white cells chosen by `seed`.
/// Different seeds give different perceptual hashes.
pub fn pattern_image(seed: u64) -> RgbImage {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut bits = 0u64;
    for _ in 0..4 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        bits = (bits << 16) ^ (state >> 33);
    }
    RgbImage::from_fn(64, 64, |x, y| {
        let cell = (y / 8) * 8 + x / 8;
        if (bits >> cell) & 1 == 1 { Rgb([235, 235, 235]) } else { Rgb([20, 20, 20]) }
    })
}

/// A smooth photo-like image that matches no pattern image.
pub fn novel_photo() -> RgbImage {
    RgbImage::from_fn(120, 90, |x, y| Rgb([(x * 2) as u8, (y * 2) as u8, ((x + y) % 256) as u8]))
}

/// Saves `image` under `dir/name`; the extension picks the encoder.
pub fn write_image(dir: &Path, name: &str, image: &RgbImage) {
    image.save(dir.join(name)).unwrap();
}

pub fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut bytes, image::ImageOutputFormat::Png)
        .unwrap();
    bytes
}

/// 23-byte JPEG whose frame header declares 65535x65535 pixels and which
/// carries no pixel data at all.
pub fn oversized_jpeg_header() -> Vec<u8> {
    vec![
        0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0xFF, 0xFF, 0xFF, 0xFF, 0x03, 0x01, 0x11, 0x00, 0x02, 0x11,
        0x00, 0x03, 0x11, 0x00, 0xFF, 0xD9,
    ]
}

/// Stand-in classifier returning fixed scores.
pub struct FixedModel {
    pub spec: InputSpec,
    pub scores: Vec<f32>,
}

impl FixedModel {
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            spec: InputSpec { width: 32, height: 32, ..InputSpec::default() },
            scores,
        }
    }
}

impl ImageInference for FixedModel {
    fn input_spec(&self) -> &InputSpec {
        &self.spec
    }

    fn run(&self, input: Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        assert_eq!(input.shape(), &self.spec.shape());
        Ok(self.scores.clone())
    }
}

/// Stand-in classifier whose inference always fails.
pub struct FailingModel {
    pub spec: InputSpec,
}

impl Default for FailingModel {
    fn default() -> Self {
        Self { spec: InputSpec { width: 16, height: 16, ..InputSpec::default() } }
    }
}

impl ImageInference for FailingModel {
    fn input_spec(&self) -> &InputSpec {
        &self.spec
    }

    fn run(&self, _input: Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        Err(ClassifierError::Inference("session crashed".into()))
    }
}

pub const BOUNDARY: &str = "ecosort-test-boundary";

/// Builds a `multipart/form-data` body with a single file field.
pub fn multipart_body(field: &str, file_name: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

use image::RgbImage;
use img_hash::{HashAlg, Hasher, HasherConfig};

/// Side length of the grayscale grid the mean hash is computed over.
pub const HASH_SIDE: u32 = 8;

// img_hash's Hasher is not Sync, so each worker thread keeps its own.
thread_local! {
    static MEAN_HASHER: Hasher = HasherConfig::new()
        .hash_alg(HashAlg::Mean)
        .hash_size(HASH_SIDE, HASH_SIDE)
        .to_hasher();
}

/// Mean ("average") perceptual hash of an RGB image.
///
/// The image is reduced to an 8x8 grayscale grid and each cell becomes one bit
/// (brighter than the grid mean or not). Visually identical images produce
/// identical strings; the string is only ever compared for equality.
pub fn perceptual_hash(image: &RgbImage) -> String {
    MEAN_HASHER.with(|hasher| hasher.hash_image(image).to_base64())
}

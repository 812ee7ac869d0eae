use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

/// Where a model file comes from and what its SHA-256 digest must be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    /// File name inside the models directory, e.g. `waste_mobilenet_v2.onnx`
    pub name: String,
    pub url: String,
    /// Lowercase hex SHA-256 of the file
    pub sha256: String,
}

impl ModelSource {
    /// Derives the file name from the last URL path segment.
    pub fn from_url(url: impl Into<String>, sha256: impl Into<String>) -> Self {
        let url = url.into();
        let name = url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').find(|s| !s.is_empty()))
            .unwrap_or("model.onnx")
            .to_string();
        Self {
            name,
            url,
            sha256: sha256.into().to_lowercase(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Download error: {0}")]
    DownloadError(#[from] reqwest::Error),
    #[error("Download failed with HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Model verification failed")]
    VerificationFailed,
    #[error("Hash mismatch for {name}: expected {expected}, got {actual}")]
    HashMismatch {
        name: String,
        expected: String,
        actual: String,
    },
}

/// Keeps downloaded model files in a cache directory and checks their digests.
#[derive(Clone)]
pub struct ModelManager {
    models_dir: PathBuf,
    download_lock: Arc<Mutex<()>>,
}

impl ModelManager {
    /// Creates a new ModelManager with the default models directory
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::get_default_models_dir())
    }

    /// Returns the default models directory path
    pub fn get_default_models_dir() -> PathBuf {
        if let Ok(path) = env::var("ECOSORT_CACHE") {
            return PathBuf::from(path).join("models");
        }

        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("ecosort").join("models");
        }

        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("ecosort").join("models");
        }

        env::temp_dir().join("ecosort").join("models")
    }

    pub fn new<P: AsRef<Path>>(models_dir: P) -> io::Result<Self> {
        let models_dir = models_dir.as_ref().to_path_buf();
        fs::create_dir_all(&models_dir)?;
        Ok(Self {
            models_dir,
            download_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn get_model_path(&self, source: &ModelSource) -> PathBuf {
        self.models_dir.join(&source.name)
    }

    pub fn is_model_downloaded(&self, source: &ModelSource) -> bool {
        let model_path = self.get_model_path(source);
        log::debug!("Model path: {:?} (exists: {})", model_path, model_path.exists());
        model_path.exists()
    }

    pub fn verify_model(&self, source: &ModelSource) -> Result<bool, ModelError> {
        let model_path = self.get_model_path(source);
        if !model_path.exists() {
            log::info!("Model file {:?} does not exist", model_path);
            return Ok(false);
        }
        Self::verify_file(&model_path, &source.sha256)
    }

    fn verify_file(path: &Path, expected_hash: &str) -> Result<bool, ModelError> {
        let bytes = fs::read(path)?;
        let hash = sha256_hex(&bytes);
        log::debug!("Verifying {:?}: {} bytes, sha256 {}", path, bytes.len(), hash);
        Ok(hash == expected_hash)
    }

    /// Ensures the model is present and verified, downloading it when it is
    /// missing or its digest does not match. Returns the local path.
    pub async fn ensure_model(&self, source: &ModelSource) -> Result<PathBuf, ModelError> {
        let _lock = self.download_lock.lock().await;
        let model_path = self.get_model_path(source);

        if self.verify_model(source)? {
            log::info!("Using cached model {:?}", model_path);
            return Ok(model_path);
        }

        if model_path.exists() {
            log::warn!("Cached model {:?} failed verification, re-downloading", model_path);
        } else {
            log::info!("Model {} not cached, downloading...", source.name);
        }

        match self.download_and_verify(source, &model_path).await {
            Ok(()) => Ok(model_path),
            Err(e) => {
                log::error!("Failed to set up model {}: {}", source.name, e);
                let _ = self.remove_download(source);
                Err(e)
            }
        }
    }

    async fn download_and_verify(&self, source: &ModelSource, path: &Path) -> Result<(), ModelError> {
        log::info!("Downloading model from {} to {:?}", source.url, path);
        let response = reqwest::get(&source.url).await?;
        if !response.status().is_success() {
            return Err(ModelError::HttpStatus(response.status()));
        }
        let bytes = response.bytes().await?;
        log::info!("Downloaded {} bytes", bytes.len());

        let hash = sha256_hex(&bytes);
        if hash != source.sha256 {
            return Err(ModelError::HashMismatch {
                name: source.name.clone(),
                expected: source.sha256.clone(),
                actual: hash,
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &bytes)?;

        if !Self::verify_file(path, &source.sha256)? {
            return Err(ModelError::VerificationFailed);
        }

        log::info!("Model {} downloaded and verified", source.name);
        Ok(())
    }

    pub fn remove_download(&self, source: &ModelSource) -> Result<(), ModelError> {
        let model_path = self.get_model_path(source);
        if model_path.exists() {
            fs::remove_file(&model_path)?;
        }
        Ok(())
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn source(name: &str, sha256: &str) -> ModelSource {
        ModelSource {
            name: name.to_string(),
            url: "http://127.0.0.1:9/unreachable.onnx".to_string(),
            sha256: sha256.to_string(),
        }
    }

    #[test]
    fn test_source_name_from_url() {
        let s = ModelSource::from_url("https://example.com/models/waste_v2.onnx?download=1", "ABC");
        assert_eq!(s.name, "waste_v2.onnx");
        assert_eq!(s.sha256, "abc");
    }

    #[test]
    fn test_verify_cached_file() -> Result<(), ModelError> {
        let dir = tempfile::tempdir()?;
        let manager = ModelManager::new(dir.path())?;
        let good = source("good.onnx", ABC_SHA256);
        let bad = source("bad.onnx", ABC_SHA256);

        assert!(!manager.verify_model(&good)?);
        fs::write(manager.get_model_path(&good), b"abc")?;
        fs::write(manager.get_model_path(&bad), b"abd")?;

        assert!(manager.is_model_downloaded(&good));
        assert!(manager.verify_model(&good)?);
        assert!(!manager.verify_model(&bad)?);
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_model_uses_verified_cache() -> Result<(), ModelError> {
        let dir = tempfile::tempdir()?;
        let manager = ModelManager::new(dir.path())?;
        let cached = source("cached.onnx", ABC_SHA256);
        fs::write(manager.get_model_path(&cached), b"abc")?;

        let path = manager.ensure_model(&cached).await?;
        assert_eq!(path, dir.path().join("cached.onnx"));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_download_removes_stale_file() -> Result<(), ModelError> {
        let dir = tempfile::tempdir()?;
        let manager = ModelManager::new(dir.path())?;
        let stale = source("stale.onnx", ABC_SHA256);
        fs::write(manager.get_model_path(&stale), b"corrupt")?;

        assert!(manager.ensure_model(&stale).await.is_err());
        assert!(!manager.is_model_downloaded(&stale));
        Ok(())
    }

    #[test]
    fn test_default_models_dir() {
        env::set_var("ECOSORT_CACHE", "/tmp/ecosort-test-cache");
        let path = ModelManager::get_default_models_dir();
        assert_eq!(path, PathBuf::from("/tmp/ecosort-test-cache/models"));
        env::remove_var("ECOSORT_CACHE");

        let path = ModelManager::get_default_models_dir();
        assert!(path.ends_with("ecosort/models"));
    }
}

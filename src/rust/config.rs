use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::model_manager::ModelSource;

/// Command-line and environment configuration for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "ECOSORT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path to a local ONNX classifier model
    #[arg(long, env = "ECOSORT_MODEL", conflicts_with = "model_url")]
    pub model: Option<PathBuf>,

    /// URL to download the ONNX model from when it is not cached
    #[arg(long, env = "ECOSORT_MODEL_URL", requires = "model_sha256")]
    pub model_url: Option<String>,

    /// Expected SHA-256 (hex) of the downloaded model
    #[arg(long, env = "ECOSORT_MODEL_SHA256")]
    pub model_sha256: Option<String>,

    /// Force a fresh download of the model file
    #[arg(short, long)]
    pub fresh: bool,

    /// Directory holding the built-in reference images
    #[arg(long, env = "ECOSORT_REFERENCE_DIR", default_value = "reference_images")]
    pub reference_dir: PathBuf,

    /// JSON manifest listing reference images and their categories
    #[arg(long, env = "ECOSORT_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// ONNX Runtime intra-op threads (0 lets the runtime decide)
    #[arg(long, env = "ECOSORT_INTRA_THREADS", default_value_t = 0)]
    pub intra_threads: usize,

    /// Maximum upload size in MiB
    #[arg(long, env = "ECOSORT_MAX_UPLOAD_MB", default_value_t = 10)]
    pub max_upload_mb: usize,
}

/// Where the classifier model should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelLocation {
    Local(PathBuf),
    Remote(ModelSource),
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }

    /// Resolves the model flags. `None` means no model was configured.
    pub fn model_location(&self) -> Option<ModelLocation> {
        if let Some(path) = &self.model {
            return Some(ModelLocation::Local(path.clone()));
        }
        match (&self.model_url, &self.model_sha256) {
            (Some(url), Some(sha256)) => Some(ModelLocation::Remote(ModelSource::from_url(url.clone(), sha256.clone()))),
            _ => None,
        }
    }
}

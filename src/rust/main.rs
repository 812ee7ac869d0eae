use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use ecosort::{
    server, ClassificationService, Classifier, KnownImageIndex, LocalizationStore, ModelLocation, ModelManager,
    ReferenceCatalog, RuntimeConfig, ServerConfig,
};

async fn resolve_model(config: &ServerConfig) -> anyhow::Result<PathBuf> {
    match config.model_location() {
        Some(ModelLocation::Local(path)) => Ok(path),
        Some(ModelLocation::Remote(source)) => {
            let manager = ModelManager::new_default().context("Failed to create model cache directory")?;
            if config.fresh {
                info!("Fresh download requested - removing any cached model file...");
                manager.remove_download(&source)?;
            }
            Ok(manager.ensure_model(&source).await?)
        }
        None => bail!("No classifier model configured: pass --model, or --model-url with --model-sha256"),
    }
}

fn load_catalog(config: &ServerConfig) -> anyhow::Result<ReferenceCatalog> {
    match &config.manifest {
        Some(path) => Ok(ReferenceCatalog::from_manifest(path)?),
        None => Ok(ReferenceCatalog::builtin(&config.reference_dir)),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ecosort::init_logger();
    let config = ServerConfig::parse();

    info!("=== Starting waste classification service ===");
    let start_time = Instant::now();

    let catalog = load_catalog(&config)?;
    let (index, report) = KnownImageIndex::build(&catalog);
    if report.loaded == 0 && !catalog.is_empty() {
        log::warn!(
            "No reference images could be loaded (reference dir {:?}); every upload will go to the model",
            config.reference_dir
        );
    }

    let model_path = resolve_model(&config).await?;
    let classifier = Classifier::builder()
        .with_runtime_config(RuntimeConfig::with_intra_threads(config.intra_threads))
        .with_model_file(&model_path)?
        .build()?;
    info!("Classifier ready: {:?}", classifier.info());

    let service = Arc::new(ClassificationService::new(
        index,
        Box::new(classifier),
        LocalizationStore::builtin(),
    ));
    let app = server::router(service, config.body_limit_bytes());

    let addr = config.bind_addr().context("Invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Startup took {:.2?}; listening on http://{}", start_time.elapsed(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("=== Server stopped ===");
    Ok(())
}

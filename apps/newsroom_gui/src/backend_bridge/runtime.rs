//! Image worker: a dedicated thread hosting a tokio runtime that serves
//! `BackendCommand`s and posts `UiEvent`s back to the UI.

use std::{path::PathBuf, thread, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use shared::media::ImageRef;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::images::decode_image;

#[derive(Debug, Clone)]
pub struct ImageFetchConfig {
    pub asset_dir: PathBuf,
    pub remote_images: bool,
    pub timeout: Duration,
}

impl ImageFetchConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            asset_dir: settings.asset_dir.clone(),
            remote_images: settings.remote_images,
            timeout: Duration::from_secs(settings.image_timeout_secs.max(1)),
        }
    }
}

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    config: ImageFetchConfig,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("newsroom-images".into())
        .spawn(move || run_worker(cmd_rx, ui_tx, config))
}

fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: ImageFetchConfig) {
    let _ = ui_tx.try_send(UiEvent::Info("Image worker starting...".to_string()));
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            report_startup_failure(&ui_tx, format!("failed to build runtime: {err}"));
            return;
        }
    };
    let http = match reqwest::Client::builder().timeout(config.timeout).build() {
        Ok(http) => http,
        Err(err) => {
            report_startup_failure(&ui_tx, format!("failed to build http client: {err}"));
            return;
        }
    };
    let fetcher = ImageFetcher {
        http,
        asset_dir: config.asset_dir,
        remote_images: config.remote_images,
    };
    tracing::info!(
        asset_dir = %fetcher.asset_dir.display(),
        remote_images = fetcher.remote_images,
        "image worker ready"
    );

    runtime.block_on(async move {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::FetchImage { reference } => {
                    let fetcher = fetcher.clone();
                    let ui_tx = ui_tx.clone();
                    tokio::spawn(async move {
                        let event = match fetcher.load(&reference).await {
                            Ok(image) => UiEvent::ImageLoaded { reference, image },
                            Err(message) => UiEvent::ImageFailed {
                                reference,
                                error: UiError::from_message(UiErrorContext::ImageFetch, message),
                            },
                        };
                        if ui_tx.send(event).is_err() {
                            tracing::debug!("ui event receiver dropped; discarding image result");
                        }
                    });
                }
            }
        }
        tracing::debug!("command queue closed; image worker stopping");
    });
}

fn report_startup_failure(ui_tx: &Sender<UiEvent>, detail: String) {
    tracing::error!("image worker startup failure: {detail}");
    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
        UiErrorContext::BackendStartup,
        format!("backend worker startup failure: {detail}"),
    )));
}

#[derive(Clone)]
struct ImageFetcher {
    http: reqwest::Client,
    asset_dir: PathBuf,
    remote_images: bool,
}

impl ImageFetcher {
    async fn load(&self, reference: &str) -> Result<crate::ui::images::DecodedImage, String> {
        let bytes = self.fetch_bytes(reference).await?;
        tokio::task::spawn_blocking(move || decode_image(&bytes))
            .await
            .map_err(|err| format!("decode task failed: {err}"))?
    }

    async fn fetch_bytes(&self, reference: &str) -> Result<Vec<u8>, String> {
        let image_ref = ImageRef::parse(reference).map_err(|err| err.to_string())?;
        match &image_ref {
            ImageRef::Asset(_) => {
                let path = image_ref
                    .resolve_asset(&self.asset_dir)
                    .ok_or_else(|| format!("'{reference}' is not an asset"))?;
                tokio::fs::read(&path)
                    .await
                    .map_err(|err| format!("failed to read '{}': {err}", path.display()))
            }
            ImageRef::Remote(url) => {
                if !self.remote_images {
                    return Err("remote images are disabled (offline mode)".to_string());
                }
                let response = self
                    .http
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(describe_http_error)?;
                let status = response.status();
                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err("image not found (HTTP 404)".to_string());
                }
                if !status.is_success() {
                    return Err(format!("image request failed with HTTP {status}"));
                }
                let bytes = response.bytes().await.map_err(describe_http_error)?;
                Ok(bytes.to_vec())
            }
        }
    }
}

// Urls carry query strings that would skew error classification.
fn describe_http_error(err: reqwest::Error) -> String {
    if err.is_timeout() {
        "image request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {}", err.without_url())
    } else {
        err.without_url().to_string()
    }
}

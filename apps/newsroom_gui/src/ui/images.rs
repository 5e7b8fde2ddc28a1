//! Decoded images and their per-reference texture cache.

use std::collections::HashMap;

use crossbeam_channel::Sender;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiError,
    orchestration::dispatch_backend_command,
};

pub const MAX_IMAGE_DIMENSION: u32 = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = if dynamic.width() > MAX_IMAGE_DIMENSION || dynamic.height() > MAX_IMAGE_DIMENSION
    {
        dynamic.thumbnail(MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION)
    } else {
        dynamic
    }
    .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(DecodedImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

pub enum ImageState {
    Loading,
    Decoded(DecodedImage),
    Ready {
        texture: egui::TextureHandle,
        size: egui::Vec2,
    },
    /// Terminal: the reference is never requested again.
    Failed(UiError),
}

#[derive(Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    pub fn get(&self, reference: &str) -> Option<&ImageState> {
        self.entries.get(reference)
    }

    /// Queues a fetch the first time `reference` is seen.
    pub fn request(&mut self, reference: &str, cmd_tx: &Sender<BackendCommand>) {
        if self.entries.contains_key(reference) {
            return;
        }
        let state = match dispatch_backend_command(
            cmd_tx,
            BackendCommand::FetchImage {
                reference: reference.to_string(),
            },
        ) {
            Ok(()) => ImageState::Loading,
            Err(err) => ImageState::Failed(err),
        };
        self.entries.insert(reference.to_string(), state);
    }

    pub fn loaded(&mut self, reference: String, image: DecodedImage) {
        self.entries.insert(reference, ImageState::Decoded(image));
    }

    pub fn failed(&mut self, reference: String, error: UiError) {
        tracing::debug!(
            %reference,
            category = crate::controller::events::err_label(error.category()),
            "image unavailable: {}",
            error.message()
        );
        self.entries.insert(reference, ImageState::Failed(error));
    }

    /// Texture for `reference`, uploading decoded pixels on first use.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        reference: &str,
    ) -> Option<(egui::TextureHandle, egui::Vec2)> {
        let state = self.entries.get_mut(reference)?;
        if let ImageState::Decoded(image) = state {
            let color_image =
                egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba);
            let size = egui::vec2(image.width as f32, image.height as f32);
            let texture = ctx.load_texture(
                format!("news-image:{reference}"),
                color_image,
                egui::TextureOptions::LINEAR,
            );
            *state = ImageState::Ready { texture, size };
        }
        match state {
            ImageState::Ready { texture, size } => Some((texture.clone(), *size)),
            _ => None,
        }
    }

    /// Marks every in-flight request failed; used once the worker is gone.
    pub fn fail_pending(&mut self, error: &UiError) {
        for state in self.entries.values_mut() {
            if matches!(state, ImageState::Loading) {
                *state = ImageState::Failed(error.clone());
            }
        }
    }

    pub fn is_failed(&self, reference: &str) -> bool {
        matches!(self.get(reference), Some(ImageState::Failed(_)))
    }

    pub fn pending(&self) -> usize {
        self.entries
            .values()
            .filter(|state| matches!(state, ImageState::Loading))
            .count()
    }
}

//! Sprite image loading.
//!
//! Images decode on a background thread and publish exactly one result over a
//! channel. The renderer polls [`PendingImage::poll`] each frame; nothing ever
//! blocks on the load.

use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Decoded RGBA pixels plus a stable key used by backends to cache textures.
/// Cloning shares the pixel buffer.
#[derive(Clone, Debug)]
pub struct SpriteImage {
    key: Arc<str>,
    pixels: Arc<RgbaImage>,
}

impl SpriteImage {
    pub fn new(key: impl Into<Arc<str>>, pixels: RgbaImage) -> Self {
        Self {
            key: key.into(),
            pixels: Arc::new(pixels),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Decode an image file into RGBA
pub fn decode(path: &Path) -> Result<SpriteImage> {
    let pixels = image::open(path)
        .with_context(|| format!("failed to load sprite image {}", path.display()))?
        .into_rgba8();
    Ok(SpriteImage::new(path.display().to_string(), pixels))
}

enum LoadState {
    Pending(Receiver<Result<SpriteImage>>),
    Ready(SpriteImage),
    Failed,
}

/// Handle to an image that may still be loading
pub struct PendingImage {
    state: LoadState,
}

impl PendingImage {
    /// Start decoding `path` on a worker thread
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("sprite-loader".into())
            .spawn(move || {
                // The receiver may already be gone if the scene was dropped.
                let _ = tx.send(decode(&path));
            });
        match spawned {
            Ok(_) => Self::from_receiver(rx),
            Err(err) => {
                log::error!("failed to start sprite loader thread: {err}");
                Self { state: LoadState::Failed }
            }
        }
    }

    /// Wrap an existing completion channel
    pub fn from_receiver(rx: Receiver<Result<SpriteImage>>) -> Self {
        Self {
            state: LoadState::Pending(rx),
        }
    }

    /// An image that is available immediately
    #[cfg(test)]
    pub fn ready(image: SpriteImage) -> Self {
        Self {
            state: LoadState::Ready(image),
        }
    }

    /// Non-blocking readiness check. Returns the image once the load finished.
    pub fn poll(&mut self) -> Option<&SpriteImage> {
        if let LoadState::Pending(rx) = &self.state {
            match rx.try_recv() {
                Ok(Ok(image)) => {
                    log::info!(
                        "sprite image {} ready ({}x{})",
                        image.key(),
                        image.width(),
                        image.height()
                    );
                    self.state = LoadState::Ready(image);
                }
                Ok(Err(err)) => {
                    log::error!("{err:#}");
                    self.state = LoadState::Failed;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    log::error!("sprite loader exited without a result");
                    self.state = LoadState::Failed;
                }
            }
        }

        match &self.state {
            LoadState::Ready(image) => Some(image),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_failed(&self) -> bool {
        matches!(self.state, LoadState::Failed)
    }
}

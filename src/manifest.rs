//! Character sprite manifest.
//!
//! A small JSON file mapping character → animation → sprite sheet description:
//!
//! ```json
//! { "human": { "walk": { "src": "sprites/human_walk.png", "cols": 4, "rows": 8, "fps": 8 } } }
//! ```
//!
//! `src` paths are relative to the manifest file.

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::*;

/// One sprite sheet animation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpriteAnimation {
    pub src: String,
    pub cols: u32,
    pub rows: u32,
    pub fps: f32,
}

pub struct SpriteManifest {
    characters: HashMap<String, HashMap<String, SpriteAnimation>>,
    base_dir: PathBuf,
}

impl SpriteManifest {
    /// The human walk sheet the walker ships with
    pub fn builtin() -> Self {
        let mut animations = HashMap::new();
        animations.insert(TOPDOWN_WALK_ANIMATION.to_string(), Self::builtin_walk());
        let mut characters = HashMap::new();
        characters.insert(TOPDOWN_CHARACTER.to_string(), animations);

        Self {
            characters,
            base_dir: PathBuf::from("assets"),
        }
    }

    /// Human walk cycle: 4 frames per row, one row per 8-way facing
    pub fn builtin_walk() -> SpriteAnimation {
        SpriteAnimation {
            src: "sprites/human_walk.png".to_string(),
            cols: WALK_FRAME_COUNT as u32,
            rows: 8,
            fps: WALK_FPS,
        }
    }

    /// Parse manifest JSON. `base_dir` anchors relative `src` paths.
    pub fn parse(json: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let characters: HashMap<String, HashMap<String, SpriteAnimation>> =
            serde_json::from_str(json).context("invalid sprite manifest")?;

        for (character, animations) in &characters {
            for (name, anim) in animations {
                ensure!(
                    anim.cols > 0 && anim.rows > 0,
                    "{character}.{name}: sheet needs at least one row and column"
                );
                ensure!(anim.fps > 0.0, "{character}.{name}: fps must be positive");
            }
        }

        Ok(Self {
            characters,
            base_dir: base_dir.into(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let base_dir = path.parent().unwrap_or(Path::new("."));
        Self::parse(&json, base_dir).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Load `path`, falling back to [`SpriteManifest::builtin`] on any error
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(manifest) => {
                log::info!("loaded sprite manifest {}", path.display());
                manifest
            }
            Err(err) => {
                log::warn!("{err:#}; using built-in sprite manifest");
                Self::builtin()
            }
        }
    }

    pub fn animation(&self, character: &str, animation: &str) -> Option<&SpriteAnimation> {
        self.characters.get(character)?.get(animation)
    }

    /// Image path of an animation, resolved against the manifest directory
    pub fn resolve(&self, anim: &SpriteAnimation) -> PathBuf {
        self.base_dir.join(&anim.src)
    }
}

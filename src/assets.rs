//! Sprite loading
//!
//! Every sprite is loaded twice from the same file: once as a texture for the
//! renderer and once as an opacity mask for the simulation. Which files to
//! load comes from an `AssetManifest`, read from JSON when present.

use crate::animation::FRAME_COUNT;
use crate::collision::SpriteMasks;
use crate::mask::Mask;
use log::{info, warn};
use sdl2::image::{LoadSurface, LoadTexture};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;

pub const DEFAULT_MANIFEST_PATH: &str = "assets/config/sprites.json";

/// Errors that can occur while loading sprites
#[derive(Debug)]
pub enum AssetError {
    /// Manifest file could not be read
    Io(io::Error),

    /// Manifest file is not valid JSON for `AssetManifest`
    Parse(serde_json::Error),

    /// SDL2 failed to load or convert an image
    Image { path: String, message: String },

    /// The bird needs exactly one image per wing frame
    WrongFrameCount { expected: usize, found: usize },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetError::Io(e) => write!(f, "Failed to read manifest: {}", e),
            AssetError::Parse(e) => write!(f, "Invalid manifest: {}", e),
            AssetError::Image { path, message } => {
                write!(f, "Failed to load {}: {}", path, message)
            }
            AssetError::WrongFrameCount { expected, found } => {
                write!(
                    f,
                    "Expected {} bird frames, manifest lists {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for AssetError {}

impl From<io::Error> for AssetError {
    fn from(error: io::Error) -> Self {
        AssetError::Io(error)
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(error: serde_json::Error) -> Self {
        AssetError::Parse(error)
    }
}

impl From<AssetError> for String {
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}

/// Image paths for every sprite, plus the integer scale they are drawn at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub bird_frames: Vec<String>,
    pub pipe: String,
    pub base: String,
    pub background: String,
    pub scale: u32,
}

impl Default for AssetManifest {
    fn default() -> Self {
        AssetManifest {
            bird_frames: (1..=FRAME_COUNT)
                .map(|i| format!("assets/imgs/bird{}.png", i))
                .collect(),
            pipe: "assets/imgs/pipe.png".to_string(),
            base: "assets/imgs/base.png".to_string(),
            background: "assets/imgs/bg.png".to_string(),
            scale: 2,
        }
    }
}

impl AssetManifest {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: AssetManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reads the manifest at `path`, falling back to the built-in paths if
    /// the file is missing or broken.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(manifest) => {
                info!("Loaded asset manifest from {}", path.display());
                manifest
            }
            Err(AssetError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("No asset manifest at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{}; using default asset paths", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), AssetError> {
        if self.bird_frames.len() != FRAME_COUNT {
            return Err(AssetError::WrongFrameCount {
                expected: FRAME_COUNT,
                found: self.bird_frames.len(),
            });
        }
        Ok(())
    }
}

/// Loads an image file and derives its opacity mask at `scale`.
pub fn load_mask(path: &str, scale: u32) -> Result<Mask, AssetError> {
    let image_error = |message: String| AssetError::Image {
        path: path.to_string(),
        message,
    };

    let surface = Surface::from_file(path).map_err(image_error)?;
    // RGBA32 is byte order R, G, B, A regardless of platform endianness
    let surface = surface
        .convert_format(PixelFormatEnum::RGBA32)
        .map_err(image_error)?;

    let (width, height) = (surface.width(), surface.height());
    let pitch = surface.pitch() as usize;
    let mask = surface.with_lock(|pixels| Mask::from_rgba(width, height, pitch, pixels));

    Ok(mask.scaled(scale))
}

/// Builds the simulation's mask set from the manifest's images.
///
/// The top pipe is the bottom pipe turned upside down, as drawn.
pub fn load_masks(manifest: &AssetManifest) -> Result<SpriteMasks, AssetError> {
    manifest.validate()?;

    let scale = manifest.scale;
    let bird = [
        load_mask(&manifest.bird_frames[0], scale)?,
        load_mask(&manifest.bird_frames[1], scale)?,
        load_mask(&manifest.bird_frames[2], scale)?,
    ];
    let pipe_bottom = load_mask(&manifest.pipe, scale)?;
    let pipe_top = pipe_bottom.flipped_vertical();
    let base = load_mask(&manifest.base, scale)?;

    info!(
        "Built masks: bird {}x{}, pipe {}x{}, base {}x{}",
        bird[0].width(),
        bird[0].height(),
        pipe_bottom.width(),
        pipe_bottom.height(),
        base.width(),
        base.height()
    );

    Ok(SpriteMasks {
        bird,
        pipe_top,
        pipe_bottom,
        base,
    })
}

/// Helper struct to hold all game textures, drawn at `scale`
pub struct GameTextures<'a> {
    pub bird: Vec<Texture<'a>>,
    pub pipe: Texture<'a>,
    pub base: Texture<'a>,
    pub background: Texture<'a>,
    pub scale: u32,
}

fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, AssetError> {
    texture_creator
        .load_texture(path)
        .map_err(|message| AssetError::Image {
            path: path.to_string(),
            message,
        })
}

pub fn load_textures<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    manifest: &AssetManifest,
) -> Result<GameTextures<'a>, AssetError> {
    manifest.validate()?;

    let bird = manifest
        .bird_frames
        .iter()
        .map(|path| load_texture(texture_creator, path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameTextures {
        bird,
        pipe: load_texture(texture_creator, &manifest.pipe)?,
        base: load_texture(texture_creator, &manifest.base)?,
        background: load_texture(texture_creator, &manifest.background)?,
        scale: manifest.scale.max(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest_paths() {
        let manifest = AssetManifest::default();
        assert_eq!(
            manifest.bird_frames,
            vec![
                "assets/imgs/bird1.png",
                "assets/imgs/bird2.png",
                "assets/imgs/bird3.png"
            ]
        );
        assert_eq!(manifest.pipe, "assets/imgs/pipe.png");
        assert_eq!(manifest.scale, 2);
    }

    #[test]
    fn test_partial_manifest_fills_defaults() {
        let manifest = AssetManifest::from_json(r#"{ "scale": 3 }"#).unwrap();
        assert_eq!(manifest.scale, 3);
        assert_eq!(manifest.base, AssetManifest::default().base);
    }

    #[test]
    fn test_manifest_round_trips_through_json() {
        let manifest = AssetManifest {
            scale: 1,
            ..AssetManifest::default()
        };
        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(AssetManifest::from_json(&json).unwrap(), manifest);
    }

    #[test]
    fn test_wrong_frame_count_rejected() {
        let result = AssetManifest::from_json(r#"{ "bird_frames": ["a.png"] }"#);
        match result {
            Err(AssetError::WrongFrameCount { expected, found }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 1);
            }
            other => panic!("expected WrongFrameCount, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = AssetManifest::from_json("{ not json");
        assert!(matches!(result, Err(AssetError::Parse(_))));
    }

    #[test]
    fn test_missing_manifest_falls_back_to_default() {
        let manifest = AssetManifest::load_or_default("does/not/exist.json");
        assert_eq!(manifest, AssetManifest::default());
    }

    #[test]
    fn test_error_converts_to_string() {
        let error = AssetError::Image {
            path: "assets/imgs/pipe.png".to_string(),
            message: "no such file".to_string(),
        };
        let message: String = error.into();
        assert_eq!(message, "Failed to load assets/imgs/pipe.png: no such file");
    }

    #[test]
    fn test_shipped_manifest_points_at_existing_sprites() {
        let manifest = AssetManifest::load_from_file(DEFAULT_MANIFEST_PATH).unwrap();
        assert_eq!(manifest, AssetManifest::default());

        let mut paths = manifest.bird_frames.clone();
        paths.extend([manifest.pipe, manifest.base, manifest.background]);
        for path in paths {
            assert!(Path::new(&path).is_file(), "missing sprite {}", path);
        }
    }
}

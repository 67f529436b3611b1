//! Sprite images for the overlay.
//!
//! `duck-paused.png` is required and sets the sprite size. The walk
//! animations are optional and fall back to the static image.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use pixel_common::{AssetError, Size};
use tracing::{info, warn};

use crate::overlay::Frame;

pub const WALK_LEFT_FILE: &str = "duck-left.gif";
pub const WALK_RIGHT_FILE: &str = "duck-right.gif";
pub const PAUSED_FILE: &str = "duck-paused.png";

#[derive(Debug, Clone)]
pub struct SpriteAssets {
    dir: PathBuf,
    size: Size,
    walk_left: &'static str,
    walk_right: &'static str,
}

impl SpriteAssets {
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        if !dir.is_dir() {
            return Err(AssetError::DirectoryNotFound(dir.to_path_buf()));
        }

        let size = png_size(&dir.join(PAUSED_FILE))?;
        let walk_left = walk_or_fallback(dir, WALK_LEFT_FILE);
        let walk_right = walk_or_fallback(dir, WALK_RIGHT_FILE);

        info!(
            dir = %dir.display(),
            width = size.width,
            height = size.height,
            "sprite assets loaded"
        );
        Ok(Self {
            dir: dir.to_path_buf(),
            size,
            walk_left,
            walk_right,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sprite size in logical pixels, taken from the static image.
    pub fn size(&self) -> Size {
        self.size
    }

    /// File name for a frame, relative to the asset root served to the
    /// overlay page.
    pub fn frame_src(&self, frame: Frame) -> &'static str {
        match frame {
            Frame::WalkLeft => self.walk_left,
            Frame::WalkRight => self.walk_right,
            Frame::Paused => PAUSED_FILE,
        }
    }
}

fn walk_or_fallback(dir: &Path, file: &'static str) -> &'static str {
    if dir.join(file).is_file() {
        file
    } else {
        warn!(file, "walk animation missing, using {PAUSED_FILE}");
        PAUSED_FILE
    }
}

fn png_size(path: &Path) -> Result<Size, AssetError> {
    let file = File::open(path).map_err(|_| AssetError::Missing(path.to_path_buf()))?;
    let reader = png::Decoder::new(BufReader::new(file))
        .read_info()
        .map_err(|e| AssetError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let info = reader.info();
    if info.width == 0 || info.height == 0 {
        return Err(AssetError::Decode {
            path: path.to_path_buf(),
            reason: "image has no pixels".into(),
        });
    }
    Ok(Size::new(info.width, info.height))
}

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::Error;
use crate::render::image::Image;
use crate::resource::spheremap::SpheremapWriter;

/// Writes the spheremap as a 32-bit RGBA bitmap, regardless of the path's extension.
pub struct FileSystemSpheremapWriter {
    path: PathBuf,
}

impl FileSystemSpheremapWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SpheremapWriter for FileSystemSpheremapWriter {
    fn write(&self, spheremap: &Image) -> Result<()> {
        let (width, height) = spheremap.dimensions();
        log::debug!(
            "Writing {width}x{height} spheremap: {}",
            self.path.display()
        );

        spheremap
            .data()
            .save_with_format(&self.path, image::ImageFormat::Bmp)
            .map_err(|err| {
                anyhow::Error::from(Error::Encode {
                    path: self.path.display().to_string(),
                    message: err.to_string(),
                })
            })
    }
}

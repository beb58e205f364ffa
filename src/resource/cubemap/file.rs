use std::path::PathBuf;

use anyhow::Result;

use crate::data::face::CubeFace;
use crate::error::Error;
use crate::render::image::Image;
use crate::resource::cubemap::CubeMapLoader;

/// Loads faces stored side by side as `{prefix}_{suffix}.{extension}`.
pub struct FileSystemCubeMapLoader {
    prefix: String,
    extension: String,
}

impl FileSystemCubeMapLoader {
    pub fn new(prefix: &str, extension: &str) -> Self {
        Self {
            prefix: String::from(prefix),
            extension: String::from(extension),
        }
    }

    pub fn face_path(&self, face: CubeFace) -> PathBuf {
        PathBuf::from(format!(
            "{}_{}.{}",
            self.prefix,
            face.file_suffix(),
            self.extension
        ))
    }
}

impl CubeMapLoader for FileSystemCubeMapLoader {
    fn load_face(&self, face: CubeFace) -> Result<Image> {
        let path = self.face_path(face);
        log::debug!("Loading cubemap face {face}: {}", path.display());

        let data = match image::open(&path) {
            Ok(data) => data.to_rgba8(),
            Err(err) => {
                return Err(Error::Decode {
                    path: path.display().to_string(),
                    message: err.to_string(),
                }
                .into())
            }
        };

        log::debug!(
            "Loaded cubemap face {face}: {}x{}",
            data.width(),
            data.height()
        );

        Ok(Image::from_rgba_image(data))
    }
}

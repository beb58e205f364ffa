use anyhow::Result;

use crate::data::face::CubeFace;
use crate::render::image::Image;

pub mod file;

pub trait CubeMapLoader {
    /// Decodes one face as RGBA8, whatever the channel layout of the source.
    fn load_face(&self, face: CubeFace) -> Result<Image>;
}

use anyhow::Result;

use crate::render::image::Image;

pub mod file;

pub trait SpheremapWriter {
    fn write(&self, spheremap: &Image) -> Result<()>;
}

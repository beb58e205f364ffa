use std::num::NonZeroU32;

use rayon::prelude::*;

use crate::data::projection::{pixel_center, spheremap_direction};
use crate::render::cubemap::CubeMap;
use crate::render::image::Image;

const CHANNELS: usize = 4;

pub struct SpheremapRenderer {
    output_size: NonZeroU32,
}

impl SpheremapRenderer {
    pub fn new(output_size: NonZeroU32) -> Self {
        Self { output_size }
    }

    /// Renders the square spheremap, sampling `cubemap` once per output pixel center.
    ///
    /// Rows are filled in parallel; the cubemap is only read.
    pub fn render(&self, cubemap: &CubeMap) -> Image {
        let size = self.output_size.get();
        let mut output = image::RgbaImage::new(size, size);

        output
            .par_chunks_mut(size as usize * CHANNELS)
            .enumerate()
            .for_each(|(y, row)| {
                let t = pixel_center(y as u32, size);
                for (x, texel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                    let s = pixel_center(x as u32, size);
                    let sample = cubemap.sample_direction(spheremap_direction(s, t));
                    texel.copy_from_slice(&sample.0);
                }
            });

        Image::from_rgba_image(output)
    }
}

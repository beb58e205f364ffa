use image::Rgba;

/// An RGBA8 image that exclusively owns its texel storage.
pub struct Image {
    data: image::RgbaImage,
}

impl Image {
    pub fn from_rgba_image(rgba_image: image::RgbaImage) -> Self {
        Self { data: rgba_image }
    }

    pub fn data(&self) -> &image::RgbaImage {
        &self.data
    }

    pub fn into_rgba_image(self) -> image::RgbaImage {
        self.data
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.data.dimensions()
    }

    /// Panics if `(x, y)` lies outside the image.
    pub fn read_texel(&self, x: u32, y: u32) -> Rgba<u8> {
        let (width, height) = self.dimensions();
        assert!(
            x < width && y < height,
            "Texel ({x}, {y}) is out of bounds for a {width}x{height} image"
        );

        *self.data.get_pixel(x, y)
    }
}

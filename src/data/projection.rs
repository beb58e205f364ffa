use cgmath::Vector3;

/// Direction used for output pixels that fall outside the projected disk.
pub const BACK_POLE: Vector3<f32> = Vector3 {
    x: 0.0,
    y: 0.0,
    z: -1.0,
};

/// Normalized coordinate of the center of pixel `index` along an axis of `size` pixels.
pub fn pixel_center(index: u32, size: u32) -> f32 {
    (index as f32 + 0.5) / size as f32
}

/// Maps a normalized spheremap coordinate to the direction it encodes.
///
/// The image center maps to +Z and the edge of the inscribed disk to -Z. Anything outside
/// the disk (the image corners) falls back to [`BACK_POLE`]. The returned vector is not
/// normalized; only its signs and relative magnitudes are meaningful.
pub fn spheremap_direction(s: f32, t: f32) -> Vector3<f32> {
    let r = s - s * s + t - t * t;
    let p = 16.0 * r - 4.0;
    if p < 0.0 {
        return BACK_POLE;
    }

    let q = p.sqrt();
    Vector3::new(q * (2.0 * s - 1.0), -q * (2.0 * t - 1.0), 8.0 * r - 3.0)
}

use anyhow::Result;
use cgmath::Vector3;
use image::Rgba;

use crate::data::face::{CubeFace, FaceCoordinates};
use crate::error::Error;
use crate::render::image::Image;
use crate::resource::cubemap::CubeMapLoader;

/// Six square faces of identical size, indexed by [`CubeFace`].
pub struct CubeMap {
    faces: [Image; 6],
}

impl CubeMap {
    /// Loads all six faces, stopping at the first one that fails to load.
    pub fn from_loader(loader: &impl CubeMapLoader) -> Result<Self> {
        let [positive_x, negative_x, positive_y, negative_y, positive_z, negative_z] =
            CubeFace::ALL;

        Self::from_faces([
            loader.load_face(positive_x)?,
            loader.load_face(negative_x)?,
            loader.load_face(positive_y)?,
            loader.load_face(negative_y)?,
            loader.load_face(positive_z)?,
            loader.load_face(negative_z)?,
        ])
    }

    /// Builds a cubemap from faces in [`CubeFace::ALL`] order.
    pub fn from_faces(faces: [Image; 6]) -> Result<Self> {
        let expected = faces[CubeFace::PositiveX.index()].dimensions();
        if expected.0 != expected.1 {
            return Err(Error::NonSquareFace {
                face: CubeFace::PositiveX,
                dimensions: expected,
            }
            .into());
        }

        for face in CubeFace::ALL {
            let actual = faces[face.index()].dimensions();
            if actual != expected {
                return Err(Error::FaceSizeMismatch {
                    face,
                    expected,
                    actual,
                }
                .into());
            }
        }

        Ok(Self { faces })
    }

    pub fn face(&self, face: CubeFace) -> &Image {
        &self.faces[face.index()]
    }

    pub fn face_size(&self) -> u32 {
        self.face(CubeFace::PositiveX).dimensions().0
    }

    pub fn resolve_direction(&self, direction: Vector3<f32>) -> FaceCoordinates {
        CubeFace::resolve_direction(direction)
    }

    /// Nearest-neighbor lookup of the normalized coordinate `(s, t)` on `face`.
    pub fn sample_face(&self, face: CubeFace, s: f32, t: f32) -> Rgba<u8> {
        let image = self.face(face);
        let (width, height) = image.dimensions();

        // Float to int casts saturate, so out-of-range or NaN coordinates clamp to 0.
        let x = ((s * width as f32) as u32).min(width - 1);
        let y = ((t * height as f32) as u32).min(height - 1);

        image.read_texel(x, y)
    }

    pub fn sample_direction(&self, direction: Vector3<f32>) -> Rgba<u8> {
        let FaceCoordinates { face, s, t } = self.resolve_direction(direction);
        self.sample_face(face, s, t)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::resource::cubemap::tests::MemoryCubeMapLoader;

    pub fn solid_face(size: u32, color: [u8; 4]) -> Image {
        Image::from_rgba_image(image::RgbaImage::from_pixel(size, size, Rgba(color)))
    }

    fn indexed_face(size: u32, face: CubeFace) -> Image {
        Image::from_rgba_image(image::RgbaImage::from_fn(size, size, |x, y| {
            Rgba([x as u8, y as u8, face.index() as u8, 255])
        }))
    }

    fn indexed_cubemap(size: u32) -> CubeMap {
        CubeMap::from_faces(CubeFace::ALL.map(|face| indexed_face(size, face))).unwrap()
    }

    #[test]
    fn sample_face_picks_nearest_texel() {
        let cubemap = indexed_cubemap(4);
        assert_eq!(cubemap.face_size(), 4);

        let steps: [f32; 9] = [0.0, 0.1, 0.24, 0.25, 0.49, 0.5, 0.74, 0.75, 0.99];
        for face in CubeFace::ALL {
            for s in steps {
                for t in steps {
                    let expected_x = (s * 4.0).floor() as u8;
                    let expected_y = (t * 4.0).floor() as u8;
                    assert_eq!(
                        cubemap.sample_face(face, s, t),
                        Rgba([expected_x, expected_y, face.index() as u8, 255])
                    );
                }
            }
        }
    }

    #[test]
    fn sample_face_clamps_upper_edge() {
        let cubemap = indexed_cubemap(4);
        assert_eq!(
            cubemap.sample_face(CubeFace::NegativeY, 1.0, 1.0),
            Rgba([3, 3, CubeFace::NegativeY.index() as u8, 255])
        );
    }

    #[test]
    fn sample_direction_reads_pierced_face() {
        let cubemap = indexed_cubemap(2);
        let texel = cubemap.sample_direction(Vector3::new(0.0, 0.0, -3.0));
        assert_eq!(texel[2], CubeFace::NegativeZ.index() as u8);

        let texel = cubemap.sample_direction(Vector3::new(0.2, 0.9, 0.2));
        assert_eq!(texel[2], CubeFace::PositiveY.index() as u8);
    }

    #[test]
    fn zero_direction_samples_first_texel() {
        let cubemap = indexed_cubemap(4);
        assert_eq!(
            cubemap.sample_direction(Vector3::new(0.0, 0.0, 0.0)),
            Rgba([0, 0, CubeFace::PositiveX.index() as u8, 255])
        );
    }

    #[test]
    fn mismatched_face_is_rejected() {
        let mut faces = CubeFace::ALL.map(|_| solid_face(4, [0, 0, 0, 255]));
        faces[CubeFace::PositiveZ.index()] = solid_face(8, [0, 0, 0, 255]);

        let err = CubeMap::from_faces(faces).err().unwrap();
        match err.downcast_ref::<Error>() {
            Some(Error::FaceSizeMismatch {
                face,
                expected,
                actual,
            }) => {
                assert_eq!(*face, CubeFace::PositiveZ);
                assert_eq!(*expected, (4, 4));
                assert_eq!(*actual, (8, 8));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_square_face_is_rejected() {
        let faces = CubeFace::ALL.map(|_| {
            Image::from_rgba_image(image::RgbaImage::from_pixel(4, 2, Rgba([0, 0, 0, 255])))
        });

        let err = CubeMap::from_faces(faces).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NonSquareFace { .. })
        ));
    }

    #[test]
    fn loader_failure_aborts_construction() {
        let loader = MemoryCubeMapLoader::solid(2).without(CubeFace::NegativeX);

        let err = CubeMap::from_loader(&loader).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Decode { .. })
        ));
    }
}

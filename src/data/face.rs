use cgmath::Vector3;

/// One face of a cubemap, in the fixed +X, -X, +Y, -Y, +Z, -Z order used to index the faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

/// Face-local texture coordinates of a direction, with `s` and `t` in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceCoordinates {
    pub face: CubeFace,
    pub s: f32,
    pub t: f32,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Suffix used in the face image file name, e.g. `sky_right.png` for +X.
    pub fn file_suffix(self) -> &'static str {
        match self {
            CubeFace::PositiveX => "right",
            CubeFace::NegativeX => "left",
            CubeFace::PositiveY => "top",
            CubeFace::NegativeY => "bottom",
            CubeFace::PositiveZ => "front",
            CubeFace::NegativeZ => "back",
        }
    }

    fn from_major_axis(axis: usize, negative: bool) -> Self {
        match (axis, negative) {
            (0, false) => CubeFace::PositiveX,
            (0, true) => CubeFace::NegativeX,
            (1, false) => CubeFace::PositiveY,
            (1, true) => CubeFace::NegativeY,
            (2, false) => CubeFace::PositiveZ,
            _ => CubeFace::NegativeZ,
        }
    }

    /// Unnormalized (s, t) of `direction` projected onto this face.
    fn face_local(self, direction: Vector3<f32>) -> (f32, f32) {
        let Vector3 { x, y, z } = direction;
        match self {
            CubeFace::PositiveX => (-z, -y),
            CubeFace::NegativeX => (z, -y),
            CubeFace::PositiveY => (x, z),
            CubeFace::NegativeY => (x, -z),
            CubeFace::PositiveZ => (x, -y),
            CubeFace::NegativeZ => (-x, -y),
        }
    }

    /// Finds the face pierced by the ray from the origin through `direction`.
    ///
    /// The major axis is the component with the largest magnitude; ties go to X before Y
    /// before Z. A zero major component selects the positive face. The direction does not
    /// need to be normalized. The zero vector resolves to +X with NaN coordinates.
    pub fn resolve_direction(direction: Vector3<f32>) -> FaceCoordinates {
        let v = [direction.x, direction.y, direction.z];
        let a = [v[0].abs(), v[1].abs(), v[2].abs()];

        let major_axis = if a[0] >= a[1] && a[0] >= a[2] {
            0
        } else if a[1] >= a[2] {
            1
        } else {
            2
        };

        let face = CubeFace::from_major_axis(major_axis, v[major_axis] < 0.0);
        let (tmp_s, tmp_t) = face.face_local(direction);
        let m = a[major_axis];

        FaceCoordinates {
            face,
            s: 0.5 * (tmp_s / m + 1.0),
            t: 0.5 * (tmp_t / m + 1.0),
        }
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CubeFace::PositiveX => "+X",
            CubeFace::NegativeX => "-X",
            CubeFace::PositiveY => "+Y",
            CubeFace::NegativeY => "-Y",
            CubeFace::PositiveZ => "+Z",
            CubeFace::NegativeZ => "-Z",
        };
        write!(f, "{name} ({})", self.file_suffix())
    }
}

use crate::data::face::CubeFace;

#[derive(Debug)]
pub enum Error {
    Decode {
        path: String,
        message: String,
    },
    NonSquareFace {
        face: CubeFace,
        dimensions: (u32, u32),
    },
    FaceSizeMismatch {
        face: CubeFace,
        expected: (u32, u32),
        actual: (u32, u32),
    },
    Encode {
        path: String,
        message: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Decode { path, message } => {
                write!(f, "Failed to decode cubemap face image {path}: {message}")
            }
            Error::NonSquareFace { face, dimensions } => write!(
                f,
                "Cubemap face {face} must be square, but is {}x{}",
                dimensions.0, dimensions.1
            ),
            Error::FaceSizeMismatch {
                face,
                expected,
                actual,
            } => write!(
                f,
                "Cubemap face {face} is {}x{}, expected {}x{} to match the other faces",
                actual.0, actual.1, expected.0, expected.1
            ),
            Error::Encode { path, message } => {
                write!(f, "Failed to write spheremap image {path}: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}

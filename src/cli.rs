use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::Parser;

/// Converts six cubemap face images into a single equal-area spheremap
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File name stem shared by the face images, e.g. `sky` for `sky_right.png`
    pub prefix: String,

    /// Extension of the face images, without the leading dot
    pub extension: String,

    /// Width and height of the square output image in pixels
    pub output_size: NonZeroU32,

    /// Where to write the spheremap bitmap [default: <PREFIX>_spheremap.bmp]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<Cli> for cubemap_to_spheremap::args::Args {
    fn from(value: Cli) -> Self {
        cubemap_to_spheremap::args::Args {
            prefix: value.prefix,
            extension: value.extension,
            output_size: value.output_size,
            output: value.output,
        }
    }
}

use std::num::NonZeroU32;
use std::path::PathBuf;

pub struct Args {
    pub prefix: String,
    pub extension: String,
    pub output_size: NonZeroU32,
    pub output: Option<PathBuf>,
}

impl Args {
    /// The spheremap is written to `{prefix}_spheremap.bmp` unless an explicit path was given.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => PathBuf::from(format!("{}_spheremap.bmp", self.prefix)),
        }
    }
}

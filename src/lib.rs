use std::time::Instant;

use anyhow::Result;

use crate::args::Args;
use crate::render::cubemap::CubeMap;
use crate::render::spheremap::SpheremapRenderer;
use crate::resource::cubemap::file::FileSystemCubeMapLoader;
use crate::resource::spheremap::file::FileSystemSpheremapWriter;
use crate::resource::spheremap::SpheremapWriter;

pub mod args;
pub mod data;
pub mod error;
pub mod render;
pub mod resource;

pub fn run(args: Args) -> Result<()> {
    env_logger::init();

    convert(&args)
}

/// Loads the six faces named by `args`, renders the spheremap and writes it out.
///
/// Nothing is written unless every face loads and validates.
pub fn convert(args: &Args) -> Result<()> {
    let start = Instant::now();
    log::info!(
        "Converting cubemap {}_*.{} to a {}x{} spheremap",
        args.prefix,
        args.extension,
        args.output_size,
        args.output_size
    );

    let loader = FileSystemCubeMapLoader::new(&args.prefix, &args.extension);
    let cubemap = CubeMap::from_loader(&loader)?;
    let face_size = cubemap.face_size();
    log::info!("Loaded cubemap with {face_size}x{face_size} faces");

    let spheremap = SpheremapRenderer::new(args.output_size).render(&cubemap);
    drop(cubemap);

    let writer = FileSystemSpheremapWriter::new(args.output_path());
    writer.write(&spheremap)?;

    log::info!(
        "Wrote spheremap {} in {:.2?}",
        writer.path().display(),
        start.elapsed()
    );

    Ok(())
}

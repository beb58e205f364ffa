pub mod cubemap;
pub mod image;
pub mod spheremap;

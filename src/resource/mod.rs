pub mod cubemap;
pub mod spheremap;

pub mod face;
pub mod projection;

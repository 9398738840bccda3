pub mod common;
pub mod render;

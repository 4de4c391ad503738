pub mod config;
pub mod handle;
pub mod normalize;

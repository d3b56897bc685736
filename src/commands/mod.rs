pub mod build;
pub mod completions;
pub mod config;
pub mod demo;
pub mod render;
pub mod traits;
pub mod variants;

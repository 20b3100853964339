// crates/cortools-cli/src/io/mod.rs

pub mod input;
pub mod render;

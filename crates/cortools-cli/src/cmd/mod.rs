// crates/cortools-cli/src/cmd/mod.rs

pub mod view;
pub mod write;

//! Random password generation, heuristic strength rating and a plaintext
//! JSON vault for the passwords worth keeping.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::vault::Vault;

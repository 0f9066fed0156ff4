// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{
    generate_password, generate_password_with, requested_length, GeneratorError, PasswordGenerator,
};
pub use strength::{check_strength, strength_score};

//! Mathematical foundation for the Aurelion engine.

#[macro_use]
mod macros;

pub mod angle;
pub mod consts;
pub mod matrix;
pub mod vector;

pub use matrix::Matrix4;
pub use vector::{Vector2, Vector3, Vector4};

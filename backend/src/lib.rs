pub use gl;

pub mod glutils;

pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod scene;
pub mod shaders;
pub mod system;

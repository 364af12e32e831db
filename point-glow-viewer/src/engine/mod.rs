pub mod animation;
pub mod assets;
pub mod core;
pub mod error;
pub mod loading;
pub mod mesh;
pub mod scene;
pub mod shaders;

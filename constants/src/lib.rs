pub mod animation;
pub mod camera;
pub mod path;
pub mod render_settings;

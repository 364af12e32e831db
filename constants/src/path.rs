/// Directory under `assets/` holding the demo scene manifest and model.
pub const RELATIVE_SCENE_PATH: &str = "scenes/polar_bear";

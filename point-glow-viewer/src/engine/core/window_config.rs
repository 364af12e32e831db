use bevy::prelude::*;
use bevy::window::PresentMode;

use constants::render_settings::VIEWPORT_SIZE;

/// Fixed 600x600 drawing surface. On the web the host page supplies the
/// `#bevy` canvas, centred with a black background; natively we open a
/// non-resizable window of the same logical size.
pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            resolution: (VIEWPORT_SIZE, VIEWPORT_SIZE).into(),
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "point glow viewer".into(),
            resolution: (VIEWPORT_SIZE, VIEWPORT_SIZE).into(),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;

use constants::animation::SEGMENT_DURATIONS;
use constants::render_settings::CLEAR_COLOR;
use engine::animation::clock::{AnimationState, advance_animation_clock};
use engine::animation::fly_in::{
    PointerPosition, apply_mouse_look, debug_camera_log, drive_fly_in, reset_on_pointer_down,
    track_pointer, update_glow_uniforms,
};
use engine::animation::segments::SegmentTimeline;
use engine::assets::point_cloud_assets::PointCloudAssets;
use engine::assets::scene_manifest::SceneManifest;
use engine::core::app_state::{AppState, transition_to_running};
use engine::core::window_config::create_window_config;
use engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use engine::loading::model_loader::build_point_cloud_when_ready;
use engine::loading::progress::LoadingProgress;
use engine::scene::labels::spawn_labels;
use engine::scene::setup_scene;
use engine::shaders::GlowPointMaterial;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Create the demo application: custom glow material, JSON scene manifest
/// support, and a Loading -> Running state split so the animation only starts
/// once the point cloud is in the scene.
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<GlowPointMaterial>::default())
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<PointCloudAssets>()
        .init_resource::<AnimationState>()
        .init_resource::<PointerPosition>()
        .insert_resource(SegmentTimeline::new(SEGMENT_DURATIONS.to_vec()))
        .insert_resource(ClearColor(Color::srgb(
            CLEAR_COLOR[0],
            CLEAR_COLOR[1],
            CLEAR_COLOR[2],
        )));

    app.add_systems(Startup, (setup_scene, start_loading))
        .add_systems(
            Update,
            (
                load_manifest_system,
                build_point_cloud_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), spawn_labels)
        .add_systems(
            Update,
            (track_pointer, reset_on_pointer_down, debug_camera_log)
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(
            Update,
            (
                advance_animation_clock,
                drive_fly_in,
                apply_mouse_look,
                update_glow_uniforms,
            )
                .chain()
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

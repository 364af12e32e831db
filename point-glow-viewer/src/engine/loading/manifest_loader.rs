use bevy::prelude::*;

use constants::path::RELATIVE_SCENE_PATH;

use crate::engine::assets::point_cloud_assets::PointCloudAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

/// Kick off the manifest load at startup.
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{}/manifest.json", RELATIVE_SCENE_PATH);
    info!("Loading scene manifest from {manifest_path}");
    manifest_loader.handle = Some(asset_server.load(&manifest_path));
}

/// Poll the manifest until parsed, then start the model load. The manifest is
/// the single boundary where logical asset names resolve to file paths.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut assets: ResMut<PointCloudAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(handle) = &manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        info!("✓ Scene manifest loaded, fetching {}", manifest.model.path);
        assets.manifest = Some(handle.clone());
        assets.model = Some(asset_server.load(&manifest.model.path));
        commands.insert_resource(manifest.clone());
        loading_progress.manifest_loaded = true;
    }
}

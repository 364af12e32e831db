pub mod point_cloud_assets;
pub mod scene_manifest;

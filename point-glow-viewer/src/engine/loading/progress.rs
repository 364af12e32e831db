use bevy::prelude::*;

/// Ordered loading milestones. Each loading system checks its predecessor's
/// flag and sets its own, so the load sequence reads straight off this struct.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub point_cloud_created: bool,
}

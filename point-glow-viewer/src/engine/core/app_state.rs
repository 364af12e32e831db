use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// The demo has exactly two phases: everything loads up front, then the
/// animation loop runs for the rest of the session. Animation systems are
/// gated on `Running`, so no frame ever renders a half-assembled scene.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.point_cloud_created {
        info!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

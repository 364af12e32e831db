use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;

#[derive(Component)]
pub struct OverlayLabel;

/// Overlay the manifest's title and credit lines once the scene is running.
/// Bevy has no extruded 3D text, so labels render as a screen-space overlay
/// in the top-left corner.
pub fn spawn_labels(mut commands: Commands, manifest: Res<SceneManifest>) {
    if manifest.labels.title.is_empty() && manifest.labels.credits.is_empty() {
        return;
    }

    let credits = manifest.labels.credits.join("\n");

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(manifest.labels.title.clone()),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.9)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(16.0),
                    left: Val::Px(16.0),
                    ..default()
                },
                OverlayLabel,
            ));

            parent.spawn((
                Text::new(credits),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(48.0),
                    left: Val::Px(16.0),
                    ..default()
                },
                OverlayLabel,
            ));
        });
}

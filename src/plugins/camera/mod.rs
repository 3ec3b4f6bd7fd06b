//! Camera plugin (render-only): a smoothed follow camera.
//!
//! `Without<...>` filters keep the player and camera queries disjoint, so one system can
//! read the player's `Transform` while writing the camera's.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { responsiveness: 5.0 },
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Exponential smoothing toward the player; holds still once the player is gone.
fn follow_player(
    time: Res<Time>,
    player: Option<Single<&Transform, (With<Player>, Without<MainCamera>)>>,
    camera: Option<Single<(&mut Transform, &MainCamera), Without<Player>>>,
) {
    let (Some(tf_player), Some(camera)) = (player, camera) else {
        return;
    };
    let (mut tf_cam, main_cam) = camera.into_inner();

    let dt = time.delta_secs();
    let alpha = 1.0 - (-main_cam.responsiveness * dt).exp();

    let target = tf_player.translation.truncate();
    let current = tf_cam.translation.truncate();
    let next = current + (target - current) * alpha;
    tf_cam.translation.x = next.x;
    tf_cam.translation.y = next.y;
}

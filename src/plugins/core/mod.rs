//! Core plugin: shared resources, session lifecycle, and restart.

use bevy::prelude::*;

use crate::common::session::{PlayerDied, Session};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
    app.init_resource::<Session>();
    app.add_message::<PlayerDied>();

    app.add_systems(OnEnter(GameState::InGame), begin_session)
        .add_systems(OnEnter(GameState::Restarting), finish_restart)
        .add_systems(
            Update,
            (log_player_death, request_restart).run_if(in_state(GameState::InGame)),
        );
}

fn begin_session(mut session: ResMut<Session>) {
    session.reset();
    info!("session started");
}

fn log_player_death(mut died: MessageReader<PlayerDied>) {
    for ev in died.read() {
        info!("player died at {:?}", ev.position);
    }
}

/// R restarts once the player is dead. Leaving `InGame` despawns everything scoped to it.
fn request_restart(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    session: Res<Session>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else { return; };
    if session.is_player_alive() || !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    next.set(GameState::Restarting);
}

fn finish_restart(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::InGame);
}

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;
use avian2d::prelude::*;

use crate::common::session::Session;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

use super::{
    Locomotion, PendingDespawn, Player, PlayerInput, IDLE_COLOR, PLAYER_RADIUS, RUN_COLOR, RUN_STRETCH,
};

fn world_with_input(axis: Vec2) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, ..Tunables::default() });
    world.insert_resource(Session::default());
    world.insert_resource(PlayerInput { move_axis: axis });
    world
}

#[test]
fn spawn_creates_player() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn);
    assert!(world.query::<&Player>().iter(&world).next().is_some());
}

#[test]
fn gather_input_normalizes_diagonals() {
    let mut world = world_with_input(Vec2::ZERO);
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::KeyD);
    world.insert_resource(keys);

    run_system_once(&mut world, super::gather_input);

    let axis = world.resource::<PlayerInput>().move_axis;
    assert!((axis.length() - 1.0).abs() < 1e-6);
    assert!(axis.x > 0.0 && axis.y > 0.0);
}

#[test]
fn gather_input_without_keyboard_is_a_no_op() {
    let mut world = world_with_input(Vec2::X);
    run_system_once(&mut world, super::gather_input);
    assert_eq!(world.resource::<PlayerInput>().move_axis, Vec2::X);
}

#[test]
fn apply_movement_sets_velocity() {
    let mut world = world_with_input(Vec2::new(1.0, 0.0));
    world.spawn((Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
}

#[test]
fn dead_player_does_not_move() {
    let mut world = world_with_input(Vec2::new(1.0, 0.0));
    world.resource_mut::<Session>().mark_player_dead();
    world.spawn((Player, LinearVelocity(Vec2::new(3.0, 3.0))));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::ZERO);
}

#[test]
fn facing_follows_movement_and_sticks_when_idle() {
    let mut world = world_with_input(Vec2::NEG_Y);
    let e = world.spawn((Player, Transform::default(), Locomotion::default())).id();

    run_system_once(&mut world, super::update_facing);
    assert!(world.get::<Locomotion>(e).unwrap().running);
    let rot = world.get::<Transform>(e).unwrap().rotation;
    assert!(rot.angle_between(Quat::from_rotation_z(PI)) < 1e-4);

    world.insert_resource(PlayerInput { move_axis: Vec2::NEG_X });
    run_system_once(&mut world, super::update_facing);
    let rot = world.get::<Transform>(e).unwrap().rotation;
    assert!(rot.abs_diff_eq(Quat::from_rotation_z(FRAC_PI_2), 1e-5));

    world.insert_resource(PlayerInput { move_axis: Vec2::ZERO });
    run_system_once(&mut world, super::update_facing);
    assert!(!world.get::<Locomotion>(e).unwrap().running);
    let rot_idle = world.get::<Transform>(e).unwrap().rotation;
    assert_eq!(rot_idle, rot);
}

#[test]
fn pending_despawn_removes_player() {
    let mut world = World::new();
    let alive = world.spawn(Player).id();
    let dead = world.spawn((Player, PendingDespawn)).id();

    run_system_once(&mut world, super::despawn_dead_player);

    assert!(world.get_entity(alive).is_ok());
    assert!(world.get_entity(dead).is_err());
}

#[test]
fn running_player_is_tinted_and_stretched() {
    let mut world = World::new();
    let e = world
        .spawn((Player, Locomotion { running: true }, Sprite::from_color(IDLE_COLOR, Vec2::ONE)))
        .id();
    let size = Vec2::splat(PLAYER_RADIUS * 2.0);

    run_system_once(&mut world, super::animate_locomotion);
    let sprite = world.get::<Sprite>(e).unwrap();
    assert_eq!(sprite.color, RUN_COLOR);
    assert_eq!(sprite.custom_size, Some(size * RUN_STRETCH));

    world.get_mut::<Locomotion>(e).unwrap().running = false;
    run_system_once(&mut world, super::animate_locomotion);
    let sprite = world.get::<Sprite>(e).unwrap();
    assert_eq!(sprite.color, IDLE_COLOR);
    assert_eq!(sprite.custom_size, Some(size));
}

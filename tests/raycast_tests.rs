//! Raycaster tests - marching, saturation, and the end-to-end column scenario

use std::f64::consts::PI;

use tui_raycast::core::{cast_ray, column_angle, project_column, GameMap, PlayerState, RayParams};

#[test]
fn test_center_column_of_open_room_hits_border() {
    let map = GameMap::open_room(16, 16);
    let player = PlayerState::new(8.0, 8.0, 0.0);
    let fov = PI / 4.0;

    // Center column looks exactly along the heading.
    assert!(column_angle(60, 120, player.angle, fov).abs() < 1e-12);

    let params = RayParams::new(16.0, 0.1);
    let proj = project_column(60, 120, 40, &player.camera(fov), &map, params);
    assert!(proj.ray.hit);
    assert!(
        (proj.ray.distance - 7.0).abs() <= 0.1 + 1e-9,
        "distance = {}",
        proj.ray.distance
    );
    assert!((69..=71).contains(&proj.ray.steps), "steps = {}", proj.ray.steps);
}

#[test]
fn test_bounds_exit_in_open_map_saturates() {
    // A map with no border walls: the ray ends when it first leaves the grid.
    let rows = vec!["..........".to_string(); 10];
    let map = GameMap::from_rows(&rows).unwrap();
    let params = RayParams::new(16.0, 0.1);

    let r = cast_ray(5.0, 5.0, 0.0, &map, params);
    assert!(r.hit);
    assert_eq!(r.distance, 16.0);
    // y = 5 + d first floors to 10 at d = 5.0.
    assert_eq!(r.steps, 50);
}

#[test]
fn test_cast_terminates_for_all_angles_and_steps() {
    let map = GameMap::open_room(40, 40);
    for &step in &[0.01, 0.1, 0.25, 2.0, 16.0, 100.0] {
        let params = RayParams::new(16.0, step);
        let bound = (16.0_f64 / step).ceil() as u32 + 1;
        for i in 0..720 {
            let angle = i as f64 * PI / 360.0;
            let r = cast_ray(20.0, 20.0, angle, &map, params);
            assert!(r.steps <= bound, "step {step} angle {angle}: {}", r.steps);
            assert!(r.distance <= 16.0);
        }
    }
}

#[test]
fn test_identical_distances_shade_identically() {
    let map = GameMap::open_room(16, 16);
    let params = RayParams::default();
    let a = cast_ray(8.0, 8.0, 0.0, &map, params);
    let b = cast_ray(8.0, 8.0, 2.0 * PI, &map, params);
    assert!((a.distance - b.distance).abs() < 1e-9);
}

#[test]
fn test_player_inside_wall_projects_finite_span() {
    let map = GameMap::from_rows(&["###", "###", "###"]).unwrap();
    let player = PlayerState::new(1.5, 1.5, 0.0);
    let proj = project_column(0, 10, 40, &player.camera(1.0), &map, RayParams::default());
    assert!(proj.ray.hit);
    assert!(proj.ceiling.is_finite());
    assert!(proj.floor.is_finite());
}

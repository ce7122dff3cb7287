// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! End-to-end sensing and collision scenarios at default scale.

use racer_core::{
    check_collision, compute_sensors, near_wall, spawn_obstacles, vertices, ClearancePolicy,
    Collision, Obstacle, ScrollMotion, SimConfig, SimError, Simulation, Vehicle, Wall, NUM_RAYS,
};
use racer_math::{FastTrig, Fixed, Vec2};

fn vehicle_at(x: i64, y: i64) -> Vehicle {
    Vehicle {
        position: Vec2::from_ints(x, y),
        length: Fixed::from_int(32),
        width: Fixed::from_int(16),
        steer: Fixed::ZERO,
        speed: Fixed::from_int(4),
    }
}

#[test]
fn left_wall_is_seen_only_by_the_outer_left_ray() {
    let config = SimConfig::default();
    let vehicle = vehicle_at(100, 200);
    let far_obstacle = [Obstacle::from_units(600, 300)];

    assert_eq!(near_wall(&config, &vehicle), Wall::Left);
    let sensors = compute_sensors(&config, &FastTrig, &vehicle, &far_obstacle).expect("sensors");
    let wire = sensors.to_wire();

    // 100 / sin(50°) ≈ 130.54
    assert!(wire[0] > Fixed::ZERO && wire[0] <= config.ray_length);
    assert!((wire[0].to_f64() - 130.54).abs() < 0.05);
    assert_eq!(wire[1..], [Fixed::ZERO; NUM_RAYS - 1]);
}

#[test]
fn centered_vehicle_with_nothing_in_range_reads_all_zeros() {
    let config = SimConfig::default();
    let vehicle = vehicle_at(200, 200);
    let obstacles = [Obstacle::from_units(200, 900), Obstacle::from_units(10, 10)];

    assert_eq!(near_wall(&config, &vehicle), Wall::None);
    let sensors = compute_sensors(&config, &FastTrig, &vehicle, &obstacles).expect("sensors");
    assert_eq!(sensors.readings(), &[None; NUM_RAYS]);
    assert_eq!(sensors.to_wire(), [Fixed::ZERO; NUM_RAYS]);
}

#[test]
fn overlapping_edge_fails_and_one_unit_further_passes() {
    let config = SimConfig::default();
    let vehicle = vehicle_at(200, 200);

    let touching = [Obstacle::from_units(232, 200)];
    assert_eq!(
        check_collision(&config, &FastTrig, &vehicle, &touching),
        Err(SimError::Collision(Collision::Obstacle { index: 0 }))
    );

    let clear = [Obstacle::from_units(233, 200)];
    assert_eq!(check_collision(&config, &FastTrig, &vehicle, &clear), Ok(()));
}

#[test]
fn zero_steer_vertices_are_the_axis_aligned_corners() {
    let vehicle = vehicle_at(50, 70);
    let v = vertices(&FastTrig, &vehicle).expect("vertices");
    assert_eq!(
        v,
        [
            Vec2::from_ints(66, 102),
            Vec2::from_ints(34, 102),
            Vec2::from_ints(34, 38),
            Vec2::from_ints(66, 38),
        ]
    );
}

#[test]
fn seeded_runs_are_bit_identical() {
    let config = SimConfig::default();
    let run = |seed| {
        let mut sim = Simulation::new(config.clone());
        sim.run(
            vehicle_at(200, 100),
            spawn_obstacles(&config, seed, 6),
            &mut ClearancePolicy::default(),
            &mut ScrollMotion::new(&config, Fixed::from_int(3)),
            200,
        )
        .expect("run")
    };
    assert_eq!(run(11), run(11));
}

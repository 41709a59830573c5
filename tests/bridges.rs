// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Corridor carving tests

use anyhow::Result;
use plan_environment::{Environment, Limits, LineString, Polygon};

/// Two rooms side by side, separated by the shared wall at x = 9..11
fn two_rooms() -> Environment<String> {
    let walls = Polygon::new(
        LineString::from(vec![(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)]),
        vec![
            LineString::from(vec![(1.0, 1.0), (9.0, 1.0), (9.0, 9.0), (1.0, 9.0)]),
            LineString::from(vec![(11.0, 1.0), (19.0, 1.0), (19.0, 9.0), (11.0, 9.0)]),
        ],
    );
    let mut env = Environment::new("floor_1".to_string(), Limits::planar(0.0, 0.0, 20.0, 10.0));
    env.add_obstacle(walls);
    env.add_path(vec![[2.0, 5.0], [8.0, 5.0]]);
    env.add_path(vec![[12.0, 5.0], [18.0, 5.0]]);
    env
}

#[test]
fn test_rooms_disconnected_before_carving() -> Result<()> {
    let env = two_rooms();
    assert!(env.find_all_shortest_connections()?.is_empty());
    Ok(())
}

#[test]
fn test_bridge_node_connects_rooms() -> Result<()> {
    let mut env = two_rooms();
    env.clear_bridge_nodes(&[[10.0, 5.0]])?;

    assert!(!env.point_in_collision([10.0, 5.0])?);
    assert!(env.point_in_collision([10.0, 2.0])?);
    assert!(env.point_in_collision([0.5, 5.0])?);

    let connections = env.find_all_shortest_connections()?;
    assert_eq!(connections.len(), 2);
    assert!(connections[0].same_segment(&connections[1]));
    Ok(())
}

#[test]
fn test_bridge_edge_connects_rooms() -> Result<()> {
    let mut env = two_rooms();
    env.clear_bridge_edges(&[vec![[8.0, 5.0], [12.0, 5.0]]])?;

    assert!(!env.line_in_collision([8.0, 5.0], [12.0, 5.0])?);
    assert!(env.point_in_collision([10.0, 7.5])?);
    assert_eq!(env.find_all_shortest_connections()?.len(), 2);
    Ok(())
}

#[test]
fn test_point_far_from_bridge_stays_blocked() -> Result<()> {
    let mut env = two_rooms();
    env.clear_bridge_nodes(&[[10.0, 5.0], [0.5, 5.0]])?;

    for (x, y) in [(10.0, 5.0), (0.5, 5.0)] {
        assert!(!env.point_in_collision([x, y])?);
    }
    for (x, y) in [(10.0, 1.5), (10.0, 8.5), (0.5, 0.5), (19.5, 5.0), (15.0, 0.5)] {
        assert!(env.point_in_collision([x, y])?, "({}, {}) should still be wall", x, y);
    }
    assert_eq!(env.obstacle_count(), 1);
    Ok(())
}

#[test]
fn test_path_endpoint_on_opened_wall_connects() -> Result<()> {
    let mut env = two_rooms();
    env.clear_bridge_nodes(&[[10.0, 5.0]])?;

    let connector = env.find_shortest_connection([10.0, 5.0])?.expect("corridor is open");
    assert_eq!(connector.start.x, 8.0);
    assert_eq!(connector.start.y, 5.0);
    Ok(())
}

//! Property tests for ray-casting containment.

use proptest::prelude::*;
use zonecheck_core::models::{GeoPoint, Geometry, Zone};
use zonecheck_geo::{geometry_contains, locate};

fn unit_square_zone() -> Zone {
    let geometry = Geometry::polygon(vec![vec![
        [0.0, 0.0],
        [10.0, 0.0],
        [10.0, 10.0],
        [0.0, 10.0],
        [0.0, 0.0],
    ]])
    .unwrap();
    Zone::new(1, Some("R1".to_string()), Some(geometry))
}

proptest! {
    #[test]
    fn points_strictly_inside_convex_polygon_are_located(
        lon in 0.001f64..9.999,
        lat in 0.001f64..9.999,
    ) {
        let zones = vec![unit_square_zone()];
        let found = locate(&GeoPoint::new(lon, lat), &zones);
        prop_assert!(found.is_some());
        prop_assert_eq!(found.unwrap().id, 1);
    }

    #[test]
    fn points_strictly_outside_convex_polygon_are_not_located(
        lon in 10.001f64..50.0,
        lat in -50.0f64..50.0,
    ) {
        let zones = vec![unit_square_zone()];
        prop_assert!(locate(&GeoPoint::new(lon, lat), &zones).is_none());
    }

    #[test]
    fn hole_excludes_what_exterior_would_contain(
        lon in 4.001f64..5.999,
        lat in 4.001f64..5.999,
    ) {
        let with_hole = Geometry::polygon(vec![
            vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
            vec![[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0], [4.0, 4.0]],
        ])
        .unwrap();
        let solid = Geometry::polygon(vec![vec![
            [0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0],
        ]])
        .unwrap();

        let point = GeoPoint::new(lon, lat);
        prop_assert!(geometry_contains(&point, &solid));
        prop_assert!(!geometry_contains(&point, &with_hole));
    }
}

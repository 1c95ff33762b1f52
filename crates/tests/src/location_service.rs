/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::common::*;
use chrono::Duration;
use driver_location_service::common::{bounding_box::METERS_PER_DEGREE_LAT, types::*};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeSet;

fn ids(drivers: &[NearbyDriver]) -> BTreeSet<DriverId> {
    drivers
        .iter()
        .map(|driver| driver.driver_id.to_owned())
        .collect()
}

#[test]
fn latest_update_is_the_only_one_visible() {
    let (service, _) = service_with_ttl(Duration::seconds(600));

    service.update_driver_location(driver("d1"), update_on_route(12.9716, 77.5946, "Airport"));
    service.update_driver_location(driver("d1"), update(12.9352, 77.6245));

    let nearby = service.find_nearby_drivers(&point(12.9352, 77.6245), &Radius(100.0), 20);

    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].latitude, Latitude(12.9352));
    assert_eq!(nearby[0].longitude, Longitude(77.6245));
    assert_eq!(nearby[0].route_name, None);
    assert_eq!(nearby[0].comments, None);

    let old_spot = service.find_nearby_drivers(&point(12.9716, 77.5946), &Radius(100.0), 20);
    assert!(old_spot.is_empty());
}

#[test]
fn stale_locations_are_evicted_on_query() {
    let (service, clock) = service_with_ttl(Duration::milliseconds(60_000));
    let center = point(12.9716, 77.5946);

    service.update_driver_location(driver("d1"), update(12.9716, 77.5946));

    clock.advance(Duration::milliseconds(59_999));
    let nearby = service.find_nearby_drivers(&center, &Radius(500.0), 20);
    assert_eq!(ids(&nearby), BTreeSet::from([driver("d1")]));

    clock.advance(Duration::milliseconds(2));
    let nearby = service.find_nearby_drivers(&center, &Radius(500.0), 20);
    assert!(nearby.is_empty());
    assert_eq!(service.tracked_drivers(), 0);
}

#[test]
fn heartbeat_refreshes_the_ttl() {
    let (service, clock) = service_with_ttl(Duration::seconds(600));
    let center = point(12.9716, 77.5946);

    service.update_driver_location(driver("d1"), update(12.9716, 77.5946));
    clock.advance(Duration::seconds(500));
    service.update_driver_location(driver("d1"), update(12.9716, 77.5946));
    clock.advance(Duration::seconds(500));

    let nearby = service.find_nearby_drivers(&center, &Radius(500.0), 20);
    assert_eq!(nearby.len(), 1);
}

#[test]
fn stale_records_linger_until_the_next_query() {
    let (service, clock) = service_with_ttl(Duration::seconds(600));

    service.update_driver_location(driver("d1"), update(12.9716, 77.5946));
    clock.advance(Duration::seconds(601));

    assert_eq!(service.tracked_drivers(), 1);
    service.find_nearby_drivers(&point(0.0, 0.0), &Radius(1.0), 1);
    assert_eq!(service.tracked_drivers(), 0);
}

#[test]
fn bounding_box_edge_is_inclusive() {
    let (service, _) = service_with_ttl(Duration::seconds(600));

    service.update_driver_location(driver("on-edge"), update(1.0, 0.0));
    service.update_driver_location(driver("past-edge"), update(1.00001, 0.0));

    let nearby = service.find_nearby_drivers(&point(0.0, 0.0), &Radius(METERS_PER_DEGREE_LAT), 20);

    assert_eq!(ids(&nearby), BTreeSet::from([driver("on-edge")]));
}

#[test]
fn every_longitude_matches_next_to_the_pole() {
    let (service, _) = service_with_ttl(Duration::seconds(600));
    let longitudes = [-180.0, -179.9, -90.0, 0.0, 45.5, 179.9, 180.0];

    for (i, lon) in longitudes.iter().enumerate() {
        service.update_driver_location(driver(&format!("near-{i}")), update(89.999, *lon));
        service.update_driver_location(driver(&format!("at-{i}")), update(89.99999, *lon));
    }

    let near_pole = service.find_nearby_drivers(&point(89.999, 0.0), &Radius(1_000.0), 100);
    let near_ids = ids(&near_pole);
    for i in 0..longitudes.len() {
        assert!(near_ids.contains(&driver(&format!("near-{i}"))));
    }

    let at_pole = service.find_nearby_drivers(&point(89.99999, 0.0), &Radius(1.0), 100);
    let at_ids = ids(&at_pole);
    for i in 0..longitudes.len() {
        assert!(at_ids.contains(&driver(&format!("at-{i}"))));
    }
}

#[test]
fn results_are_truncated_to_the_limit() {
    let (service, _) = service_with_ttl(Duration::seconds(600));

    for i in 0..50 {
        let offset = i as f64 * 0.0001;
        service.update_driver_location(
            driver(&format!("d{i}")),
            update(12.9716 + offset, 77.5946 - offset),
        );
    }

    let center = point(12.9716, 77.5946);
    assert_eq!(
        service
            .find_nearby_drivers(&center, &Radius(2_000.0), 20)
            .len(),
        20
    );
    assert_eq!(
        service
            .find_nearby_drivers(&center, &Radius(2_000.0), 100)
            .len(),
        50
    );
    assert!(service
        .find_nearby_drivers(&center, &Radius(2_000.0), 0)
        .is_empty());
}

#[test]
fn drivers_outside_the_radius_are_skipped() {
    let (service, _) = service_with_ttl(Duration::seconds(600));

    service.update_driver_location(driver("close"), update(12.9720, 77.5950));
    service.update_driver_location(driver("far"), update(13.1986, 77.7066));

    let nearby = service.find_nearby_drivers(&point(12.9716, 77.5946), &Radius(1_000.0), 20);

    assert_eq!(ids(&nearby), BTreeSet::from([driver("close")]));
}

#[test]
fn scattered_drivers_split_cleanly_at_the_box() {
    let (service, _) = service_with_ttl(Duration::seconds(600));
    let mut rng = StdRng::seed_from_u64(42);

    let mut inside = BTreeSet::new();
    for i in 0..200 {
        let id = driver(&format!("in-{i}"));
        service.update_driver_location(
            id.to_owned(),
            update(
                12.9716 + rng.gen_range(-0.008..0.008),
                77.5946 + rng.gen_range(-0.008..0.008),
            ),
        );
        inside.insert(id);
    }
    for i in 0..200 {
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        service.update_driver_location(
            driver(&format!("out-{i}")),
            update(12.9716 + sign * rng.gen_range(0.02..0.5), 77.5946),
        );
    }

    let nearby = service.find_nearby_drivers(&point(12.9716, 77.5946), &Radius(1_000.0), 1_000);

    assert_eq!(ids(&nearby), inside);
}

#[test]
fn unknown_area_yields_no_drivers() {
    let (service, _) = service_with_ttl(Duration::seconds(600));

    assert!(service
        .find_nearby_drivers(&point(12.9716, 77.5946), &Radius(1_000.0), 20)
        .is_empty());
    assert!(service.get_driver_location(&driver("nobody")).is_none());
}

#[test]
fn out_of_range_coordinates_are_stored_as_is() {
    let (service, _) = service_with_ttl(Duration::seconds(600));

    service.update_driver_location(driver("odd"), update(123.0, 456.0));

    let stored = service
        .get_driver_location(&driver("odd"))
        .expect("record should exist");
    assert_eq!(stored.location, point(123.0, 456.0));
    assert!(service
        .find_nearby_drivers(&point(89.0, 179.0), &Radius(10_000.0), 20)
        .is_empty());
}

#[test]
fn destination_filter_normalises_route_names() {
    let (service, _) = service_with_ttl(Duration::seconds(600));

    service.update_driver_location(
        driver("padded"),
        update_on_route(12.9716, 77.5946, "  Main St "),
    );
    service.update_driver_location(
        driver("longer"),
        update_on_route(12.9717, 77.5947, "Main Street"),
    );
    service.update_driver_location(driver("no-route"), update(12.9718, 77.5948));

    let center = point(12.9716, 77.5946);
    let nearby = service.find_nearby_drivers(&center, &Radius(500.0), 20);
    assert_eq!(nearby.len(), 3);

    let main_st = service.filter_by_destination_name(nearby.to_owned(), Some("main st"));
    assert_eq!(ids(&main_st), BTreeSet::from([driver("padded")]));

    let exact = service.filter_by_destination_name(nearby.to_owned(), Some("Main St"));
    assert_eq!(ids(&exact), BTreeSet::from([driver("padded")]));

    assert_eq!(
        service
            .filter_by_destination_name(nearby.to_owned(), Some("   "))
            .len(),
        3
    );
    assert_eq!(service.filter_by_destination_name(nearby, None).len(), 3);
}

#[test]
fn repeated_queries_return_the_same_drivers() {
    let (service, clock) = service_with_ttl(Duration::seconds(600));

    for i in 0..30 {
        let offset = i as f64 * 0.0002;
        service.update_driver_location(driver(&format!("d{i}")), update(12.9716 + offset, 77.5946));
    }
    clock.advance(Duration::seconds(10));

    let center = point(12.9716, 77.5946);
    let first = service.find_nearby_drivers(&center, &Radius(5_000.0), 100);
    let second = service.find_nearby_drivers(&center, &Radius(5_000.0), 100);

    assert_eq!(first.len(), 30);
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn concurrent_heartbeats_and_queries() {
    let (service, _) = service_with_ttl(Duration::seconds(600));
    let center = point(12.9716, 77.5946);

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let service = &service;
            scope.spawn(move || {
                for i in 0..250 {
                    service.update_driver_location(
                        driver(&format!("w{worker}-d{i}")),
                        update(12.9716, 77.5946),
                    );
                }
            });
        }
        for _ in 0..4 {
            let service = &service;
            scope.spawn(move || {
                for _ in 0..50 {
                    let nearby = service.find_nearby_drivers(&center, &Radius(100.0), 10);
                    assert!(nearby.len() <= 10);
                }
            });
        }
    });

    assert_eq!(service.tracked_drivers(), 1_000);
    assert_eq!(
        service
            .find_nearby_drivers(&center, &Radius(100.0), 2_000)
            .len(),
        1_000
    );
}

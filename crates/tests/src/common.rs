/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use chrono::{DateTime, Duration, TimeZone, Utc};
use driver_location_service::common::{
    clock::ManualClock, location_service::LocationService, store::LocationStore, types::*,
};
use std::sync::Arc;

pub fn start_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

pub fn point(lat: f64, lon: f64) -> Point {
    Point {
        lat: Latitude(lat),
        lon: Longitude(lon),
    }
}

pub fn driver(id: &str) -> DriverId {
    DriverId(id.to_string())
}

pub fn update(lat: f64, lon: f64) -> DriverLocationUpdate {
    DriverLocationUpdate {
        location: point(lat, lon),
        route_name: None,
        comments: None,
    }
}

pub fn update_on_route(lat: f64, lon: f64, route_name: &str) -> DriverLocationUpdate {
    DriverLocationUpdate {
        location: point(lat, lon),
        route_name: Some(route_name.to_string()),
        comments: Some(format!("heading to {route_name}")),
    }
}

pub fn record(id: &str, lat: f64, lon: f64, updated_at: DateTime<Utc>) -> DriverLocationRecord {
    DriverLocationRecord {
        driver_id: driver(id),
        location: point(lat, lon),
        updated_at: TimeStamp(updated_at),
        route_name: None,
        comments: None,
    }
}

pub fn service_with_ttl(ttl: Duration) -> (Arc<LocationService>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_time()));
    let service = Arc::new(LocationService::new(
        LocationStore::new(),
        clock.to_owned(),
        ttl,
    ));
    (service, clock)
}

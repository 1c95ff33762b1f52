/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use super::{
    bounding_box::get_bounding_box,
    clock::Clock,
    expirer,
    proximity::{is_within_bounds, matches_destination},
    store::LocationStore,
    types::*,
};
use crate::tools::prometheus::{EVICTED_DRIVER_LOCATIONS, TRACKED_DRIVERS};
use chrono::Duration;
use std::sync::Arc;
use tracing::debug;

/// Registry of last known driver locations and the proximity queries over it.
///
/// One instance owns the store for the lifetime of the process. Records older than the
/// configured TTL are evicted lazily at the start of every nearby query (and by the
/// background sweeper when it is enabled), so a driver that stops heartbeating stays
/// visible until the next sweep.
pub struct LocationService {
    store: LocationStore,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl LocationService {
    pub fn new(store: LocationStore, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn tracked_drivers(&self) -> usize {
        self.store.len()
    }

    pub fn get_driver_location(&self, driver_id: &DriverId) -> Option<DriverLocationRecord> {
        self.store.get(driver_id)
    }

    /// Stores `update` as the driver's latest location, stamped with the current time.
    ///
    /// Coordinates are taken as-is; range checks belong to the caller.
    pub fn update_driver_location(&self, driver_id: DriverId, update: DriverLocationUpdate) {
        let DriverLocationUpdate {
            location,
            route_name,
            comments,
        } = update;

        let record = DriverLocationRecord {
            driver_id: driver_id.to_owned(),
            location,
            updated_at: self.clock.now(),
            route_name,
            comments,
        };

        self.store.upsert(driver_id, record);
        TRACKED_DRIVERS.set(self.store.len() as i64);
    }

    /// Removes every record whose age exceeds the TTL.
    pub fn sweep_stale_locations(&self) -> usize {
        let evicted = expirer::sweep(&self.store, &self.clock.now(), &self.ttl);
        if evicted > 0 {
            debug!(tag = "[Stale Driver Locations Evicted]", evicted = evicted);
            EVICTED_DRIVER_LOCATIONS.inc_by(evicted as u64);
        }
        TRACKED_DRIVERS.set(self.store.len() as i64);
        evicted
    }

    /// Drivers whose last location falls inside the bounding box of `radius` around `center`.
    ///
    /// Returns the first `limit` matches met while scanning the store. Results are neither
    /// sorted by distance nor guaranteed to be the closest drivers, and their order is
    /// unspecified.
    pub fn find_nearby_drivers(
        &self,
        center: &Point,
        radius: &Radius,
        limit: usize,
    ) -> Vec<NearbyDriver> {
        self.sweep_stale_locations();

        let bbox = get_bounding_box(center, radius);

        self.store
            .scan()
            .filter(|entry| is_within_bounds(&entry.value().location, &bbox))
            .take(limit)
            .map(|entry| NearbyDriver::from(entry.value()))
            .collect()
    }

    /// Keeps only drivers whose route matches `destination`; a blank destination keeps all.
    pub fn filter_by_destination_name(
        &self,
        drivers: Vec<NearbyDriver>,
        destination: Option<&str>,
    ) -> Vec<NearbyDriver> {
        if destination.map_or(true, |destination| destination.trim().is_empty()) {
            return drivers;
        }

        drivers
            .into_iter()
            .filter(|driver| matches_destination(driver.route_name.as_deref(), destination))
            .collect()
    }
}

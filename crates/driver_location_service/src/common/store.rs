/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use super::types::*;
use dashmap::{iter::Iter, DashMap};
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Iterator over the entries of a [`LocationStore`].
pub type LocationScan<'a> = Iter<'a, DriverId, DriverLocationRecord, FxBuildHasher>;

/// In-memory registry of the last known location of every driver.
///
/// Backed by a sharded concurrent map: a write only locks the shard owning the driver,
/// so heartbeats for different drivers never wait on each other and readers are blocked
/// for at most the duration of a single replace.
#[derive(Default)]
pub struct LocationStore {
    locations: DashMap<DriverId, DriverLocationRecord, FxBuildHasher>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was stored for `driver_id`. The incoming record always wins.
    pub fn upsert(&self, driver_id: DriverId, record: DriverLocationRecord) {
        self.locations.insert(driver_id, record);
    }

    /// Weakly consistent walk over all records.
    ///
    /// Shards are read-locked one at a time, so upserts landing while the scan is in
    /// progress may or may not be observed. Do not write to the store while holding
    /// the returned iterator on the same thread.
    pub fn scan(&self) -> LocationScan<'_> {
        self.locations.iter()
    }

    /// Removes every record matching `predicate` and returns how many were removed.
    pub fn remove_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&DriverLocationRecord) -> bool,
    {
        let mut removed = 0;
        self.locations.retain(|_, record| {
            let matched = predicate(record);
            if matched {
                removed += 1;
            }
            !matched
        });
        removed
    }

    pub fn get(&self, driver_id: &DriverId) -> Option<DriverLocationRecord> {
        self.locations
            .get(driver_id)
            .map(|record| record.value().to_owned())
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

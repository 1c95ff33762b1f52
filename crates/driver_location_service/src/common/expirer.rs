/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use super::{store::LocationStore, types::*};
use chrono::Duration;

/// A record is stale once strictly more than `ttl` has passed since its last update.
pub fn is_stale(record: &DriverLocationRecord, TimeStamp(now): &TimeStamp, ttl: &Duration) -> bool {
    now.signed_duration_since(record.updated_at.0) > *ttl
}

/// Drops every record older than `ttl` and returns how many were dropped.
pub fn sweep(store: &LocationStore, now: &TimeStamp, ttl: &Duration) -> usize {
    store.remove_where(|record| is_stale(record, now, ttl))
}

/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::common::location_service::LocationService;
use crate::tools::logger::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{sync::Arc, time::Duration};
use tokio::time::interval;

/// Periodically evicts stale driver locations until termination is requested.
///
/// Uses the same TTL predicate as the query path, so a record removed here is one that the
/// next nearby query would have removed anyway. Eviction locks one shard at a time and
/// never blocks heartbeats for other shards.
pub async fn run_sweeper(
    location_service: Arc<LocationService>,
    sweep_interval: Duration,
    graceful_termination_requested: Arc<AtomicBool>,
) {
    let mut timer = interval(sweep_interval);

    loop {
        timer.tick().await;

        if graceful_termination_requested.load(Ordering::Relaxed) {
            info!(tag = "[Graceful Shutting Down Sweeper]");
            break;
        }

        let evicted = location_service.sweep_stale_locations();
        if evicted > 0 {
            info!(
                tag = "[Background Sweep]",
                evicted = evicted,
                tracked = location_service.tracked_drivers()
            );
        }
    }
}

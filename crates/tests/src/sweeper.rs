/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::common::*;
use chrono::Duration;
use driver_location_service::sweeper::run_sweeper;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::time::{sleep, timeout};

#[tokio::test]
async fn background_sweep_evicts_without_queries() {
    let (service, clock) = service_with_ttl(Duration::seconds(60));

    service.update_driver_location(driver("stale"), update(12.9716, 77.5946));
    clock.advance(Duration::seconds(45));
    service.update_driver_location(driver("fresh"), update(12.9716, 77.5946));
    clock.advance(Duration::seconds(30));

    let terminate = Arc::new(AtomicBool::new(false));
    let handle = tokio::spawn(run_sweeper(
        service.to_owned(),
        std::time::Duration::from_millis(10),
        terminate.to_owned(),
    ));

    let mut evicted = false;
    for _ in 0..100 {
        if service.get_driver_location(&driver("stale")).is_none() {
            evicted = true;
            break;
        }
        sleep(std::time::Duration::from_millis(10)).await;
    }

    assert!(evicted, "stale driver should be swept in the background");
    assert!(service.get_driver_location(&driver("fresh")).is_some());
    assert_eq!(service.tracked_drivers(), 1);

    terminate.store(true, Ordering::Relaxed);
    timeout(std::time::Duration::from_secs(1), handle)
        .await
        .expect("sweeper should stop once termination is requested")
        .expect("sweeper task should not panic");
}

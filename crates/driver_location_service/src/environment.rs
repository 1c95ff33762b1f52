/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use std::sync::Arc;

use crate::{
    common::{
        clock::{Clock, SystemClock},
        location_service::LocationService,
        store::LocationStore,
    },
    tools::logger::LoggerConfig,
};
use chrono::Duration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logger_cfg: LoggerConfig,
    pub workers: usize,
    /// Seconds a driver location stays visible without a fresh heartbeat.
    pub driver_location_ttl: u32,
    pub default_nearby_limit: usize,
    /// Seconds between background sweeps; `None` leaves eviction to the query path only.
    pub background_sweep_interval: Option<u64>,
    /// Milliseconds.
    pub request_timeout: u64,
    pub max_allowed_req_size: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub location_service: Arc<LocationService>,
    pub default_nearby_limit: usize,
    pub background_sweep_interval: Option<u64>,
    pub request_timeout: u64,
    pub max_allowed_req_size: usize,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> AppState {
        AppState::with_clock(app_config, Arc::new(SystemClock))
    }

    pub fn with_clock(app_config: AppConfig, clock: Arc<dyn Clock>) -> AppState {
        let location_service = Arc::new(LocationService::new(
            LocationStore::new(),
            clock,
            Duration::seconds(i64::from(app_config.driver_location_ttl)),
        ));

        AppState {
            location_service,
            default_nearby_limit: app_config.default_nearby_limit,
            background_sweep_interval: app_config.background_sweep_interval,
            request_timeout: app_config.request_timeout,
            max_allowed_req_size: app_config.max_allowed_req_size,
        }
    }
}

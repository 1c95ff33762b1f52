/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct DriverId(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
pub struct Latitude(pub f64);
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
pub struct Longitude(pub f64);
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Hash, Ord)]
pub struct TimeStamp(pub DateTime<Utc>);
/// Search radius in meters.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
pub struct Radius(pub f64);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub lat: Latitude,
    pub lon: Longitude,
}

/// Last known position of a driver as held by the location store.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverLocationRecord {
    pub driver_id: DriverId,
    pub location: Point,
    pub updated_at: TimeStamp,
    pub route_name: Option<String>,
    pub comments: Option<String>,
}

/// Heartbeat payload accepted by the write path.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverLocationUpdate {
    pub location: Point,
    pub route_name: Option<String>,
    pub comments: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NearbyDriver {
    pub driver_id: DriverId,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub route_name: Option<String>,
    pub comments: Option<String>,
}

impl From<&DriverLocationRecord> for NearbyDriver {
    fn from(record: &DriverLocationRecord) -> Self {
        NearbyDriver {
            driver_id: record.driver_id.to_owned(),
            latitude: record.location.lat,
            longitude: record.location.lon,
            route_name: record.route_name.to_owned(),
            comments: record.comments.to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct APISuccess {
    result: String,
}

impl Default for APISuccess {
    fn default() -> Self {
        Self {
            result: "Success".to_string(),
        }
    }
}

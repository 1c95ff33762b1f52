/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::common::types::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverLocationRequest {
    pub latitude: Latitude,
    pub longitude: Longitude,
    #[serde(default, alias = "currRouteName")]
    pub route_name: Option<String>,
    #[serde(default, alias = "customComments")]
    pub comments: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NearbyDriversRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: i64,
    pub limit: Option<i64>,
    pub destination_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct NearbyDriversResponse {
    pub drivers: Vec<NearbyDriver>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub result: String,
    pub tracked_drivers: usize,
}

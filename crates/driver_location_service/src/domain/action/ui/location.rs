/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::{
    common::{types::*, utils::*},
    domain::types::ui::location::*,
    environment::AppState,
    tools::{error::AppError, logger::*, prometheus::*},
};
use actix_web::web::Data;

fn validate_point(Latitude(lat): Latitude, Longitude(lon): Longitude) -> Result<Point, AppError> {
    if is_valid_latitude(lat) && is_valid_longitude(lon) {
        Ok(Point {
            lat: Latitude(lat),
            lon: Longitude(lon),
        })
    } else {
        Err(AppError::InvalidCoordinates(lat, lon))
    }
}

pub fn update_driver_location(
    driver_id: DriverId,
    data: Data<AppState>,
    request_body: UpdateDriverLocationRequest,
) -> Result<APISuccess, AppError> {
    let UpdateDriverLocationRequest {
        latitude,
        longitude,
        route_name,
        comments,
    } = request_body;

    let location = validate_point(latitude, longitude)?;

    debug!(tag = "[Driver Location Update]", driver_id = %driver_id.0, lat = location.lat.0, lon = location.lon.0);

    data.location_service.update_driver_location(
        driver_id,
        DriverLocationUpdate {
            location,
            route_name,
            comments,
        },
    );

    TOTAL_LOCATION_UPDATES.inc();

    Ok(APISuccess::default())
}

pub fn get_nearby_drivers(
    data: Data<AppState>,
    NearbyDriversRequest {
        latitude,
        longitude,
        radius_meters,
        limit,
        destination_name,
    }: NearbyDriversRequest,
) -> Result<NearbyDriversResponse, AppError> {
    let center = validate_point(Latitude(latitude), Longitude(longitude))?;

    if radius_meters <= 0 {
        return Err(AppError::InvalidRadius(radius_meters));
    }

    let limit = match limit {
        Some(limit) if limit <= 0 => return Err(AppError::InvalidLimit(limit)),
        Some(limit) => usize::try_from(limit).unwrap_or(usize::MAX),
        None => data.default_nearby_limit,
    };

    NEARBY_DRIVER_QUERIES.inc();

    let radius = Radius(radius_meters as f64);
    let nearby_drivers = data
        .location_service
        .find_nearby_drivers(&center, &radius, limit);

    let drivers = data
        .location_service
        .filter_by_destination_name(nearby_drivers, destination_name.as_deref());

    info!(
        tag = "[Nearby Drivers]",
        lat = center.lat.0,
        lon = center.lon.0,
        radius = radius_meters,
        limit = limit,
        found = drivers.len()
    );

    Ok(NearbyDriversResponse { drivers })
}

pub fn health_check(data: Data<AppState>) -> HealthCheckResponse {
    HealthCheckResponse {
        result: "Service Is Up".to_string(),
        tracked_drivers: data.location_service.tracked_drivers(),
    }
}

/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_web::{
    get, post,
    web::{Data, Json, Query},
    HttpRequest,
};

use crate::{
    common::types::*,
    domain::{action::ui::location, types::ui::location::*},
    environment::AppState,
    tools::error::AppError,
};

#[post("/api/v1/drivers/me/location")]
pub async fn update_driver_location(
    data: Data<AppState>,
    param_obj: Json<UpdateDriverLocationRequest>,
    req: HttpRequest,
) -> Result<Json<APISuccess>, AppError> {
    let request_body = param_obj.into_inner();

    let driver_id = req
        .headers()
        .get("dId")
        .and_then(|header_value| header_value.to_str().ok())
        .map(str::trim)
        .filter(|driver_id| !driver_id.is_empty())
        .map(|driver_id| DriverId(driver_id.to_string()))
        .ok_or(AppError::DriverIdNotFound)?;

    Ok(Json(location::update_driver_location(
        driver_id,
        data,
        request_body,
    )?))
}

#[get("/api/v1/drivers/nearby")]
pub async fn get_nearby_drivers(
    data: Data<AppState>,
    param_obj: Query<NearbyDriversRequest>,
) -> Result<Json<NearbyDriversResponse>, AppError> {
    let request_body = param_obj.into_inner();

    Ok(Json(location::get_nearby_drivers(data, request_body)?))
}

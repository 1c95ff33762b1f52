/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_message: String,
    pub error_code: String,
}

#[derive(Debug, Serialize, thiserror::Error)]
pub enum AppError {
    #[error("UNPROCESSIBLE_REQUEST")]
    UnprocessibleRequest(String),
    #[error("DRIVER_ID_NOT_FOUND")]
    DriverIdNotFound,
    #[error("INVALID_COORDINATES")]
    InvalidCoordinates(f64, f64),
    #[error("INVALID_RADIUS")]
    InvalidRadius(i64),
    #[error("INVALID_LIMIT")]
    InvalidLimit(i64),
    #[error("LARGE_PAYLOAD_SIZE")]
    LargePayloadSize(usize, usize),
    #[error("REQUEST_TIMEOUT")]
    RequestTimeout,
}

impl AppError {
    fn error_message(&self) -> ErrorBody {
        ErrorBody {
            error_message: self.message(),
            error_code: self.code(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::UnprocessibleRequest(err) => err.to_string(),
            AppError::DriverIdNotFound => "Driver identity header (dId) not found".to_string(),
            AppError::InvalidCoordinates(lat, lon) => {
                format!("Coordinates out of range : (Lat : {lat}, Lon : {lon})")
            }
            AppError::InvalidRadius(radius) => {
                format!("Radius must be a positive number of meters : {radius}")
            }
            AppError::InvalidLimit(limit) => format!("Limit must be positive : {limit}"),
            AppError::LargePayloadSize(length, limit) => {
                format!("Content length ({length} Bytes) greater than allowed maximum limit : ({limit} Bytes)")
            }
            AppError::RequestTimeout => "Request timed out".to_string(),
        }
    }

    pub fn code(&self) -> String {
        match self {
            AppError::UnprocessibleRequest(_) => "UNPROCESSIBLE_REQUEST",
            AppError::DriverIdNotFound => "DRIVER_ID_NOT_FOUND",
            AppError::InvalidCoordinates(_, _) => "INVALID_COORDINATES",
            AppError::InvalidRadius(_) => "INVALID_RADIUS",
            AppError::InvalidLimit(_) => "INVALID_LIMIT",
            AppError::LargePayloadSize(_, _) => "LARGE_PAYLOAD_SIZE",
            AppError::RequestTimeout => "REQUEST_TIMEOUT",
        }
        .to_string()
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(self.error_message())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnprocessibleRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DriverIdNotFound => StatusCode::UNAUTHORIZED,
            AppError::InvalidCoordinates(_, _) => StatusCode::BAD_REQUEST,
            AppError::InvalidRadius(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidLimit(_) => StatusCode::BAD_REQUEST,
            AppError::LargePayloadSize(_, _) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

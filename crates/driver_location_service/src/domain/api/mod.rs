/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
pub mod ui;

use actix_web::web::{JsonConfig, QueryConfig, ServiceConfig};

use crate::tools::error::AppError;

pub fn handler(config: &mut ServiceConfig) {
    config
        .app_data(
            JsonConfig::default()
                .error_handler(|err, _| AppError::UnprocessibleRequest(err.to_string()).into()),
        )
        .app_data(
            QueryConfig::default()
                .error_handler(|err, _| AppError::UnprocessibleRequest(err.to_string()).into()),
        )
        .service(ui::location::update_driver_location)
        .service(ui::location::get_nearby_drivers)
        .service(ui::healthcheck::health_check);
}

/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Inclusive on both ends.
pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

pub fn is_valid_latitude(lat: f64) -> bool {
    lat.is_finite() && in_range(lat, -90.0, 90.0)
}

pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && in_range(lon, -180.0, 180.0)
}

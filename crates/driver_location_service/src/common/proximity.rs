/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use super::{bounding_box::BoundingBox, types::*, utils::in_range};

pub fn is_within_bounds(location: &Point, bbox: &BoundingBox) -> bool {
    let Latitude(lat) = location.lat;
    let Longitude(lon) = location.lon;

    in_range(lat, bbox.min_lat, bbox.max_lat) && in_range(lon, bbox.min_lon, bbox.max_lon)
}

/// Exact, whitespace- and case-insensitive match of a driver's route against a destination.
///
/// A missing or blank destination matches everything. A driver without a route name never
/// matches a non-blank destination.
pub fn matches_destination(route_name: Option<&str>, destination: Option<&str>) -> bool {
    let destination = match destination.map(str::trim) {
        Some(destination) if !destination.is_empty() => destination.to_lowercase(),
        _ => return true,
    };

    route_name
        .map(|route_name| route_name.trim().to_lowercase() == destination)
        .unwrap_or(false)
}

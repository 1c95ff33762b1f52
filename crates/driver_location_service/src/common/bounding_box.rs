/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use super::{types::*, utils::clamp};

pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Below this cosine of the latitude the width of a degree of longitude is treated as
/// zero and the box spans every longitude.
const POLE_COS_LAT_THRESHOLD: f64 = 1e-6;

const MIN_LAT: f64 = -90.0;
const MAX_LAT: f64 = 90.0;
const MIN_LON: f64 = -180.0;
const MAX_LON: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Computes the axis-aligned box approximating a circle of `radius` meters around `center`.
///
/// This is an equirectangular approximation: degrees are treated as locally flat, so the
/// error grows with the radius. Each edge is clamped to the coordinate domain and the box
/// does not wrap across the antimeridian, so a query centered near ±180° longitude misses
/// drivers on the other side of it.
///
/// # Arguments
///
/// * `center` - The query point.
/// * `radius` - Search radius in meters.
///
/// # Returns
///
/// * `BoundingBox` - The clamped box, with `min_lat <= max_lat` and `min_lon <= max_lon`
///   for any non-negative radius and in-domain center.
pub fn get_bounding_box(center: &Point, Radius(radius): &Radius) -> BoundingBox {
    let Latitude(lat) = center.lat;
    let Longitude(lon) = center.lon;

    let lat_delta = radius / METERS_PER_DEGREE_LAT;

    let cos_lat = lat.to_radians().cos();
    let lon_delta = if cos_lat.abs() < POLE_COS_LAT_THRESHOLD {
        180.0
    } else {
        radius / (METERS_PER_DEGREE_LAT * cos_lat)
    };

    BoundingBox {
        min_lat: clamp(lat - lat_delta, MIN_LAT, MAX_LAT),
        max_lat: clamp(lat + lat_delta, MIN_LAT, MAX_LAT),
        min_lon: clamp(lon - lon_delta, MIN_LON, MAX_LON),
        max_lon: clamp(lon + lon_delta, MIN_LON, MAX_LON),
    }
}

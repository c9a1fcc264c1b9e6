//! Physical constants and coordinate limits

/// Mean radius of Earth (m), the default body radius
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// Latitude bounds in degrees
pub const MIN_LATITUDE_DEG: f64 = -90.0;
pub const MAX_LATITUDE_DEG: f64 = 90.0;

/// Longitude bounds in degrees
pub const MIN_LONGITUDE_DEG: f64 = -180.0;
pub const MAX_LONGITUDE_DEG: f64 = 180.0;

/// Below this |sin(b)| the azimuth division is treated as undefined
pub const AZIMUTH_DEGENERACY_EPSILON: f64 = 1e-12;

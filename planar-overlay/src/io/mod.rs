//! Conversions between the geometry model and other representations.

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "wkt")]
mod wkt;

//! Validated search input.
//!
//! Query parameters arrive as loose strings. Everything in this module turns
//! them into typed values once, at the edge, so the aggregator never sees an
//! incomplete or out-of-range request.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::Serialize;

use crate::ValidationError;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Builds a coordinate pair, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLocation`] when `lat` is outside
    /// `[-90, 90]` or `lng` is outside `[-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidLocation {
            value: format!("{lat},{lng}"),
            reason: reason.to_string(),
        };
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude must be between -90 and 90"));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(invalid("longitude must be between -180 and 180"));
        }
        Ok(Self { lat, lng })
    }
}

/// Renders as `lat,lng`, the form the provider expects in its `location` parameter.
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for LatLng {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidLocation {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected \"lat,lng\""))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("latitude is not a number"))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("longitude is not a number"))?;

        Self::new(lat, lng)
    }
}

/// Provider price tier, `0` (free) through `4` (very expensive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub const MAX: u8 = 4;

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(ValidationError::InvalidPriceLevel(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl FromStr for PriceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| ValidationError::InvalidPriceLevel(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One nearby-search request, fully validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub location: LatLng,
    pub price_level: PriceLevel,
    pub radius_meters: Option<NonZeroU32>,
}

impl SearchCriteria {
    #[must_use]
    pub fn new(location: LatLng, price_level: PriceLevel, radius_meters: Option<NonZeroU32>) -> Self {
        Self {
            location,
            price_level,
            radius_meters,
        }
    }

    /// Parses raw query-string values into criteria.
    ///
    /// Blank values count as missing. Presence is checked for both required
    /// parameters before either is parsed, so a request missing `price` is
    /// reported as missing even when its `location` is also malformed.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingParameter`] if `location` or `price` is absent.
    /// - [`ValidationError::InvalidLocation`], [`ValidationError::InvalidPriceLevel`],
    ///   or [`ValidationError::InvalidRadius`] if a value does not parse.
    pub fn from_params(
        location: Option<&str>,
        price: Option<&str>,
        radius: Option<&str>,
    ) -> Result<Self, ValidationError> {
        fn present(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }

        let location = present(location).ok_or(ValidationError::MissingParameter("location"))?;
        let price = present(price).ok_or(ValidationError::MissingParameter("price"))?;

        let radius_meters = present(radius)
            .map(|raw| {
                raw.parse::<NonZeroU32>()
                    .map_err(|_| ValidationError::InvalidRadius(raw.to_string()))
            })
            .transpose()?;

        Ok(Self {
            location: location.parse()?,
            price_level: price.parse()?,
            radius_meters,
        })
    }
}

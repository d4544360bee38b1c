use serde::{Deserialize, Serialize};

/// A single estimate request as an embedding layer would hand it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub location: String,
    pub total_sqft: f64,
    pub bhk: u32,
    pub bath: u32,
}

/// One entry of the expensiveness ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedLocation {
    pub location: String,
    pub estimated_price: f64,
}

/// What to do when a request names a location the schema does not know.
///
/// Defaults to `Error`: silently pricing with an all-zero location
/// encoding produces plausible-looking but wrong numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MissingLocationPolicy {
    /// Decline the estimate with `LocationNotFound`.
    #[default]
    Error,
    /// Price with no location signal set (baseline behavior).
    FallbackNoLocation,
}

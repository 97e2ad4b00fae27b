//! Fixed addressing policy and runtime settings.
//!
//! The two policy variants below disagree on the layer-count range and on the
//! minimum zone count. Both are kept as named entries instead of being merged.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Smallest subnet the target network accepts; no zone block may be longer.
pub const SUBNET_PREFIX_CEILING: u8 = 28;

/// Prefix for the process-lifetime physical resource id.
pub const PHYSICAL_RESOURCE_ID_PREFIX: &str = "SubnetCidrCalculator";

/// log4rs configuration file looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Pattern used when `LOG_CONFIG_FILE` is missing.
pub const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:5})} {t} - {m}{n}";

pub const ENV_FUNCTION_NAME: &str = "AWS_LAMBDA_FUNCTION_NAME";
pub const ENV_LOG_GROUP_NAME: &str = "AWS_LAMBDA_LOG_GROUP_NAME";
pub const ENV_LOG_STREAM_NAME: &str = "AWS_LAMBDA_LOG_STREAM_NAME";
pub const ENV_RESPONSE_TIMEOUT_SECS: &str = "SUBNET_CALC_RESPONSE_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "SUBNET_CALC_LOG_LEVEL";

pub const DEFAULT_FUNCTION_NAME: &str = "SubnetCidrCalculator";
pub const DEFAULT_RESPONSE_TIMEOUT_SECS: u64 = 30;

/// Which input shape a request used, and therefore which bounds apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyVariant {
    /// `Layers` is a list of names, zones come from `Zones`.
    NamedLayers,
    /// `Layers` is a count, zones come from `ZonesRequired`.
    CountedLayers,
}

impl PolicyVariant {
    pub fn bounds(self) -> &'static PolicyBounds {
        match self {
            PolicyVariant::NamedLayers => &NAMED_LAYERS_POLICY,
            PolicyVariant::CountedLayers => &COUNTED_LAYERS_POLICY,
        }
    }
}

/// Inclusive bounds checked before any subnet arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyBounds {
    pub variant: PolicyVariant,
    pub base_prefix: RangeInclusive<u32>,
    pub layers: RangeInclusive<u32>,
    pub zones: RangeInclusive<u32>,
    /// Minimum zone count stated in the variant's own documentation.
    /// Differs from `zones.start()` for the named-layers variant.
    pub documented_min_zones: u32,
}

pub static NAMED_LAYERS_POLICY: PolicyBounds = PolicyBounds {
    variant: PolicyVariant::NamedLayers,
    base_prefix: 16..=28,
    layers: 2..=5,
    zones: 1..=4,
    documented_min_zones: 2,
};

pub static COUNTED_LAYERS_POLICY: PolicyBounds = PolicyBounds {
    variant: PolicyVariant::CountedLayers,
    base_prefix: 16..=28,
    layers: 1..=4,
    zones: 1..=4,
    documented_min_zones: 1,
};

/// Read an environment variable, falling back to `default` when unset or empty.
pub fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Timeout for delivering the response to the callback URL.
pub fn response_timeout() -> Duration {
    let secs = std::env::var(ENV_RESPONSE_TIMEOUT_SECS)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RESPONSE_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

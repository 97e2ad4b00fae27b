//! Error types.
//!
//! - [`AddressError`] - IPv4 / CIDR parse and arithmetic faults
//! - [`LayerNameError`] - empty or repeated layer names
//! - [`PartitionError`] - validation and carve-out failures of the partitioner
//! - [`RequestError`] - malformed provisioning request properties
//! - [`EventError`] - either of the two above, as seen by the event handler
//! - [`DeliveryError`] - failure to hand the response back to the caller

use std::fmt;
use thiserror::Error;

/// Fault raised by the IPv4 helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid CIDR format: {0}")]
    InvalidFormat(String),

    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("invalid subnet mask: {0}")]
    InvalidMask(String),

    #[error("prefix length /{0} exceeds /32")]
    PrefixTooLong(u32),

    #[error("{block} can only be cut into smaller subnets, not /{prefix}")]
    NotSmaller { block: String, prefix: u8 },

    #[error("subnets of {block} at /{prefix} are smaller than the /{ceiling} limit")]
    BeyondCeiling { block: String, prefix: u8, ceiling: u8 },

    #[error("next subnet after {0} overflows the IPv4 address space")]
    Overflow(String),
}

/// Layer names key the result, so each must be present and unique.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerNameError {
    #[error("layer names must not be empty")]
    Empty,

    #[error("layer name '{0}' is used more than once")]
    Duplicate(String),
}

/// Parameter named in a [`PartitionError::ParameterOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    BasePrefix,
    LayerCount,
    ZoneCount,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::BasePrefix => "base prefix length",
            Parameter::LayerCount => "number of network layers",
            Parameter::ZoneCount => "number of availability zones",
        };
        f.write_str(name)
    }
}

/// Failure of the subnet partitioner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("illegal {parameter} {value}, use a number between {min} and {max} inclusive")]
    ParameterOutOfRange {
        parameter: Parameter,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{0}")]
    Computation(#[from] AddressError),

    #[error(transparent)]
    LayerName(#[from] LayerNameError),
}

impl PartitionError {
    /// Category name used as the prefix of a failure reason.
    pub fn kind(&self) -> &'static str {
        match self {
            PartitionError::ParameterOutOfRange { .. } => "ParameterOutOfRange",
            PartitionError::Computation(_) => "PartitionComputationError",
            PartitionError::LayerName(_) => "InvalidRequest",
        }
    }
}

/// Request properties that cannot be turned into a partition request.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("{path}: {message}")]
    InvalidProperties { path: String, message: String },

    #[error("missing property {0}")]
    MissingProperty(&'static str),

    #[error("property {property} is not a count: '{value}'")]
    InvalidCount { property: &'static str, value: String },

    #[error(transparent)]
    LayerName(#[from] LayerNameError),
}

impl RequestError {
    pub fn kind(&self) -> &'static str {
        "InvalidRequest"
    }
}

/// Anything that turns a Create request into a `FAILED` response.
#[derive(Error, Debug)]
pub enum EventError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Partition(#[from] PartitionError),
}

impl EventError {
    pub fn kind(&self) -> &'static str {
        match self {
            EventError::Request(e) => e.kind(),
            EventError::Partition(e) => e.kind(),
        }
    }
}

/// The response could not be delivered to the callback URL.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("error serializing response: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("error sending response: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("callback returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

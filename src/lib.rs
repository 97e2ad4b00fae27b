//! Subnet CIDR calculator.
//!
//! Splits one IPv4 block into ordered layers, and each layer into
//! availability-zone subnets, for a CloudFormation custom resource.
//!
//! - [`models`] - IPv4 blocks, partition parameters and results
//! - [`processing`] - validation and the layer / zone carve-out
//! - [`cfn`] - provisioning event in, response out
//! - [`output`] - terminal rendering of a plan

pub mod cfn;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use error::LayerNameError;
use models::{Ipv4, LayerSpec, PartitionResult, PartitionSpec};
use std::error::Error;

pub use processing::partition;

/// Validate and partition `cidr` in one step.
pub fn calculate(
    cidr: &str,
    layers: LayerSpec,
    zones: u32,
) -> Result<PartitionResult, Box<dyn Error>> {
    let spec = PartitionSpec::new(Ipv4::new(cidr)?, layers, zones)?;
    Ok(partition(&spec)?)
}

/// Read a layer argument: a bare number is a count, anything else a
/// comma-separated list of names. Blank or repeated names are rejected.
pub fn parse_layers(arg: &str) -> Result<LayerSpec, LayerNameError> {
    if let Ok(count) = arg.trim().parse::<u32>() {
        return Ok(LayerSpec::Count(count));
    }
    let layers = LayerSpec::Named(arg.split(',').map(|name| name.trim().to_string()).collect());
    layers.check_names()?;
    Ok(layers)
}

/// Compute a plan from `plan <CIDR> <LAYERS> <ZONES>` arguments.
pub fn plan_from_args(args: &[String]) -> Result<PartitionResult, Box<dyn Error>> {
    let [cidr, layers, zones] = args else {
        return Err("usage: plan <CIDR> <LAYERS> <ZONES>".into());
    };
    let zones: u32 = zones
        .trim()
        .parse()
        .map_err(|_| format!("Invalid zone count {zones}"))?;
    log::info!("plan cidr={cidr} layers={layers} zones={zones}");
    calculate(cidr, parse_layers(layers)?, zones)
}

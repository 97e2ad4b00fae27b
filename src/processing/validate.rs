//! Policy bounds check run before any subnet arithmetic.

use crate::config::PolicyBounds;
use crate::error::{Parameter, PartitionError};
use std::ops::RangeInclusive;

/// Check base prefix, layer count and zone count against `policy`.
///
/// Checks run in that order, so an out-of-range prefix is always the
/// reported failure regardless of the other two values.
pub fn check_parameters(
    base_prefix: u32,
    layer_count: u32,
    zones: u32,
    policy: &PolicyBounds,
) -> Result<(), PartitionError> {
    check_bound(Parameter::BasePrefix, base_prefix, &policy.base_prefix)?;
    check_bound(Parameter::LayerCount, layer_count, &policy.layers)?;
    check_bound(Parameter::ZoneCount, zones, &policy.zones)?;

    if zones < policy.documented_min_zones {
        log::warn!(
            "{zones} zone(s) accepted under {variant:?} policy, which documents a minimum of {min}",
            variant = policy.variant,
            min = policy.documented_min_zones
        );
    }
    Ok(())
}

fn check_bound(
    parameter: Parameter,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), PartitionError> {
    if range.contains(&value) {
        return Ok(());
    }
    let err = PartitionError::ParameterOutOfRange {
        parameter,
        value,
        min: *range.start(),
        max: *range.end(),
    };
    log::error!("{err}");
    Err(err)
}

//! Chained binary carve-out of a base block into layers and zones.
//!
//! Each layer takes the first half of whatever is left, and the second half
//! is carried forward to the next layer. The halves of one split tile their
//! parent exactly, so the returned blocks never overlap.

use crate::config::SUBNET_PREFIX_CEILING;
use crate::error::{AddressError, PartitionError};
use crate::models::{LayerResult, PartitionResult, PartitionSpec};

/// Extra prefix bits needed for `zones` equal zone blocks: `ceil(log2(zones))`.
pub fn zone_modifier(zones: u32) -> u8 {
    zones.max(1).next_power_of_two().trailing_zeros() as u8
}

/// Compute the layer and zone blocks for a validated spec.
pub fn partition(spec: &PartitionSpec) -> Result<PartitionResult, PartitionError> {
    let modifier = zone_modifier(spec.zones());
    let mut running = spec.base();
    let mut layers = Vec::with_capacity(spec.layers().len() as usize);

    log::debug!(
        "partition base={} layers={} zones={} zone_modifier={modifier}",
        running,
        spec.layers().len(),
        spec.zones()
    );

    for id in spec.layers().ids() {
        let (layer_block, remainder) = running.halve()?;
        let zone_prefix = layer_block.prefix_len() + modifier;
        if zone_prefix > SUBNET_PREFIX_CEILING {
            return Err(AddressError::BeyondCeiling {
                block: layer_block.to_string(),
                prefix: zone_prefix,
                ceiling: SUBNET_PREFIX_CEILING,
            }
            .into());
        }
        let zones = layer_block.subnets(zone_prefix)?;
        log::debug!("layer {id} = {layer_block} zones={}", zones.len());

        layers.push((
            id,
            LayerResult {
                block: layer_block,
                zones,
            },
        ));
        running = remainder;
    }

    let per_layer = 1u32 << modifier;
    if per_layer != spec.zones() {
        log::warn!(
            "{} zones requested, returning {per_layer} equal zone blocks per layer",
            spec.zones()
        );
    }

    Ok(PartitionResult {
        base: spec.base(),
        requested_zones: spec.zones(),
        zone_modifier: modifier,
        layers,
    })
}

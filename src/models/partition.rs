//! Partition request and result types.

use super::{Ipv4, NetworkBlock};
use crate::config::PolicyVariant;
use crate::error::{LayerNameError, PartitionError};
use crate::processing::check_parameters;
use std::collections::HashSet;
use std::fmt;

/// How the layers of a partition were declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerSpec {
    /// Ordered layer names, e.g. `["public", "private"]`.
    Named(Vec<String>),
    /// Bare number of layers, labelled `layer1..layerN`.
    Count(u32),
}

impl LayerSpec {
    pub fn len(&self) -> u32 {
        match self {
            LayerSpec::Named(names) => names.len() as u32,
            LayerSpec::Count(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn policy(&self) -> PolicyVariant {
        match self {
            LayerSpec::Named(_) => PolicyVariant::NamedLayers,
            LayerSpec::Count(_) => PolicyVariant::CountedLayers,
        }
    }

    /// Named layers must be non-blank and distinct. A count always passes.
    pub fn check_names(&self) -> Result<(), LayerNameError> {
        let LayerSpec::Named(names) = self else {
            return Ok(());
        };
        let mut seen = HashSet::new();
        for name in names {
            if name.trim().is_empty() {
                return Err(LayerNameError::Empty);
            }
            if !seen.insert(name.as_str()) {
                return Err(LayerNameError::Duplicate(name.clone()));
            }
        }
        Ok(())
    }

    /// Layer identifiers in carve order.
    pub fn ids(&self) -> Vec<LayerId> {
        match self {
            LayerSpec::Named(names) => names.iter().cloned().map(LayerId::Named).collect(),
            LayerSpec::Count(n) => (1..=*n as usize).map(LayerId::Index).collect(),
        }
    }
}

/// Key of one layer in a [`PartitionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayerId {
    Named(String),
    /// 1-based position.
    Index(usize),
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerId::Named(name) => f.write_str(name),
            LayerId::Index(n) => write!(f, "layer{n}"),
        }
    }
}

/// Validated partition parameters.
///
/// Only [`PartitionSpec::new`] builds one, so every instance has passed the
/// policy bounds for its layer shape and carries distinct layer names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSpec {
    base: NetworkBlock,
    layers: LayerSpec,
    zones: u32,
}

impl PartitionSpec {
    pub fn new(base: Ipv4, layers: LayerSpec, zones: u32) -> Result<Self, PartitionError> {
        let policy = layers.policy().bounds();
        check_parameters(base.mask.into(), layers.len(), zones, policy)?;
        layers.check_names().map_err(|e| {
            log::error!("{e}");
            PartitionError::from(e)
        })?;
        if base.has_host_bits() {
            log::info!("Base block {base} has host bits set, using its network address");
        }
        Ok(PartitionSpec {
            base: NetworkBlock::new(base)?,
            layers,
            zones,
        })
    }

    pub fn base(&self) -> NetworkBlock {
        self.base
    }

    pub fn layers(&self) -> &LayerSpec {
        &self.layers
    }

    pub fn zones(&self) -> u32 {
        self.zones
    }
}

/// One layer's block and the zone blocks carved from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerResult {
    pub block: NetworkBlock,
    pub zones: Vec<NetworkBlock>,
}

/// Ordered layer results of a single partition run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionResult {
    pub(crate) base: NetworkBlock,
    pub(crate) requested_zones: u32,
    pub(crate) zone_modifier: u8,
    pub(crate) layers: Vec<(LayerId, LayerResult)>,
}

impl PartitionResult {
    pub fn base(&self) -> NetworkBlock {
        self.base
    }

    pub fn requested_zones(&self) -> u32 {
        self.requested_zones
    }

    /// Extra prefix bits used to split a layer into zones.
    pub fn zone_modifier(&self) -> u8 {
        self.zone_modifier
    }

    /// Zone blocks actually returned per layer, `2^zone_modifier`.
    ///
    /// Larger than [`Self::requested_zones`] when that is not a power of two.
    pub fn zone_blocks_per_layer(&self) -> usize {
        1usize << self.zone_modifier
    }

    pub fn layers(&self) -> &[(LayerId, LayerResult)] {
        &self.layers
    }

    pub fn get(&self, id: &LayerId) -> Option<&LayerResult> {
        self.layers
            .iter()
            .find(|(layer_id, _)| layer_id == id)
            .map(|(_, layer)| layer)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

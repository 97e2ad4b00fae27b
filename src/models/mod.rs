//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation, as supplied
//! - [`NetworkBlock`] - normalized, immutable network block
//! - [`PartitionSpec`], [`LayerSpec`] - validated partition parameters
//! - [`PartitionResult`], [`LayerResult`] - computed address plan

mod block;
mod ipv4;
mod partition;

// Re-export public types
pub use block::NetworkBlock;
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, ip_after_subnet, usable_hosts, Ipv4,
    AWS_RESERVED_HOSTS, MAX_LENGTH,
};
pub use partition::{LayerId, LayerResult, LayerSpec, PartitionResult, PartitionSpec};

//! Terminal output of an address plan.

use crate::models::{NetworkBlock, PartitionResult};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a plan as CSV-like rows: one per layer, followed by its zones.
pub fn render_plan(result: &PartitionResult) -> String {
    let mut lines = vec![
        format!(
            "# base {} layers={} zones requested={} returned={}",
            result.base().to_string().bold(),
            result.len(),
            result.requested_zones(),
            result.zone_blocks_per_layer()
        ),
        format!(
            r#"{layer},{kind},{cidr},{broadcast},{hosts}"#,
            layer = format_field("layer", 12),
            kind = format_field("kind", 8),
            cidr = format_field("cidr", 20),
            broadcast = format_field("broadcast", 18),
            hosts = format_field("hosts", 8),
        ),
    ];

    for (id, layer) in result.layers() {
        lines.push(plan_row(&id.to_string(), "layer", &layer.block));
        for (i, zone) in layer.zones.iter().enumerate() {
            lines.push(plan_row(&id.to_string(), &format!("zone{}", i + 1), zone));
        }
    }

    if result.zone_blocks_per_layer() as u32 != result.requested_zones() {
        lines.push(format!(
            "#{}# {} zones requested, {} zone blocks reserved per layer",
            "NOTE".on_red(),
            result.requested_zones(),
            result.zone_blocks_per_layer()
        ));
    }
    lines.join("\n")
}

fn plan_row(layer: &str, kind: &str, block: &NetworkBlock) -> String {
    let cidr = format_field(block, 20);
    let cidr = if kind == "layer" {
        cidr.green().to_string()
    } else {
        cidr
    };
    format!(
        r#"{layer},{kind},{cidr},{broadcast},{hosts}"#,
        layer = format_field(layer, 12),
        kind = format_field(kind, 8),
        broadcast = format_field(block.broadcast(), 18),
        hosts = format_field(block.usable_hosts(), 8),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ipv4, LayerSpec, PartitionSpec};
    use crate::processing::partition;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_render_plan_rows() {
        let spec = PartitionSpec::new(
            Ipv4::new("10.0.0.0/16").unwrap(),
            LayerSpec::Named(vec!["public".into(), "private".into()]),
            3,
        )
        .unwrap();
        let text = render_plan(&partition(&spec).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        // header, column names, 2 x (layer + 4 zones), note
        assert_eq!(lines.len(), 13);
        assert!(lines[2].contains("10.0.0.0/17"));
        assert!(lines[3].contains("\"zone1\""));
        assert!(lines[3].contains("10.0.0.0/19"));
        assert!(lines[3].contains("\"8187\""));
        assert!(lines[12].contains("3 zones requested, 4 zone blocks reserved"));
    }
}

//! Provisioning event parsing.

use crate::error::{PartitionError, RequestError};
use crate::models::{Ipv4, LayerSpec, PartitionSpec};
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::io::Read;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestType::Create => "Create",
            RequestType::Update => "Update",
            RequestType::Delete => "Delete",
        };
        f.write_str(name)
    }
}

/// Custom-resource event envelope.
///
/// `resource_properties` stays raw so that a bad property can still be
/// answered with the request's identifiers.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct CfnEvent {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub physical_resource_id: Option<String>,
    #[serde(default)]
    pub resource_properties: serde_json::Value,
}

impl CfnEvent {
    /// Parse an event, reporting the JSON path of the first bad field.
    pub fn from_json(json: &str) -> Result<CfnEvent, RequestError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            RequestError::InvalidProperties {
                path: e.path().to_string(),
                message: e.inner().to_string(),
            }
        })
    }
}

/// Read an event from `path`, or from stdin when no path is given.
pub fn read_event(path: Option<&str>) -> Result<CfnEvent, Box<dyn Error>> {
    let json = match path {
        Some(path) => {
            log::info!("Reading event from {path}");
            std::fs::read_to_string(path).map_err(|e| format!("Error reading {path}: {e}"))?
        }
        None => {
            log::info!("Reading event from stdin");
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            json
        }
    };
    Ok(CfnEvent::from_json(&json)?)
}

/// Count given either as a JSON number or as a decimal string.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum Count {
    Number(u32),
    Text(String),
}

impl Count {
    fn value(&self, property: &'static str) -> Result<u32, RequestError> {
        match self {
            Count::Number(n) => Ok(*n),
            Count::Text(text) => text.trim().parse().map_err(|_| RequestError::InvalidCount {
                property,
                value: text.clone(),
            }),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawLayers {
    Names(Vec<String>),
    Count(Count),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct RawProperties {
    vpc_cidr_block: Ipv4,
    layers: RawLayers,
    #[serde(default)]
    zones: Option<Count>,
    #[serde(default)]
    zones_required: Option<Count>,
}

/// Partition parameters taken from `ResourceProperties`, not yet validated
/// against the policy bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRequest {
    pub base: Ipv4,
    pub layers: LayerSpec,
    pub zones: u32,
}

impl PartitionRequest {
    /// Named layers pair with `Zones`, a layer count pairs with `ZonesRequired`.
    pub fn from_properties(properties: &serde_json::Value) -> Result<Self, RequestError> {
        let raw: RawProperties = serde_path_to_error::deserialize(properties).map_err(|e| {
            RequestError::InvalidProperties {
                path: e.path().to_string(),
                message: e.inner().to_string(),
            }
        })?;

        let (layers, zones) = match raw.layers {
            RawLayers::Names(names) => {
                let layers = LayerSpec::Named(names);
                layers.check_names()?;
                let zones = raw.zones.ok_or(RequestError::MissingProperty("Zones"))?;
                (layers, zones.value("Zones")?)
            }
            RawLayers::Count(count) => {
                let zones = raw
                    .zones_required
                    .ok_or(RequestError::MissingProperty("ZonesRequired"))?;
                (
                    LayerSpec::Count(count.value("Layers")?),
                    zones.value("ZonesRequired")?,
                )
            }
        };

        Ok(PartitionRequest {
            base: raw.vpc_cidr_block,
            layers,
            zones,
        })
    }

    pub fn into_spec(self) -> Result<PartitionSpec, PartitionError> {
        PartitionSpec::new(self.base, self.layers, self.zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayerNameError;
    use serde_json::json;

    #[test]
    fn test_named_layers_with_string_zones() {
        let request = PartitionRequest::from_properties(&json!({
            "ServiceToken": "arn:aws:lambda:eu-west-1:123456789012:function:SubnetCidrCalculator",
            "VpcCidrBlock": "10.0.0.0/16",
            "Layers": ["public", "private"],
            "Zones": "3"
        }))
        .unwrap();
        assert_eq!(request.base, Ipv4::new("10.0.0.0/16").unwrap());
        assert_eq!(
            request.layers,
            LayerSpec::Named(vec!["public".into(), "private".into()])
        );
        assert_eq!(request.zones, 3);
    }

    #[test]
    fn test_counted_layers() {
        let request = PartitionRequest::from_properties(&json!({
            "VpcCidrBlock": "10.1.0.0/20",
            "Layers": "3",
            "ZonesRequired": 2
        }))
        .unwrap();
        assert_eq!(request.layers, LayerSpec::Count(3));
        assert_eq!(request.zones, 2);

        let request = PartitionRequest::from_properties(&json!({
            "VpcCidrBlock": "10.1.0.0/20",
            "Layers": 2,
            "ZonesRequired": " 4 "
        }))
        .unwrap();
        assert_eq!(request.layers, LayerSpec::Count(2));
        assert_eq!(request.zones, 4);
    }

    #[test]
    fn test_zone_key_must_match_layer_shape() {
        let err = PartitionRequest::from_properties(&json!({
            "VpcCidrBlock": "10.1.0.0/20",
            "Layers": ["a", "b"],
            "ZonesRequired": "2"
        }))
        .unwrap_err();
        assert!(matches!(err, RequestError::MissingProperty("Zones")));

        let err = PartitionRequest::from_properties(&json!({
            "VpcCidrBlock": "10.1.0.0/20",
            "Layers": "2",
            "Zones": "2"
        }))
        .unwrap_err();
        assert!(matches!(err, RequestError::MissingProperty("ZonesRequired")));
    }

    #[test]
    fn test_bad_cidr_reports_path() {
        let err = PartitionRequest::from_properties(&json!({
            "VpcCidrBlock": "10.0.0.0",
            "Layers": ["a", "b"],
            "Zones": "2"
        }))
        .unwrap_err();
        match err {
            RequestError::InvalidProperties { path, message } => {
                assert_eq!(path, "VpcCidrBlock");
                assert!(message.contains("invalid CIDR format"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_bad_counts_and_names() {
        let err = PartitionRequest::from_properties(&json!({
            "VpcCidrBlock": "10.0.0.0/16",
            "Layers": ["a", "b"],
            "Zones": "two"
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            RequestError::InvalidCount {
                property: "Zones",
                ..
            }
        ));

        let err = PartitionRequest::from_properties(&json!({
            "VpcCidrBlock": "10.0.0.0/16",
            "Layers": ["a", "a"],
            "Zones": "2"
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            RequestError::LayerName(LayerNameError::Duplicate(ref n)) if n == "a"
        ));

        let err = PartitionRequest::from_properties(&json!({
            "VpcCidrBlock": "10.0.0.0/16",
            "Layers": ["a", " "],
            "Zones": "2"
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            RequestError::LayerName(LayerNameError::Empty)
        ));
    }

    #[test]
    fn test_missing_properties() {
        let err = PartitionRequest::from_properties(&serde_json::Value::Null).unwrap_err();
        assert_eq!(err.kind(), "InvalidRequest");

        let err = PartitionRequest::from_properties(&json!({ "VpcCidrBlock": "10.0.0.0/16" }))
            .unwrap_err();
        assert!(err.to_string().contains("Layers"), "{err}");
    }

    #[test]
    fn test_event_envelope() {
        let event = CfnEvent::from_json(
            r#"{
                "RequestType": "Delete",
                "ResponseURL": "http://localhost/response",
                "StackId": "stack",
                "RequestId": "req",
                "LogicalResourceId": "Calc",
                "PhysicalResourceId": "SubnetCidrCalculator-1"
            }"#,
        )
        .unwrap();
        assert_eq!(event.request_type, RequestType::Delete);
        assert_eq!(event.request_type.to_string(), "Delete");
        assert!(event.resource_properties.is_null());
        assert_eq!(
            event.physical_resource_id.as_deref(),
            Some("SubnetCidrCalculator-1")
        );

        let err = CfnEvent::from_json(r#"{"RequestType": "Rename"}"#).unwrap_err();
        assert!(err.to_string().starts_with("RequestType"), "{err}");
    }
}

//! Response envelope sent back to the caller.

use super::{CfnEvent, HandlerContext};
use crate::models::{LayerId, PartitionResult};
use itertools::Itertools;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// `Data` attribute map, kept in layer order.
///
/// Named layers produce `<name>` and `<name>List` entries, counted layers a
/// single `layer<n>` entry holding the layer block and its zones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseData {
    entries: Vec<(String, String)>,
}

impl ResponseData {
    pub fn from_partition(result: &PartitionResult) -> Self {
        let mut entries = Vec::with_capacity(result.len() * 2);
        for (id, layer) in result.layers() {
            match id {
                LayerId::Named(name) => {
                    entries.push((name.clone(), layer.block.to_string()));
                    entries.push((format!("{name}List"), layer.zones.iter().join(",")));
                }
                LayerId::Index(_) => {
                    let blocks = std::iter::once(&layer.block)
                        .chain(layer.zones.iter())
                        .join(",");
                    entries.push((id.to_string(), blocks));
                }
            }
        }
        ResponseData { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl Serialize for ResponseData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Display for ResponseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .entries
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .join(" ");
        f.write_str(&text)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CfnResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub data: Option<ResponseData>,
}

impl CfnResponse {
    pub fn success(
        event: &CfnEvent,
        ctx: &HandlerContext,
        detail: Option<&str>,
        data: Option<ResponseData>,
    ) -> Self {
        Self::build(event, ctx, ResponseStatus::Success, detail, data)
    }

    pub fn failed(event: &CfnEvent, ctx: &HandlerContext, detail: &str) -> Self {
        Self::build(event, ctx, ResponseStatus::Failed, Some(detail), None)
    }

    fn build(
        event: &CfnEvent,
        ctx: &HandlerContext,
        status: ResponseStatus,
        detail: Option<&str>,
        data: Option<ResponseData>,
    ) -> Self {
        CfnResponse {
            status,
            reason: ctx.reason(detail),
            physical_resource_id: ctx.physical_resource_id.clone(),
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

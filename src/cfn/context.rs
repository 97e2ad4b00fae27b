//! Per-process handler context.

use crate::config;
use uuid::Uuid;

/// Values fixed for the lifetime of the process and echoed in every response.
///
/// Built once at start-up and passed to the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerContext {
    pub physical_resource_id: String,
    pub function_name: String,
    pub log_group_name: String,
    pub log_stream_name: String,
}

impl HandlerContext {
    /// Create a context with a freshly generated physical resource id.
    pub fn new(function_name: &str, log_group_name: &str, log_stream_name: &str) -> Self {
        HandlerContext {
            physical_resource_id: format!(
                "{}-{}",
                config::PHYSICAL_RESOURCE_ID_PREFIX,
                Uuid::new_v4()
            ),
            function_name: function_name.to_string(),
            log_group_name: log_group_name.to_string(),
            log_stream_name: log_stream_name.to_string(),
        }
    }

    /// Read function name and log location from the Lambda environment.
    pub fn from_env() -> Self {
        let function_name =
            config::env_or(config::ENV_FUNCTION_NAME, config::DEFAULT_FUNCTION_NAME);
        let log_group = config::env_or(config::ENV_LOG_GROUP_NAME, "local");
        let log_stream = config::env_or(config::ENV_LOG_STREAM_NAME, "stdout");
        HandlerContext::new(&function_name, &log_group, &log_stream)
    }

    /// Response reason: the specific detail, if any, followed by where to find the logs.
    pub fn reason(&self, detail: Option<&str>) -> String {
        let location = format!(
            "See the details in log group {} stream {}",
            self.log_group_name, self.log_stream_name
        );
        match detail {
            Some(detail) if !detail.trim().is_empty() => format!("{detail}.. {location}"),
            _ => location,
        }
    }
}

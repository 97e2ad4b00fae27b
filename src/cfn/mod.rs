//! CloudFormation custom-resource boundary.
//!
//! - [`event`] - request envelope and property parsing
//! - [`response`] - response envelope and `Data` serialization
//! - [`reporter`] - delivery of the response to the callback URL
//! - [`context`] - per-process identity and log location
//! - [`handler`] - event in, response out

mod context;
mod event;
mod handler;
mod reporter;
mod response;

pub use context::HandlerContext;
pub use event::{read_event, CfnEvent, PartitionRequest, RequestType};
pub use handler::{build_response, handle_event};
pub use reporter::{HttpReporter, ReportOutcome};
pub use response::{CfnResponse, ResponseData, ResponseStatus};

//! Top-level provisioning event handler.

use super::{
    CfnEvent, CfnResponse, HandlerContext, PartitionRequest, ReportOutcome, RequestType,
    ResponseData,
};
use crate::error::{DeliveryError, EventError};
use crate::processing::partition;

/// Turn an event into its response without any I/O.
///
/// Only `Create` runs the partitioner; `Update` and `Delete` are acknowledged
/// with no data. Every failure is folded into a `FAILED` response.
pub fn build_response(event: &CfnEvent, ctx: &HandlerContext) -> CfnResponse {
    log::info!(
        "{} request {} for {}",
        event.request_type,
        event.request_id,
        event.logical_resource_id
    );

    if event.request_type != RequestType::Create {
        let detail = format!(
            "Calling {} for a {} request, address plans are only computed on Create",
            ctx.function_name, event.request_type
        );
        log::info!("{detail}");
        return CfnResponse::success(event, ctx, Some(&detail), None);
    }

    match plan_from_properties(&event.resource_properties) {
        Ok(data) => {
            log::info!("{data}");
            CfnResponse::success(event, ctx, None, Some(data))
        }
        Err(err) => {
            let detail = format!("{}: {err}", err.kind());
            log::error!("{detail}");
            CfnResponse::failed(event, ctx, &detail)
        }
    }
}

fn plan_from_properties(properties: &serde_json::Value) -> Result<ResponseData, EventError> {
    let spec = PartitionRequest::from_properties(properties)?.into_spec()?;
    let result = partition(&spec)?;
    Ok(ResponseData::from_partition(&result))
}

/// Build the response and deliver it through `reporter`.
///
/// Delivery failures are returned, not swallowed: the caller cannot be told
/// about them any other way.
pub async fn handle_event<R>(
    event: &CfnEvent,
    ctx: &HandlerContext,
    reporter: &R,
) -> Result<CfnResponse, DeliveryError>
where
    R: ReportOutcome + ?Sized,
{
    let response = build_response(event, ctx);
    reporter.report(&event.response_url, &response).await?;
    Ok(response)
}

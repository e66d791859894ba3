use crate::shared::api_utils::{path_segment, ApiError, ApiGateway, ApiRequest};
use contracts::enums::EntityKind;
use contracts::shared::entity_detail::EntityDetail;

pub fn detail_request(kind: EntityKind, id: &str) -> ApiRequest {
    ApiRequest::get(format!("{}/{}", kind.collection_path(), path_segment(id)))
}

/// Load one entity together with its current action list
pub async fn fetch_detail<G: ApiGateway + ?Sized>(
    gateway: &G,
    kind: EntityKind,
    id: &str,
) -> Result<EntityDetail, ApiError> {
    let response = gateway.execute(&detail_request(kind, id)).await?;
    let data = response
        .data
        .ok_or_else(|| ApiError::Decode(format!("{} {}: response has no data", kind, id)))?;
    serde_json::from_value(data)
        .map_err(|e| ApiError::Decode(format!("Failed to parse {} {}: {}", kind, id, e)))
}

/// A fetch started at refresh `started` may only be applied while no newer
/// refresh has been requested. `current` is `None` once the page is gone.
pub fn is_current(started: u64, current: Option<u64>) -> bool {
    current == Some(started)
}

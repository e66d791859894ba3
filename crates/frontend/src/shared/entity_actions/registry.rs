//! Entity operation registry: which REST call changes the status or stage
//! of each entity kind.
//!
//! Every `StatusEntity` has exactly one mutation. The payload is checked
//! before a request is built, so a malformed request never exists.

use super::error::DispatchError;
use crate::shared::api_utils::{path_segment, ApiRequest, HttpMethod};
use contracts::enums::{MutationMode, StatusEntity};
use contracts::shared::entity_actions::MutationPayload;
use serde_json::json;

fn edit_method(entity: StatusEntity) -> HttpMethod {
    match entity {
        StatusEntity::Deal | StatusEntity::Lead => HttpMethod::Put,
        StatusEntity::Quotation
        | StatusEntity::Purchase
        | StatusEntity::Receipt
        | StatusEntity::Delivery
        | StatusEntity::Bill => HttpMethod::Patch,
    }
}

/// Build the status/stage mutation request for one entity
pub fn resolve(
    entity: StatusEntity,
    id: &str,
    payload: &MutationPayload,
) -> Result<ApiRequest, DispatchError> {
    let body = match entity.mutation_mode() {
        MutationMode::Stage => {
            let order = payload.order.ok_or(DispatchError::MissingOrder(entity))?;
            json!({ "order": order })
        }
        MutationMode::Status => {
            let status = payload
                .non_blank_status()
                .ok_or(DispatchError::MissingStatus(entity))?;
            json!({ "status": status })
        }
    };

    let path = format!(
        "{}/edit/{}",
        entity.kind().collection_path(),
        path_segment(id)
    );

    Ok(ApiRequest {
        method: edit_method(entity),
        path,
        body: Some(body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_sends_order() {
        let req = resolve(StatusEntity::Deal, "42", &MutationPayload::order(Some(3))).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "/deals/edit/42");
        assert_eq!(req.body, Some(json!({ "order": 3 })));
    }

    #[test]
    fn test_deal_without_order_fails_fast() {
        let err = resolve(StatusEntity::Deal, "42", &MutationPayload::status("won")).unwrap_err();
        assert_eq!(err, DispatchError::MissingOrder(StatusEntity::Deal));
        assert!(err.is_precondition());
    }

    #[test]
    fn test_lead_sends_status() {
        let req = resolve(
            StatusEntity::Lead,
            "7",
            &MutationPayload::status("contacted"),
        )
        .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "/enquiry/edit/7");
        assert_eq!(req.body, Some(json!({ "status": "contacted" })));
    }

    #[test]
    fn test_quotation_sends_status_with_patch() {
        let req = resolve(
            StatusEntity::Quotation,
            "q-1",
            &MutationPayload::status("sent"),
        )
        .unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "/quotations/edit/q-1");
        assert_eq!(req.body, Some(json!({ "status": "sent" })));
    }

    #[test]
    fn test_status_kinds_reject_missing_or_blank_status() {
        for entity in StatusEntity::all()
            .into_iter()
            .filter(|e| e.mutation_mode() == MutationMode::Status)
        {
            assert_eq!(
                resolve(entity, "1", &MutationPayload::order(Some(2))),
                Err(DispatchError::MissingStatus(entity))
            );
            assert_eq!(
                resolve(entity, "1", &MutationPayload::status("")),
                Err(DispatchError::MissingStatus(entity))
            );
        }
    }

    #[test]
    fn test_every_status_kind_has_a_mutation() {
        let expected = [
            (StatusEntity::Purchase, "/purchases/edit/9"),
            (StatusEntity::Receipt, "/receipt/edit/9"),
            (StatusEntity::Delivery, "/delivery/edit/9"),
            (StatusEntity::Bill, "/bills/edit/9"),
        ];
        for (entity, path) in expected {
            let req = resolve(entity, "9", &MutationPayload::status("done")).unwrap();
            assert_eq!(req.path, path);
            assert_eq!(req.method, HttpMethod::Patch);
        }
    }

    #[test]
    fn test_id_is_path_encoded() {
        let req = resolve(StatusEntity::Bill, "B/2024 1", &MutationPayload::status("paid")).unwrap();
        assert_eq!(req.path, "/bills/edit/B%2F2024%201");
    }
}

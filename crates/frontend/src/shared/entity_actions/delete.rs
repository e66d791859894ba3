//! Delete registry: the delete call of each deletable entity kind.

use super::error::DispatchError;
use crate::shared::api_utils::{path_segment, ApiRequest};
use contracts::enums::DeletableEntity;
use contracts::shared::entity_actions::DeleteIdsRequest;

pub fn resolve(entity: DeletableEntity, id: &str) -> Result<ApiRequest, DispatchError> {
    let collection = entity.kind().collection_path();
    match entity {
        // Products are removed through the bulk endpoint
        DeletableEntity::Product => Ok(ApiRequest::delete(format!("{}/delete", collection))
            .with_json(&DeleteIdsRequest::single(id))?),
        DeletableEntity::Deal
        | DeletableEntity::Lead
        | DeletableEntity::Quotation
        | DeletableEntity::Purchase
        | DeletableEntity::Receipt
        | DeletableEntity::Bill
        | DeletableEntity::Vendor => Ok(ApiRequest::delete(format!(
            "{}/delete/{}",
            collection,
            path_segment(id)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_path_per_kind() {
        let expected = [
            (DeletableEntity::Deal, "/deals/delete/5"),
            (DeletableEntity::Lead, "/enquiry/delete/5"),
            (DeletableEntity::Quotation, "/quotations/delete/5"),
            (DeletableEntity::Purchase, "/purchases/delete/5"),
            (DeletableEntity::Receipt, "/receipt/delete/5"),
            (DeletableEntity::Bill, "/bills/delete/5"),
            (DeletableEntity::Vendor, "/vendors/delete/5"),
        ];
        for (entity, path) in expected {
            let req = resolve(entity, "5").unwrap();
            assert_eq!(req.method, HttpMethod::Delete);
            assert_eq!(req.path, path);
            assert_eq!(req.body, None);
        }
    }

    #[test]
    fn test_product_uses_ids_body() {
        let req = resolve(DeletableEntity::Product, "p-9").unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "/products/delete");
        assert_eq!(req.body, Some(json!({ "ids": ["p-9"] })));
    }
}

//! Extra-action registry: side-effecting operations available while an
//! entity sits in a particular state ("Validate" on a draft receipt).
//!
//! Keys come from the backend as opaque strings. An unknown key is not an
//! error here; the dispatcher decides what to do with it.

use super::error::DispatchError;
use crate::shared::api_utils::{path_segment, ApiGateway, ApiRequest};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraAction {
    ReceiptValidate,
    DeliveryValidate,
}

impl ExtraAction {
    pub fn key(&self) -> &'static str {
        match self {
            ExtraAction::ReceiptValidate => "RECEIPT_VALIDATE",
            ExtraAction::DeliveryValidate => "DELIVERY_VALIDATE",
        }
    }

    pub fn all() -> Vec<ExtraAction> {
        vec![ExtraAction::ReceiptValidate, ExtraAction::DeliveryValidate]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|action| action.key() == key)
    }

    pub fn request(&self, id: &str) -> ApiRequest {
        let path = match self {
            ExtraAction::ReceiptValidate => format!("/receipt/validate/{}", path_segment(id)),
            ExtraAction::DeliveryValidate => format!("/delivery/validate/{}", path_segment(id)),
        };
        let mut request = ApiRequest::patch(path);
        request.body = Some(json!({}));
        request
    }

    /// Handler: one backend call, success on normal return
    pub async fn run<G: ApiGateway + ?Sized>(
        &self,
        gateway: &G,
        id: &str,
    ) -> Result<(), DispatchError> {
        gateway.execute(&self.request(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::HttpMethod;

    #[test]
    fn test_lookup() {
        assert_eq!(
            ExtraAction::from_key("RECEIPT_VALIDATE"),
            Some(ExtraAction::ReceiptValidate)
        );
        assert_eq!(
            ExtraAction::from_key("DELIVERY_VALIDATE"),
            Some(ExtraAction::DeliveryValidate)
        );
        assert_eq!(ExtraAction::from_key("receipt_validate"), None);
        assert_eq!(ExtraAction::from_key("PRINT"), None);
    }

    #[test]
    fn test_receipt_validate_request() {
        let req = ExtraAction::ReceiptValidate.request("15");
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "/receipt/validate/15");
        assert_eq!(req.body, Some(json!({})));
    }

    #[test]
    fn test_delivery_validate_request() {
        let req = ExtraAction::DeliveryValidate.request("d 1");
        assert_eq!(req.path, "/delivery/validate/d%201");
    }
}

pub mod api_response;
pub mod entity_actions;
pub mod entity_detail;

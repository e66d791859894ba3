pub mod api_utils;
pub mod entity_actions;
pub mod entity_detail;
pub mod icons;
pub mod notifications;
pub mod page_frame;

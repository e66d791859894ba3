//! Tab management module
//!
//! Содержит:
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг tab.key → View и маршрут → tab.key

pub mod page;
pub mod registry;

pub use page::TabPage;
pub use registry::{detail_tab_key, route_to_tab_key, tab_title_for_key};

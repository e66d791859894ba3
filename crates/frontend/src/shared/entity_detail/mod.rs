pub mod api;
pub mod page;

pub use api::fetch_detail;
pub use page::EntityDetailPage;

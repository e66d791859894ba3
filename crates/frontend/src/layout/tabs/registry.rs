//! Tab content registry - the single place that maps tab.key → View
//!
//! Ключи табов:
//! - `{kind}_detail_{id}` — карточка сущности (например `deal_detail_42`)
//! - любой другой ключ — маршрут, для которого нет своей страницы

use crate::layout::global_context::AppGlobalContext;
use crate::shared::entity_detail::EntityDetailPage;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_PLACEHOLDER};
use contracts::enums::EntityKind;
use leptos::logging::log;
use leptos::prelude::*;

const DETAIL_MARKER: &str = "_detail_";

pub fn detail_tab_key(kind: EntityKind, id: &str) -> String {
    format!("{}{}{}", kind.code(), DETAIL_MARKER, id)
}

pub fn parse_detail_tab_key(key: &str) -> Option<(EntityKind, String)> {
    let (code, id) = key.split_once(DETAIL_MARKER)?;
    let kind = EntityKind::from_code(code)?;
    if id.is_empty() {
        return None;
    }
    Some((kind, id.to_string()))
}

/// Map a route like `/deals/42` to the detail tab of that entity.
/// Anything that is not `/{collection}/{id}` stays keyed by the route itself.
pub fn route_to_tab_key(route: &str) -> String {
    let path = route.split(['?', '#']).next().unwrap_or(route);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if let [collection, id] = segments.as_slice() {
        let collection_path = format!("/{}", collection);
        if let Some(kind) = EntityKind::from_collection_path(&collection_path) {
            if !id.is_empty() && *id != "new" {
                let id = urlencoding::decode(id)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| id.to_string());
                return detail_tab_key(kind, &id);
            }
        }
    }
    route.to_string()
}

pub fn tab_title_for_key(key: &str) -> String {
    match parse_detail_tab_key(key) {
        Some((kind, id)) => format!("{} {}", kind.display_name(), id),
        None => key.to_string(),
    }
}

/// Renders tab content by its key.
///
/// # Arguments
/// * `key` - unique tab key
/// * `tabs_store` - used by detail pages to close their own tab
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match parse_detail_tab_key(key) {
        Some((kind, id)) => {
            let key_for_close = key.to_string();
            view! {
                <EntityDetailPage
                    kind=kind
                    id=id
                    tab_key=key.to_string()
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }
        None => {
            log!("No page registered for tab: {}", key);
            let key_owned = key.to_string();
            view! {
                <PageFrame page_id="route--placeholder" category=PAGE_CAT_PLACEHOLDER>
                    <div class="placeholder">
                        "No page for "
                        <code>{key_owned}</code>
                    </div>
                </PageFrame>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_round_trip() {
        let key = detail_tab_key(EntityKind::Receipt, "15");
        assert_eq!(key, "receipt_detail_15");
        assert_eq!(
            parse_detail_tab_key(&key),
            Some((EntityKind::Receipt, "15".to_string()))
        );
        assert_eq!(parse_detail_tab_key("receipt_detail_"), None);
        assert_eq!(parse_detail_tab_key("invoice_detail_3"), None);
    }

    #[test]
    fn test_entity_routes_open_detail_tabs() {
        assert_eq!(route_to_tab_key("/deals/42"), "deal_detail_42");
        assert_eq!(route_to_tab_key("/enquiry/7?tab=notes"), "lead_detail_7");
        assert_eq!(route_to_tab_key("bills/B%2F1/"), "bill_detail_B/1");
    }

    #[test]
    fn test_other_routes_are_kept() {
        assert_eq!(route_to_tab_key("/bills/new?purchase=3"), "/bills/new?purchase=3");
        assert_eq!(route_to_tab_key("/receipt/15/print"), "/receipt/15/print");
        assert_eq!(route_to_tab_key("/reports/7"), "/reports/7");
    }

    #[test]
    fn test_titles() {
        assert_eq!(tab_title_for_key("purchase_detail_3"), "Purchase Order 3");
        assert_eq!(tab_title_for_key("/receipt/15/print"), "/receipt/15/print");
    }
}

//! PageFrame — standard root wrapper for every page rendered inside a tab.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"deal--detail"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// Entity card opened from a list or an action route
pub const PAGE_CAT_DETAIL: &str = "detail";
/// Route without a dedicated page
pub const PAGE_CAT_PLACEHOLDER: &str = "placeholder";

/// Root wrapper that sets standard metadata on every tab page.
///
/// - `detail`      → `page page--detail`
/// - `placeholder` → `page page--placeholder`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_PLACEHOLDER => "page page--placeholder",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

pub mod center;
pub mod global_context;
pub mod tabs;

use crate::shared::notifications::NotificationHost;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  tab strip                               |
/// +------------------------------------------+
/// |  active tab content                      |
/// +------------------------------------------+
/// ```
/// Notifications float above everything.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-main">
                <center::Center />
            </div>
            <NotificationHost />
        </div>
    }
}

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let tabs_store = AppGlobalContext::new();
    provide_context(tabs_store);

    // Toasts raised by entity actions and detail pages
    provide_context(NotificationService::new());

    // Runs once: restores the active tab and mirrors it into the URL.
    tabs_store.init_router_integration();

    view! {
        <Shell />
    }
}

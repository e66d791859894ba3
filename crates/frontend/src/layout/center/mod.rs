pub mod tab;

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::prelude::*;
use tab::Tab;

/// Полоса табов и контент открытых табов
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_app_context();

    view! {
        <div class="tabs">
            <div class="tabs__strip">
                <For
                    each=move || tabs_store.opened.get()
                    // title is part of the key so a renamed tab re-renders its header
                    key=|tab| (tab.key.clone(), tab.title.clone())
                    children=move |tab: TabData| view! { <Tab tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                    <div class="placeholder">"No open tabs"</div>
                </Show>
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}

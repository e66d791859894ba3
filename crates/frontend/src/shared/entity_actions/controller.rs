//! Leptos binding of the dispatcher.
//!
//! `LeptosHost` turns dispatcher side effects into toasts, tab changes and a
//! refresh tick; `ActionController` owns one dispatcher per detail page and
//! spawns its calls on the browser event loop.

use super::dispatcher::{ActionDispatcher, DispatchHost, DispatchOutcome};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::HttpGateway;
use crate::shared::notifications::{NotificationLevel, NotificationService};
use contracts::enums::{DeletableEntity, StatusEntity};
use contracts::shared::entity_actions::{Action, ExtraButton};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

#[derive(Clone)]
pub struct LeptosHost {
    notifications: NotificationService,
    tabs: AppGlobalContext,
    /// Tab that hosts the entity; closed on leave
    tab_key: Option<String>,
    /// Bumped on refresh; the page re-fetches when it changes
    refresh_tick: RwSignal<u64>,
}

impl LeptosHost {
    pub fn new(
        notifications: NotificationService,
        tabs: AppGlobalContext,
        tab_key: Option<String>,
        refresh_tick: RwSignal<u64>,
    ) -> Self {
        Self {
            notifications,
            tabs,
            tab_key,
            refresh_tick,
        }
    }
}

impl DispatchHost for LeptosHost {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.notifications.push(level, message);
    }

    fn refresh(&self) {
        // The tick may already be disposed after a delete closed the tab
        let _ = self.refresh_tick.try_update(|tick| *tick += 1);
    }

    fn navigate(&self, route: &str) {
        self.tabs.open_route(route);
    }

    fn leave(&self) {
        if let Some(key) = &self.tab_key {
            self.tabs.close_tab(key);
        }
    }
}

pub type UiDispatcher = ActionDispatcher<HttpGateway, LeptosHost>;

/// One per detail page; shared by its status controls and delete button
#[derive(Clone)]
pub struct ActionController {
    dispatcher: Arc<UiDispatcher>,
    busy: RwSignal<bool>,
}

impl ActionController {
    /// Must be called inside the owning component: the dispatcher lifetime
    /// ends when that component is cleaned up.
    pub fn new(host: LeptosHost) -> Self {
        let dispatcher = Arc::new(ActionDispatcher::new(HttpGateway::default(), host));
        let lifetime = dispatcher.lifetime().clone();
        on_cleanup(move || lifetime.end());

        Self {
            dispatcher,
            busy: RwSignal::new(false),
        }
    }

    pub fn busy(&self) -> Signal<bool> {
        self.busy.into()
    }

    pub fn run_action(&self, entity: StatusEntity, id: String, action: Action) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let busy = self.busy;
        busy.set(true);
        spawn_local(async move {
            let outcome = dispatcher.dispatch_action(entity, &id, &action).await;
            settle(&dispatcher, busy, &id, &outcome);
        });
    }

    pub fn run_extra(&self, id: String, button: ExtraButton) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let busy = self.busy;
        busy.set(true);
        spawn_local(async move {
            let outcome = dispatcher.dispatch_extra(&id, &button).await;
            settle(&dispatcher, busy, &id, &outcome);
        });
    }

    pub fn run_delete(
        &self,
        entity: DeletableEntity,
        id: String,
        on_done: impl FnOnce(DispatchOutcome) + 'static,
    ) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let busy = self.busy;
        busy.set(true);
        spawn_local(async move {
            let outcome = dispatcher.dispatch_delete(entity, &id).await;
            settle(&dispatcher, busy, &id, &outcome);
            if outcome != DispatchOutcome::Abandoned {
                on_done(outcome);
            }
        });
    }
}

/// Controls stay disabled while another call for the same id still runs
fn settle(dispatcher: &UiDispatcher, busy: RwSignal<bool>, id: &str, outcome: &DispatchOutcome) {
    if let Some(still_busy) = dispatcher.busy_after(id, outcome) {
        let _ = busy.try_set(still_busy);
    }
}

//! Status/stage dispatcher
//!
//! Resolves a click on a transition, an extra button or a confirmed delete
//! through the registries, performs the single backend call and reports the
//! result through a `DispatchHost` (notifications, refresh, navigation).
//! Nothing is updated optimistically: success asks the host to re-fetch.

use super::error::DispatchError;
use super::extra::ExtraAction;
use super::{delete, registry};
use crate::shared::api_utils::ApiGateway;
use crate::shared::notifications::NotificationLevel;
use contracts::enums::{DeletableEntity, MutationMode, StatusEntity};
use contracts::shared::entity_actions::{Action, ExtraButton, MutationPayload};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const STATUS_UPDATED: &str = "Status updated successfully";
pub const STAGE_UPDATED: &str = "Stage updated successfully";
pub const ACTION_COMPLETED: &str = "Action completed successfully";
pub const DELETED: &str = "Deleted successfully";

/// Side effects the dispatcher asks of its surroundings
pub trait DispatchHost {
    fn notify(&self, level: NotificationLevel, message: &str);
    /// Re-fetch the current view
    fn refresh(&self);
    fn navigate(&self, route: &str);
    /// Leave the current view (after a delete)
    fn leave(&self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Navigated(String),
    Completed,
    Failed(String),
    /// Extra button with neither a handler nor a route
    Warned,
    /// Another mutation of the same entity is still running
    Busy,
    /// The owning view went away before the response arrived
    Abandoned,
}

/// Entity ids with a mutation in flight
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    ids: Arc<Mutex<HashSet<String>>>,
}

impl InFlight {
    pub fn try_acquire(&self, id: &str) -> Option<InFlightToken> {
        let mut ids = self.ids.lock().unwrap_or_else(|e| e.into_inner());
        if !ids.insert(id.to_string()) {
            return None;
        }
        Some(InFlightToken {
            ids: Arc::clone(&self.ids),
            id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(id)
    }
}

/// Released on drop
#[derive(Debug)]
pub struct InFlightToken {
    ids: Arc<Mutex<HashSet<String>>>,
    id: String,
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.id);
    }
}

/// Alive until the owning component is disposed
#[derive(Debug, Clone)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Deals send the stage ordinal, everything else the status key
pub fn payload_for(entity: StatusEntity, action: &Action) -> MutationPayload {
    match entity.mutation_mode() {
        MutationMode::Stage => MutationPayload::order(action.order),
        MutationMode::Status => MutationPayload::status(action.key.clone()),
    }
}

pub struct ActionDispatcher<G, H> {
    gateway: G,
    host: H,
    in_flight: InFlight,
    lifetime: Lifetime,
}

impl<G: ApiGateway, H: DispatchHost> ActionDispatcher<G, H> {
    pub fn new(gateway: G, host: H) -> Self {
        Self {
            gateway,
            host,
            in_flight: InFlight::default(),
            lifetime: Lifetime::new(),
        }
    }

    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }

    /// Whether the controls of `id` stay disabled once `outcome` is known.
    /// `None` when the owning view is gone and nothing should be touched.
    pub fn busy_after(&self, id: &str, outcome: &DispatchOutcome) -> Option<bool> {
        match outcome {
            DispatchOutcome::Abandoned => None,
            _ => Some(self.is_busy(id)),
        }
    }

    /// Click on a transition
    pub async fn dispatch_action(
        &self,
        entity: StatusEntity,
        id: &str,
        action: &Action,
    ) -> DispatchOutcome {
        if let Some(route) = &action.route {
            self.host.navigate(route);
            return DispatchOutcome::Navigated(route.clone());
        }

        let Some(_token) = self.in_flight.try_acquire(id) else {
            log::debug!("{} {}: mutation already in flight", entity, id);
            return DispatchOutcome::Busy;
        };

        let payload = payload_for(entity, action);
        let request = match registry::resolve(entity, id, &payload) {
            Ok(request) => request,
            Err(e) => return self.fail(e),
        };

        log::info!(
            "{} {}: {} {} -> '{}'",
            entity,
            id,
            request.method.as_str(),
            request.path,
            action.key
        );
        let result = self.gateway.execute(&request).await;
        if !self.lifetime.is_alive() {
            log::debug!("{} {}: view disposed, response ignored", entity, id);
            return DispatchOutcome::Abandoned;
        }

        match result {
            Ok(response) => {
                let fallback = match entity.mutation_mode() {
                    MutationMode::Stage => STAGE_UPDATED,
                    MutationMode::Status => STATUS_UPDATED,
                };
                let message = response.message().unwrap_or(fallback);
                self.host.notify(NotificationLevel::Success, message);
                self.host.refresh();
                DispatchOutcome::Completed
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Click on an extra button of the active action
    pub async fn dispatch_extra(&self, id: &str, button: &ExtraButton) -> DispatchOutcome {
        let Some(extra) = ExtraAction::from_key(&button.key) else {
            if let Some(route) = &button.route {
                self.host.navigate(route);
                return DispatchOutcome::Navigated(route.clone());
            }
            log::warn!("No handler or route for extra action '{}'", button.key);
            self.host.notify(
                NotificationLevel::Warning,
                &format!("No action defined for \"{}\"", button.label),
            );
            return DispatchOutcome::Warned;
        };

        let Some(_token) = self.in_flight.try_acquire(id) else {
            log::debug!("{}: mutation already in flight", id);
            return DispatchOutcome::Busy;
        };

        log::info!("{}: running extra action {}", id, extra.key());
        let result = extra.run(&self.gateway, id).await;
        if !self.lifetime.is_alive() {
            return DispatchOutcome::Abandoned;
        }

        match result {
            Ok(()) => {
                self.host.notify(NotificationLevel::Success, ACTION_COMPLETED);
                self.host.refresh();
                DispatchOutcome::Completed
            }
            Err(e) => self.fail(e),
        }
    }

    /// Confirmed delete
    pub async fn dispatch_delete(&self, entity: DeletableEntity, id: &str) -> DispatchOutcome {
        let Some(_token) = self.in_flight.try_acquire(id) else {
            return DispatchOutcome::Busy;
        };

        let request = match delete::resolve(entity, id) {
            Ok(request) => request,
            Err(e) => return self.fail(e),
        };

        log::info!("{} {}: delete", entity, id);
        let result = self.gateway.execute(&request).await;
        if !self.lifetime.is_alive() {
            return DispatchOutcome::Abandoned;
        }

        match result {
            Ok(response) => {
                self.host
                    .notify(NotificationLevel::Success, response.message().unwrap_or(DELETED));
                self.host.leave();
                self.host.refresh();
                DispatchOutcome::Completed
            }
            Err(e) => self.fail(e.into()),
        }
    }

    fn fail(&self, error: DispatchError) -> DispatchOutcome {
        log::error!("Entity action failed: {}", error);
        let message = error.user_message();
        self.host.notify(NotificationLevel::Error, &message);
        DispatchOutcome::Failed(message)
    }
}

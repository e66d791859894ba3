use super::controller::ActionController;
use super::dispatcher::DispatchOutcome;
use crate::shared::icons::icon;
use contracts::enums::{DeletableEntity, StatusEntity};
use contracts::shared::entity_actions::{Action, ActionList, Controls, ExtraButton};
use leptos::prelude::*;
use thaw::*;

/// Status/stage controls of one entity.
///
/// Shows the extra buttons of the active action when it has any, otherwise
/// the whole transition list with the current state highlighted.
/// `locked` keeps the controls disabled while the list itself is reloading.
#[component]
pub fn StatusActions(
    entity: StatusEntity,
    #[prop(into)] id: String,
    actions: ActionList,
    controller: ActionController,
    locked: Signal<bool>,
) -> impl IntoView {
    if actions.active_count() > 1 {
        log::warn!(
            "{} {}: {} active actions received, using the first",
            entity,
            id,
            actions.active_count()
        );
    }

    let controller_busy = controller.busy();
    let busy = Signal::derive(move || controller_busy.get() || locked.get());
    let buttons = match actions.controls() {
        Controls::Extras(extras) => extras
            .iter()
            .cloned()
            .map(|button| extra_button(&controller, &id, button, busy))
            .collect_view()
            .into_any(),
        Controls::Transitions(transitions) => transitions
            .iter()
            .cloned()
            .map(|action| transition_button(&controller, entity, &id, action, busy))
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="entity-actions" data-entity=entity.code()>
            {buttons}
        </div>
    }
}

fn transition_button(
    controller: &ActionController,
    entity: StatusEntity,
    id: &str,
    action: Action,
    busy: Signal<bool>,
) -> impl IntoView {
    let appearance = if action.active {
        ButtonAppearance::Primary
    } else {
        ButtonAppearance::Secondary
    };
    let label = action.label.clone();
    let controller = controller.clone();
    let id = id.to_string();

    view! {
        <Button
            appearance=appearance
            disabled=busy
            on_click=move |_| controller.run_action(entity, id.clone(), action.clone())
            attr:class="entity-actions__transition"
        >
            {label}
        </Button>
    }
}

fn extra_button(
    controller: &ActionController,
    id: &str,
    button: ExtraButton,
    busy: Signal<bool>,
) -> impl IntoView {
    let label = button.label.clone();
    let controller = controller.clone();
    let id = id.to_string();

    view! {
        <Button
            appearance=ButtonAppearance::Primary
            disabled=busy
            on_click=move |_| controller.run_extra(id.clone(), button.clone())
            attr:class="entity-actions__extra"
        >
            {label}
        </Button>
    }
}

/// Delete with confirmation. The dialog closes only after a successful delete.
#[component]
pub fn DeleteButton(
    entity: DeletableEntity,
    #[prop(into)] id: String,
    controller: ActionController,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let busy = controller.busy();
    let kind_name = entity.kind().display_name();

    let on_confirm = move |_| {
        controller.run_delete(entity, id.clone(), move |outcome| {
            if outcome == DispatchOutcome::Completed {
                let _ = open.try_set(false);
            }
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Subtle
            disabled=busy
            on_click=move |_| open.set(true)
            attr:class="entity-actions__delete"
        >
            {icon("delete")}
            "Delete"
        </Button>

        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{format!("Delete {}", kind_name)}</DialogTitle>
                    <DialogContent>
                        "This cannot be undone. Delete this record?"
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=on_confirm
                        >
                            "Delete"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

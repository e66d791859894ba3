use super::api::{fetch_detail, is_current};
use crate::layout::global_context::use_app_context;
use crate::shared::api_utils::HttpGateway;
use crate::shared::entity_actions::{ActionController, DeleteButton, LeptosHost, StatusActions};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::enums::EntityKind;
use contracts::shared::entity_detail::EntityDetail;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Карточка сущности любого вида.
///
/// Загружает `GET {collection}/{id}`, показывает действия статуса (если вид
/// их поддерживает), кнопку удаления и остальные поля. Успешное действие
/// перезагружает карточку, успешное удаление закрывает таб.
#[component]
pub fn EntityDetailPage(
    kind: EntityKind,
    id: String,
    tab_key: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let tabs = use_app_context();
    let notifications = use_notifications();

    let (detail, set_detail) = signal::<Option<EntityDetail>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let refresh_tick = RwSignal::new(0u64);

    let controller = ActionController::new(LeptosHost::new(
        notifications,
        tabs,
        Some(tab_key.clone()),
        refresh_tick,
    ));

    let id_for_effect = id.clone();
    let key_for_title = tab_key.clone();
    Effect::new(move |_| {
        let started = refresh_tick.get();

        let id = id_for_effect.clone();
        let tab_key = key_for_title.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = set_loading.try_set(true);
            let _ = set_error.try_set(None);

            let result = fetch_detail(&HttpGateway::default(), kind, &id).await;
            if !is_current(started, refresh_tick.try_get_untracked()) {
                log!("Dropped superseded load of {} {}", kind, id);
                return;
            }

            match result {
                Ok(data) => {
                    log!("Loaded {} {} ({} actions)", kind, id, data.actions.iter().count());
                    tabs.update_tab_title(
                        &tab_key,
                        &format!("{} {}", kind.display_name(), data.display_title()),
                    );
                    let _ = set_detail.try_set(Some(data));
                }
                Err(e) => {
                    log::error!("Failed to load {} {}: {}", kind, id, e);
                    let message = e
                        .backend_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string());
                    let _ = set_error.try_set(Some(message));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let id_for_title = id.clone();
    let title = move || {
        detail.with(|d| {
            d.as_ref()
                .map(|d| d.display_title())
                .unwrap_or_else(|| id_for_title.clone())
        })
    };

    let status_badge = move || {
        detail
            .with(|d| d.as_ref().and_then(|d| d.status.clone()))
            .filter(|s| !s.trim().is_empty())
            .map(|s| view! { <span class="badge badge--status">{s}</span> })
    };

    let delete_button = kind.as_deletable().map(|entity| {
        view! { <DeleteButton entity=entity id=id.clone() controller=controller.clone() /> }
    });

    let id_for_actions = id.clone();
    let controller_for_actions = controller.clone();
    let content = move || {
        if let Some(message) = error.get() {
            return view! {
                <div class="error-block">
                    <strong>"Error: "</strong>
                    {message}
                </div>
            }
            .into_any();
        }

        match detail.get() {
            None if loading.get() => view! { <Spinner /> }.into_any(),
            None => view! { <div class="placeholder">"No data"</div> }.into_any(),
            Some(data) => {
                let actions = kind.as_status_entity().map(|entity| {
                    view! {
                        <StatusActions
                            entity=entity
                            id=id_for_actions.clone()
                            actions=data.actions.clone()
                            controller=controller_for_actions.clone()
                            locked=Signal::derive(move || loading.get())
                        />
                    }
                });
                let fields = data
                    .scalar_fields()
                    .into_iter()
                    .map(|(key, value)| {
                        view! {
                            <div class="detail-field">
                                <span class="detail-field__label">{key}</span>
                                <span class="detail-field__value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view();

                view! {
                    {actions}
                    <div class="detail-fields">{fields}</div>
                }
                .into_any()
            }
        }
    };

    view! {
        <PageFrame page_id=format!("{}--detail", kind.code()) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{kind.display_name()} " " {title}</h2>
                    {status_badge}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| refresh_tick.update(|tick| *tick += 1)
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                    {delete_button}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("close")}
                        "Close"
                    </Button>
                </div>
            </div>
            <div class="page__content">{content}</div>
        </PageFrame>
    }
}

use crate::config::config;
use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
}

impl NotificationLevel {
    fn modifier(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "notification--success",
            NotificationLevel::Error => "notification--error",
            NotificationLevel::Warning => "notification--warning",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "⚠",
            NotificationLevel::Warning => "!",
        }
    }
}

/// Всплывающее уведомление
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Время появления, для подсказки над тостом
    pub fn timestamp_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// Append and drop the oldest entries beyond `max_visible`
fn push_bounded(list: &mut Vec<Notification>, notification: Notification, max_visible: usize) {
    list.push(notification);
    let max_visible = max_visible.max(1);
    if list.len() > max_visible {
        let overflow = list.len() - max_visible;
        list.drain(..overflow);
    }
}

/// Сервис уведомлений (toast-стек в правом верхнем углу)
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, level: NotificationLevel, message: impl Into<String>) -> Uuid {
        let notification = Notification::new(level, message);
        let id = notification.id;
        let settings = &config().notifications;

        self.items
            .update(|list| push_bounded(list, notification, settings.max_visible));

        if settings.timeout_ms > 0 {
            let svc = *self;
            let timeout = settings.timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout).await;
                svc.dismiss(id);
            });
        }
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|list| list.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Рендерит стек уведомлений
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || notifications.items()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div
                            class=format!("notification {}", n.level.modifier())
                            role="status"
                            title=n.timestamp_label()
                        >
                            <span class="notification__icon">{n.level.icon()}</span>
                            <span class="notification__message">{n.message.clone()}</span>
                            <button
                                class="notification__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_push_bounded_drops_oldest() {
        let mut list = Vec::new();
        for i in 0..4 {
            push_bounded(
                &mut list,
                Notification::new(NotificationLevel::Success, format!("n{}", i)),
                3,
            );
        }
        let messages: Vec<&str> = list.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["n1", "n2", "n3"]);
    }

    #[test]
    fn test_timestamp_label() {
        let mut notification = Notification::new(NotificationLevel::Warning, "late");
        notification.created_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 5, 7).unwrap();
        assert_eq!(notification.timestamp_label(), "2026-03-01 09:05:07 UTC");
    }

    #[test]
    fn test_zero_max_still_keeps_latest() {
        let mut list = Vec::new();
        push_bounded(&mut list, Notification::new(NotificationLevel::Error, "a"), 0);
        push_bounded(&mut list, Notification::new(NotificationLevel::Error, "b"), 0);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].message, "b");
    }
}

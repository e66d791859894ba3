use serde::{Deserialize, Serialize};

/// Дополнительная кнопка, доступная в текущем состоянии сущности
/// (например «Validate» у поступления в статусе draft)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraButton {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

/// Описание одного доступного перехода, приходит с бэкенда в карточке сущности
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawAction")]
pub struct Action {
    /// Целевое состояние или операция
    pub key: String,

    /// Текст кнопки
    pub label: String,

    /// Порядковый номер стадии (только для сделок)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Текущее состояние сущности
    pub active: bool,

    /// Чистая навигация, без вызова бэкенда
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(rename = "extraButtons", skip_serializing_if = "Vec::is_empty")]
    pub extra_buttons: Vec<ExtraButton>,
}

/// Форма, в которой бэкенд присылает действие: кнопки бывают
/// как `extraButton` (одна), так и `extraButtons` (список)
#[derive(Deserialize)]
struct RawAction {
    key: String,
    label: String,
    #[serde(default)]
    order: Option<i64>,
    #[serde(default)]
    active: Option<bool>,
    #[serde(default)]
    route: Option<String>,
    #[serde(default, rename = "extraButton")]
    extra_button: Option<ExtraButton>,
    #[serde(default, rename = "extraButtons")]
    extra_buttons: Option<Vec<ExtraButton>>,
}

impl From<RawAction> for Action {
    fn from(raw: RawAction) -> Self {
        let extra_buttons = match (raw.extra_buttons, raw.extra_button) {
            (Some(list), _) if !list.is_empty() => list,
            (_, Some(single)) => vec![single],
            _ => Vec::new(),
        };

        Self {
            key: raw.key,
            label: raw.label,
            order: raw.order,
            active: raw.active.unwrap_or(false),
            route: raw.route,
            extra_buttons,
        }
    }
}

impl Action {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn with_extra_button(mut self, button: ExtraButton) -> Self {
        self.extra_buttons.push(button);
        self
    }
}

/// Набор элементов управления, которые нужно показать
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Controls<'a> {
    /// Кнопки текущего состояния (вместо списка переходов)
    Extras(&'a [ExtraButton]),
    /// Полный список переходов
    Transitions(&'a [Action]),
}

/// Список действий одной сущности
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionList(pub Vec<Action>);

impl ActionList {
    pub fn new(actions: Vec<Action>) -> Self {
        Self(actions)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Текущее состояние. Бэкенд помечает не больше одного действия,
    /// при нарушении берётся первое.
    pub fn active(&self) -> Option<&Action> {
        self.0.iter().find(|action| action.active)
    }

    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|action| action.active).count()
    }

    /// Кнопки текущего состояния заменяют список переходов, а не дополняют его
    pub fn controls(&self) -> Controls<'_> {
        match self.active() {
            Some(active) if !active.extra_buttons.is_empty() => {
                Controls::Extras(&active.extra_buttons)
            }
            _ => Controls::Transitions(&self.0),
        }
    }
}

impl From<Vec<Action>> for ActionList {
    fn from(actions: Vec<Action>) -> Self {
        Self(actions)
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate_button() -> ExtraButton {
        ExtraButton {
            key: "RECEIPT_VALIDATE".to_string(),
            label: "Validate".to_string(),
            route: None,
        }
    }

    #[test]
    fn test_singular_extra_button_is_normalized() {
        let action: Action = serde_json::from_value(json!({
            "key": "draft",
            "label": "Draft",
            "active": true,
            "extraButton": { "key": "RECEIPT_VALIDATE", "label": "Validate" }
        }))
        .unwrap();

        assert_eq!(action.extra_buttons, vec![validate_button()]);
    }

    #[test]
    fn test_plural_extra_buttons_win_over_singular() {
        let action: Action = serde_json::from_value(json!({
            "key": "draft",
            "label": "Draft",
            "extraButton": { "key": "IGNORED", "label": "Ignored" },
            "extraButtons": [
                { "key": "RECEIPT_VALIDATE", "label": "Validate" },
                { "key": "print", "label": "Print", "route": "/receipt/7/print" }
            ]
        }))
        .unwrap();

        let keys: Vec<&str> = action.extra_buttons.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["RECEIPT_VALIDATE", "print"]);
    }

    #[test]
    fn test_optional_fields_default() {
        let action: Action =
            serde_json::from_value(json!({ "key": "contacted", "label": "Mark Contacted" }))
                .unwrap();

        assert!(!action.active);
        assert_eq!(action.order, None);
        assert_eq!(action.route, None);
        assert!(action.extra_buttons.is_empty());
    }

    #[test]
    fn test_serialization_emits_plural_list_only() {
        let action = Action::new("draft", "Draft")
            .activated()
            .with_extra_button(validate_button());
        let value = serde_json::to_value(&action).unwrap();

        assert!(value.get("extraButton").is_none());
        assert_eq!(value["extraButtons"][0]["key"], "RECEIPT_VALIDATE");
        assert!(value.get("route").is_none());
    }

    #[test]
    fn test_active_extras_replace_transitions() {
        let list = ActionList::new(vec![
            Action::new("draft", "Draft")
                .activated()
                .with_extra_button(validate_button()),
            Action::new("done", "Done"),
        ]);

        assert_eq!(list.controls(), Controls::Extras(&[validate_button()]));
    }

    #[test]
    fn test_transitions_shown_without_active_extras() {
        let list = ActionList::new(vec![
            Action::new("new", "New").activated(),
            Action::new("contacted", "Mark Contacted"),
        ]);

        match list.controls() {
            Controls::Transitions(actions) => assert_eq!(actions.len(), 2),
            other => panic!("expected transitions, got {:?}", other),
        }

        let no_active = ActionList::new(vec![Action::new("new", "New")
            .with_extra_button(validate_button())]);
        assert!(matches!(no_active.controls(), Controls::Transitions(_)));
    }

    #[test]
    fn test_controls_are_stable_across_renders() {
        let list = ActionList::new(vec![
            Action::new("draft", "Draft")
                .activated()
                .with_extra_button(validate_button()),
            Action::new("done", "Done"),
        ]);

        assert_eq!(list.controls(), list.controls());
    }

    #[test]
    fn test_first_active_wins() {
        let list = ActionList::new(vec![
            Action::new("a", "A"),
            Action::new("b", "B").activated(),
            Action::new("c", "C").activated(),
        ]);

        assert_eq!(list.active().map(|a| a.key.as_str()), Some("b"));
        assert_eq!(list.active_count(), 2);
    }
}

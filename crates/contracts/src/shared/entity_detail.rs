use crate::shared::entity_actions::ActionList;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Карточка сущности, как её отдаёт бэкенд.
///
/// Список действий приходит вместе с карточкой при каждой загрузке и
/// нигде не кэшируется. Остальные поля сущности попадают в `fields`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityDetail {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub actions: ActionList,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl EntityDetail {
    /// Заголовок для таба: `title`, затем `name`, затем `number`, иначе id
    pub fn display_title(&self) -> String {
        let from_fields = |key: &str| self.fields.get(key).and_then(Value::as_str);
        self.title
            .as_deref()
            .into_iter()
            .chain(from_fields("name"))
            .chain(from_fields("number"))
            .find(|t| !t.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.id.clone())
    }

    /// Скалярные поля для отображения в виде «ключ: значение»
    pub fn scalar_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = self
            .fields
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((key.clone(), text))
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }
}

/// Бэкенд отдаёт id то строкой, то числом
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid id: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_with_numeric_id_and_extra_fields() {
        let detail: EntityDetail = serde_json::from_value(json!({
            "id": 42,
            "name": "ACME renewal",
            "status": "open",
            "amount": 1200.5,
            "closed": false,
            "owner": { "id": 1 },
            "actions": [
                { "key": "qualify", "label": "Qualify", "order": 1, "active": true },
                { "key": "won", "label": "Won", "order": 2 }
            ]
        }))
        .unwrap();

        assert_eq!(detail.id, "42");
        assert_eq!(detail.display_title(), "ACME renewal");
        assert_eq!(detail.actions.iter().count(), 2);
        assert_eq!(
            detail.scalar_fields(),
            vec![
                ("amount".to_string(), "1200.5".to_string()),
                ("closed".to_string(), "false".to_string()),
                ("name".to_string(), "ACME renewal".to_string()),
            ]
        );
    }

    #[test]
    fn test_name_and_number_together_parse() {
        let detail: EntityDetail = serde_json::from_value(json!({
            "id": 3,
            "name": "Office chairs",
            "number": "PO-0003",
            "status": "draft"
        }))
        .unwrap();

        assert_eq!(detail.title, None);
        assert_eq!(detail.display_title(), "Office chairs");
        assert_eq!(detail.fields.get("number"), Some(&json!("PO-0003")));
    }

    #[test]
    fn test_title_wins_over_name() {
        let detail: EntityDetail = serde_json::from_value(json!({
            "id": 3,
            "title": "Renewal",
            "name": "ACME"
        }))
        .unwrap();
        assert_eq!(detail.display_title(), "Renewal");
    }

    #[test]
    fn test_blank_name_falls_back_to_number() {
        let detail: EntityDetail = serde_json::from_value(json!({
            "id": 15,
            "name": " ",
            "number": "WH/IN/00015"
        }))
        .unwrap();
        assert_eq!(detail.display_title(), "WH/IN/00015");
    }

    #[test]
    fn test_missing_actions_default_to_empty() {
        let detail: EntityDetail = serde_json::from_value(json!({ "id": "v-1" })).unwrap();
        assert!(detail.actions.is_empty());
        assert_eq!(detail.display_title(), "v-1");
    }
}

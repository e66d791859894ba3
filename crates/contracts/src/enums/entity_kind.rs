use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Код сущности, не входящий в закрытый перечень
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported entity kind: {0}")]
pub struct UnknownEntityKind(pub String);

/// Бизнес-объекты ERP, у которых есть карточка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Deal,
    Lead,
    Quotation,
    Purchase,
    Receipt,
    Delivery,
    Bill,
    Vendor,
    Product,
}

impl EntityKind {
    /// Код сущности (используется в ключах табов и маршрутах)
    pub fn code(&self) -> &'static str {
        match self {
            EntityKind::Deal => "deal",
            EntityKind::Lead => "lead",
            EntityKind::Quotation => "quotation",
            EntityKind::Purchase => "purchase",
            EntityKind::Receipt => "receipt",
            EntityKind::Delivery => "delivery",
            EntityKind::Bill => "bill",
            EntityKind::Vendor => "vendor",
            EntityKind::Product => "product",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Deal => "Deal",
            EntityKind::Lead => "Lead",
            EntityKind::Quotation => "Quotation",
            EntityKind::Purchase => "Purchase Order",
            EntityKind::Receipt => "Receipt",
            EntityKind::Delivery => "Delivery",
            EntityKind::Bill => "Bill",
            EntityKind::Vendor => "Vendor",
            EntityKind::Product => "Product",
        }
    }

    /// Корень REST-коллекции на бэкенде.
    ///
    /// Пути исторически неоднородны (`/enquiry` для лидов, единственное
    /// число у receipt и delivery) и повторяют API как есть.
    pub fn collection_path(&self) -> &'static str {
        match self {
            EntityKind::Deal => "/deals",
            EntityKind::Lead => "/enquiry",
            EntityKind::Quotation => "/quotations",
            EntityKind::Purchase => "/purchases",
            EntityKind::Receipt => "/receipt",
            EntityKind::Delivery => "/delivery",
            EntityKind::Bill => "/bills",
            EntityKind::Vendor => "/vendors",
            EntityKind::Product => "/products",
        }
    }

    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Deal,
            EntityKind::Lead,
            EntityKind::Quotation,
            EntityKind::Purchase,
            EntityKind::Receipt,
            EntityKind::Delivery,
            EntityKind::Bill,
            EntityKind::Vendor,
            EntityKind::Product,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.code() == code)
    }

    /// Найти сущность по корню коллекции (`/deals` -> Deal)
    pub fn from_collection_path(path: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|kind| kind.collection_path() == path)
    }

    /// Сущность со статусом или стадией, если она есть у этого вида
    pub fn as_status_entity(&self) -> Option<StatusEntity> {
        match self {
            EntityKind::Deal => Some(StatusEntity::Deal),
            EntityKind::Lead => Some(StatusEntity::Lead),
            EntityKind::Quotation => Some(StatusEntity::Quotation),
            EntityKind::Purchase => Some(StatusEntity::Purchase),
            EntityKind::Receipt => Some(StatusEntity::Receipt),
            EntityKind::Delivery => Some(StatusEntity::Delivery),
            EntityKind::Bill => Some(StatusEntity::Bill),
            EntityKind::Vendor | EntityKind::Product => None,
        }
    }

    /// Удаляемая сущность, если бэкенд поддерживает удаление этого вида
    pub fn as_deletable(&self) -> Option<DeletableEntity> {
        match self {
            EntityKind::Deal => Some(DeletableEntity::Deal),
            EntityKind::Lead => Some(DeletableEntity::Lead),
            EntityKind::Quotation => Some(DeletableEntity::Quotation),
            EntityKind::Purchase => Some(DeletableEntity::Purchase),
            EntityKind::Receipt => Some(DeletableEntity::Receipt),
            EntityKind::Bill => Some(DeletableEntity::Bill),
            EntityKind::Vendor => Some(DeletableEntity::Vendor),
            EntityKind::Product => Some(DeletableEntity::Product),
            EntityKind::Delivery => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

/// Как бэкенд принимает смену состояния
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationMode {
    /// Порядковый номер стадии воронки (`{order}`)
    Stage,
    /// Именованный статус (`{status}`)
    Status,
}

/// Сущности, у которых есть статус или стадия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusEntity {
    Deal,
    Lead,
    Quotation,
    Purchase,
    Receipt,
    Delivery,
    Bill,
}

impl StatusEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            StatusEntity::Deal => EntityKind::Deal,
            StatusEntity::Lead => EntityKind::Lead,
            StatusEntity::Quotation => EntityKind::Quotation,
            StatusEntity::Purchase => EntityKind::Purchase,
            StatusEntity::Receipt => EntityKind::Receipt,
            StatusEntity::Delivery => EntityKind::Delivery,
            StatusEntity::Bill => EntityKind::Bill,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Сделки двигаются по стадиям, остальные сущности по статусам
    pub fn mutation_mode(&self) -> MutationMode {
        match self {
            StatusEntity::Deal => MutationMode::Stage,
            _ => MutationMode::Status,
        }
    }

    pub fn all() -> Vec<StatusEntity> {
        vec![
            StatusEntity::Deal,
            StatusEntity::Lead,
            StatusEntity::Quotation,
            StatusEntity::Purchase,
            StatusEntity::Receipt,
            StatusEntity::Delivery,
            StatusEntity::Bill,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        EntityKind::from_code(code).and_then(|kind| kind.as_status_entity())
    }
}

impl fmt::Display for StatusEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StatusEntity {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

/// Сущности, которые можно удалить
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletableEntity {
    Deal,
    Lead,
    Quotation,
    Purchase,
    Receipt,
    Bill,
    Vendor,
    Product,
}

impl DeletableEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            DeletableEntity::Deal => EntityKind::Deal,
            DeletableEntity::Lead => EntityKind::Lead,
            DeletableEntity::Quotation => EntityKind::Quotation,
            DeletableEntity::Purchase => EntityKind::Purchase,
            DeletableEntity::Receipt => EntityKind::Receipt,
            DeletableEntity::Bill => EntityKind::Bill,
            DeletableEntity::Vendor => EntityKind::Vendor,
            DeletableEntity::Product => EntityKind::Product,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        EntityKind::from_code(code).and_then(|kind| kind.as_deletable())
    }
}

impl fmt::Display for DeletableEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DeletableEntity {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in EntityKind::all() {
            assert_eq!(EntityKind::from_code(kind.code()), Some(kind));
            assert_eq!(
                EntityKind::from_collection_path(kind.collection_path()),
                Some(kind)
            );
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "invoice".parse::<EntityKind>().unwrap_err();
        assert_eq!(err, UnknownEntityKind("invoice".to_string()));
        assert_eq!(err.to_string(), "Unsupported entity kind: invoice");
    }

    #[test]
    fn test_capability_projections_match_backend_coverage() {
        assert!(EntityKind::Delivery.as_status_entity().is_some());
        assert!(EntityKind::Delivery.as_deletable().is_none());
        assert!(EntityKind::Vendor.as_status_entity().is_none());
        assert!(EntityKind::Product.as_deletable().is_some());

        assert!("vendor".parse::<StatusEntity>().is_err());
        assert!("delivery".parse::<DeletableEntity>().is_err());
        assert_eq!("bill".parse::<StatusEntity>(), Ok(StatusEntity::Bill));
    }

    #[test]
    fn test_only_deals_use_stages() {
        for entity in StatusEntity::all() {
            let expected = if entity == StatusEntity::Deal {
                MutationMode::Stage
            } else {
                MutationMode::Status
            };
            assert_eq!(entity.mutation_mode(), expected);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&EntityKind::Quotation).unwrap();
        assert_eq!(json, "\"quotation\"");
        let parsed: StatusEntity = serde_json::from_str("\"receipt\"").unwrap();
        assert_eq!(parsed, StatusEntity::Receipt);
    }
}

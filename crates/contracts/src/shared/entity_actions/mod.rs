//! Действия над сущностями: описание переходов, которое присылает бэкенд,
//! и тела запросов на смену статуса/стадии и удаление.

pub mod action;
pub mod payload;

pub use action::{Action, ActionList, Controls, ExtraButton};
pub use payload::{DeleteIdsRequest, MutationPayload};

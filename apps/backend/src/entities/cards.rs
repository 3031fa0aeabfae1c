use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One stored card. Created at provisioning time, flipped to `used` when
/// drawn into active play, never otherwise mutated; purged in bulk when an
/// event is re-provisioned.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    /// `{event}_F{sheet}C{position}`
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub event: String,
    pub sheet: i32,
    pub position: i32,
    /// Serialized grid JSON (FREE sentinel included)
    pub grid: String,
    pub round: i32,
    pub prize: String,
    pub used: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for the page_view_events table
//!
//! One row per tracked page view. Rows are appended by the event recorder
//! and bulk-deleted by the archival compactor once folded into a summary;
//! they are never individually updated.

use sea_orm::entity::prelude::*;
use clubhouse_core::DBDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "page_view_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub path: String,
    pub session_id: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: DBDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

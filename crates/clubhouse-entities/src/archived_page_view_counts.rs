//! `SeaORM` Entity for the archived_page_view_counts table
//!
//! One row per compaction run. Append-only: rows are created by the
//! archival compactor and never updated or deleted. The sum of `count`
//! across all rows plus the live page_view_events row count equals the
//! all-time number of tracked page views.

use sea_orm::entity::prelude::*;
use clubhouse_core::DBDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "archived_page_view_counts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub count: i64,
    pub archived_at: DBDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

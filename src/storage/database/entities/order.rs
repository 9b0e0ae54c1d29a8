use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted order row
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Store-assigned order id
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Correlation id of the ingestion request
    pub request_id: i64,

    /// Customer name
    pub customer: String,

    /// Ordered quantity
    pub quantity: i64,

    /// Unit price
    #[sea_orm(column_type = "Double")]
    pub price: f64,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

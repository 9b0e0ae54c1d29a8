use crate::core::ingest::{CorrelationId, Order};
use crate::utils::error::{IngestError, Result};
use chrono::Utc;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, order};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert one order and return its generated id
    pub async fn create_order(&self, order: &Order) -> std::result::Result<i64, DbErr> {
        let request_id = order.request_id.map(|id| i64::from(id.get())).unwrap_or_default();
        let created_at = order.created_at.unwrap_or_else(Utc::now);

        let active_model = order::ActiveModel {
            request_id: Set(request_id),
            customer: Set(order.customer.clone()),
            quantity: Set(i64::from(order.quantity)),
            price: Set(order.price),
            created_at: Set(created_at.into()),
            ..Default::default()
        };

        let inserted = entities::Order::insert(active_model).exec(&self.db).await?;
        debug!(
            "Inserted order {} for request {}",
            inserted.last_insert_id, request_id
        );
        Ok(inserted.last_insert_id)
    }

    /// Count orders written under one correlation id
    pub async fn count_orders_by_request(&self, request_id: CorrelationId) -> Result<u64> {
        entities::Order::find()
            .filter(order::Column::RequestId.eq(i64::from(request_id.get())))
            .count(&self.db)
            .await
            .map_err(IngestError::Database)
    }

    /// Orders written under one correlation id, in insertion order
    pub async fn find_orders_by_request(&self, request_id: CorrelationId) -> Result<Vec<Order>> {
        let rows = entities::Order::find()
            .filter(order::Column::RequestId.eq(i64::from(request_id.get())))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await
            .map_err(IngestError::Database)?;

        rows.into_iter().map(Order::try_from).collect()
    }
}

impl TryFrom<order::Model> for Order {
    type Error = IngestError;

    fn try_from(model: order::Model) -> Result<Self> {
        let request_id = u32::try_from(model.request_id).map_err(|_| {
            IngestError::internal(format!("stored request_id {} out of range", model.request_id))
        })?;
        let quantity = u32::try_from(model.quantity).map_err(|_| {
            IngestError::internal(format!("stored quantity {} out of range", model.quantity))
        })?;

        Ok(Order {
            id: Some(model.id),
            request_id: Some(CorrelationId(request_id)),
            customer: model.customer,
            quantity,
            price: model.price,
            created_at: Some(model.created_at.with_timezone(&Utc)),
        })
    }
}

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderLineInput, OrderLineView, OrderView};
use crate::domain::ports::OrderRepository;
use crate::schema::{menu_items, order_items, orders};

use super::models::{NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(
        &self,
        customer_name: Option<String>,
        total: BigDecimal,
        lines: Vec<OrderLineInput>,
    ) -> Result<i32, DomainError> {
        let mut conn = self.pool.get()?;

        // The order row and every line commit together or not at all; any
        // failure (bad menu_item_id, constraint violation, lost connection)
        // rolls the whole submission back. The connection goes back to the
        // pool on every exit path.
        conn.transaction::<_, DomainError, _>(|conn| {
            let order_id: i32 = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    customer_name,
                    total_amount: total,
                })
                .returning(orders::id)
                .get_result(conn)?;

            let new_items: Vec<NewOrderItemRow> = lines
                .iter()
                .map(|l| NewOrderItemRow {
                    order_id,
                    menu_item_id: Some(l.menu_item_id),
                    quantity: l.quantity,
                    price: l.price.clone(),
                })
                .collect();
            diesel::insert_into(order_items::table)
                .values(&new_items)
                .execute(conn)?;

            Ok(order_id)
        })
    }

    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let order_rows = orders::table
            .select(OrderRow::as_select())
            .order((orders::created_at.desc(), orders::id.desc()))
            .load(&mut conn)?;

        // One pass over all line items, resolving the current menu item name
        // through a left join so lines survive catalog deletions.
        let line_rows: Vec<(OrderItemRow, Option<String>)> = order_items::table
            .left_join(menu_items::table)
            .select((OrderItemRow::as_select(), menu_items::name.nullable()))
            .order(order_items::id.asc())
            .load(&mut conn)?;

        let mut lines_by_order: HashMap<i32, Vec<OrderLineView>> = HashMap::new();
        for (row, menu_item) in line_rows {
            lines_by_order
                .entry(row.order_id)
                .or_default()
                .push(OrderLineView {
                    id: row.id,
                    menu_item,
                    quantity: row.quantity,
                    price: row.price,
                });
        }

        Ok(order_rows
            .into_iter()
            .map(|o| OrderView {
                items: lines_by_order.remove(&o.id).unwrap_or_default(),
                id: o.id,
                customer_name: o.customer_name,
                total_amount: o.total_amount,
                status: o.status,
                created_at: o.created_at,
            })
            .collect())
    }
}

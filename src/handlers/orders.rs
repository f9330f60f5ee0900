use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::{OrderLineInput, OrderView};
use crate::errors::AppError;
use crate::infrastructure::order_repo::DieselOrderRepository;

pub type AppOrderService = OrderService<DieselOrderRepository>;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderItemRequest {
    pub menu_item_id: i32,
    pub quantity: i32,
    /// At-purchase price per unit, as a JSON number or string, e.g. 9.99 or "9.99"
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub message: String,
    pub order_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineResponse {
    pub id: i32,
    /// Current name of the referenced menu item; null once it has been
    /// deleted from the catalog.
    pub menu_item: Option<String>,
    pub quantity: i32,
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_name: Option<String>,
    #[schema(value_type = String, example = "25.00")]
    pub total_amount: BigDecimal,
    pub status: String,
    pub created_at: String,
    pub items: Vec<OrderLineResponse>,
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        OrderResponse {
            id: order.id,
            customer_name: order.customer_name,
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at.to_rfc3339(),
            items: order
                .items
                .into_iter()
                .map(|l| OrderLineResponse {
                    id: l.id,
                    menu_item: l.menu_item,
                    quantity: l.quantity,
                    price: l.price,
                })
                .collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// Converts a submitted cart into one order row plus its line items inside a
/// single database transaction; a half-written order is never observable.
/// The submitted prices are stored as-is as the at-purchase prices.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = CreateOrderResponse),
        (status = 400, description = "Empty submission or non-positive quantity"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let lines: Vec<OrderLineInput> = body
        .items
        .into_iter()
        .map(|item| OrderLineInput {
            menu_item_id: item.menu_item_id,
            quantity: item.quantity,
            price: item.price,
        })
        .collect();

    let order_id = web::block(move || service.create_order(body.customer_name, lines))
        .await
        .map_err(|e| AppError::internal("Error creating order", e))?
        .map_err(|e| AppError::from_domain("Error creating order", e))?;

    Ok(HttpResponse::Ok().json(CreateOrderResponse {
        message: "Order created successfully".to_string(),
        order_id,
    }))
}

/// GET /api/orders
///
/// Every order, newest first, each with its full line items. The whole table
/// comes back in one response; at this system's scale that is fine.
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders with their line items", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<AppOrderService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::internal("Error fetching orders", e))?
        .map_err(|e| AppError::from_domain("Error fetching orders", e))?;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

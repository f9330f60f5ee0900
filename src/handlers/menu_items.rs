use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::application::menu_service::MenuService;
use crate::domain::menu::{MenuItem, NewMenuItem};
use crate::errors::AppError;
use crate::infrastructure::menu_repo::DieselMenuRepository;

pub type AppMenuService = MenuService<DieselMenuRepository>;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub description: Option<String>,
    /// Decimal price, accepted as a JSON number or string, e.g. 9.99 or "9.99"
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
    pub category: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
    pub category: String,
    pub image_url: Option<String>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        MenuItemResponse {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            image_url: item.image_url,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/menu-items
///
/// The full catalog, ordered by category then name so the storefront can
/// group it deterministically.
#[utoipa::path(
    get,
    path = "/api/menu-items",
    responses(
        (status = 200, description = "All menu items", body = [MenuItemResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "menu-items"
)]
pub async fn list_menu_items(
    service: web::Data<AppMenuService>,
) -> Result<HttpResponse, AppError> {
    let items = web::block(move || service.list_items())
        .await
        .map_err(|e| AppError::internal("Error fetching menu items", e))?
        .map_err(|e| AppError::from_domain("Error fetching menu items", e))?;

    let body: Vec<MenuItemResponse> = items.into_iter().map(MenuItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/menu-items
///
/// Creates a catalog entry and returns it with its assigned id. Field
/// contents are not validated here; the admin panel is the only gate.
#[utoipa::path(
    post,
    path = "/api/menu-items",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 200, description = "The created menu item", body = MenuItemResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "menu-items"
)]
pub async fn create_menu_item(
    service: web::Data<AppMenuService>,
    body: web::Json<CreateMenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let created = web::block(move || {
        service.create_item(NewMenuItem {
            name: body.name,
            description: body.description,
            price: body.price,
            category: body.category,
            image_url: body.image_url,
        })
    })
    .await
    .map_err(|e| AppError::internal("Error creating menu item", e))?
    .map_err(|e| AppError::from_domain("Error creating menu item", e))?;

    Ok(HttpResponse::Ok().json(MenuItemResponse::from(created)))
}

/// DELETE /api/menu-items/{id}
///
/// Removes a catalog entry. Historical order lines keep their at-purchase
/// price and quantity; only their read-time name resolution goes null.
#[utoipa::path(
    delete,
    path = "/api/menu-items/{id}",
    params(
        ("id" = i32, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "menu-items"
)]
pub async fn delete_menu_item(
    service: web::Data<AppMenuService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || service.delete_item(id))
        .await
        .map_err(|e| AppError::internal("Error deleting menu item", e))?
        .map_err(|e| AppError::from_domain("Error deleting menu item", e))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Item deleted successfully" })))
}

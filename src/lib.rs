pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::menu_service::MenuService;
use application::order_service::OrderService;
use infrastructure::menu_repo::DieselMenuRepository;
use infrastructure::order_repo::DieselOrderRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool
        .get()
        .expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::menu_items::list_menu_items,
        handlers::menu_items::create_menu_item,
        handlers::menu_items::delete_menu_item,
        handlers::orders::create_order,
        handlers::orders::list_orders,
    ),
    components(schemas(
        handlers::menu_items::CreateMenuItemRequest,
        handlers::menu_items::MenuItemResponse,
        handlers::orders::CreateOrderRequest,
        handlers::orders::CreateOrderItemRequest,
        handlers::orders::CreateOrderResponse,
        handlers::orders::OrderResponse,
        handlers::orders::OrderLineResponse,
    )),
    tags(
        (name = "menu-items", description = "Menu catalog management"),
        (name = "orders", description = "Order placement and history"),
    )
)]
struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let menu_service =
            web::Data::new(MenuService::new(DieselMenuRepository::new(pool.clone())));
        let order_service =
            web::Data::new(OrderService::new(DieselOrderRepository::new(pool.clone())));

        App::new()
            .app_data(menu_service)
            .app_data(order_service)
            // The storefront is served from a separate origin.
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(
                web::scope("/api")
                    .route(
                        "/menu-items",
                        web::get().to(handlers::menu_items::list_menu_items),
                    )
                    .route(
                        "/menu-items",
                        web::post().to(handlers::menu_items::create_menu_item),
                    )
                    .route(
                        "/menu-items/{id}",
                        web::delete().to(handlers::menu_items::delete_menu_item),
                    )
                    .route("/orders", web::get().to(handlers::orders::list_orders))
                    .route("/orders", web::post().to(handlers::orders::create_order)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}

//! Route table.

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use sl_01_ingredient_ledger::IngredientLedgerApi;
use sl_02_menu_catalog::MenuCatalogApi;
use sl_03_order_fulfillment::OrderFulfillmentApi;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::domain::CorsConfig;
use crate::handlers::{ingredients, menu, orders, system};
use crate::middleware::create_cors_layer;
use crate::ports::HealthProbe;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn IngredientLedgerApi>,
    pub menu: Arc<dyn MenuCatalogApi>,
    pub orders: Arc<dyn OrderFulfillmentApi>,
    pub health: Arc<dyn HealthProbe>,
}

/// Builds the full REST router with tracing and CORS layers.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(cors));

    Router::new()
        // Ingredient Ledger
        .route("/add-ingredient", post(ingredients::add_ingredient))
        .route("/get-ingredient", get(ingredients::get_ingredient))
        .route("/get-all-ingredients", get(ingredients::get_all_ingredients))
        .route("/update-ingredient", put(ingredients::update_ingredient))
        .route("/delete-ingredient", delete(ingredients::delete_ingredient))
        .route(
            "/get-all-expired-ingredients",
            get(ingredients::get_expired_ingredients),
        )
        .route(
            "/get-expiring-ingredients",
            get(ingredients::get_expiring_ingredients),
        )
        .route(
            "/get-low-stock-ingredients",
            get(ingredients::get_low_stock_ingredients),
        )
        .route(
            "/resupply-ingredient-add",
            post(ingredients::resupply_ingredients),
        )
        // Order Fulfillment
        .route("/submit-orders", post(orders::submit_orders))
        // Menu Catalog
        .route("/add-menu-item", post(menu::add_menu_item))
        .route("/get-menu-item", get(menu::get_menu_item))
        .route("/get-all-menu-items", get(menu::get_all_menu_items))
        .route("/update-menu-item", put(menu::update_menu_item))
        .route("/delete-menu-item", delete(menu::delete_menu_item))
        // System
        .route("/health", get(system::health))
        .route("/metrics", get(system::metrics))
        .layer(middleware)
        .with_state(state)
}

//! REST API handlers for restaurants and menus

use super::models::*;
use crate::backend::models::Restaurant;
use crate::cart::state::SharedState;
use crate::error::AppError;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use futures_util::future::try_join_all;

/// Creates routes for catalog browsing
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:restaurant_id", get(get_restaurant))
        .route("/restaurants/:restaurant_id/menu", get(get_menu))
}

/// Endpoint: GET /restaurants?search=
/// Lists restaurants with their review statistics, fetched concurrently.
async fn list_restaurants(
    State(state): State<SharedState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<RestaurantSummary>>, AppError> {
    let restaurants = state.backend.list_restaurants().await?;

    let stats = try_join_all(
        restaurants
            .iter()
            .map(|restaurant| state.backend.restaurant_stats(restaurant.id)),
    )
    .await?;

    let term = query.search.unwrap_or_default();
    let summaries = restaurants
        .into_iter()
        .zip(stats)
        .map(|(restaurant, stats)| RestaurantSummary { restaurant, stats })
        .filter(|summary| summary.matches(&term))
        .collect();

    Ok(Json(summaries))
}

/// Endpoint: GET /restaurants/:restaurant_id
async fn get_restaurant(
    State(state): State<SharedState>,
    Path(restaurant_id): Path<u64>,
) -> Result<Json<Restaurant>, AppError> {
    Ok(Json(state.backend.get_restaurant(restaurant_id).await?))
}

/// Endpoint: GET /restaurants/:restaurant_id/menu
async fn get_menu(
    State(state): State<SharedState>,
    Path(restaurant_id): Path<u64>,
) -> Result<Json<RestaurantMenu>, AppError> {
    let restaurant = state.backend.get_restaurant(restaurant_id).await?;
    let items = state.backend.menu_for_restaurant(restaurant_id).await?;

    Ok(Json(RestaurantMenu { restaurant, items }))
}

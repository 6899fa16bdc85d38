//! HTTP client for the remote services.
//!
//! Every method is one request/response round trip. Non-success statuses are
//! turned into errors with `error_for_status`; nothing is retried.

use reqwest::Client;
use tracing::debug;

use super::models::*;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    api_base_url: String,
    delivery_api_base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_base_url: config.api_base_url.clone(),
            delivery_api_base_url: config.delivery_api_base_url.clone(),
        }
    }

    fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    fn delivery_api(&self, path: &str) -> String {
        format!("{}{}", self.delivery_api_base_url, path)
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, reqwest::Error> {
        let url = self.api("/restaurants");
        debug!("GET {url}");
        let page: Embedded<RestaurantList> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page.embedded.unwrap_or_default().restaurants)
    }

    pub async fn get_restaurant(&self, id: u64) -> Result<Restaurant, reqwest::Error> {
        let url = self.api(&format!("/restaurants/{id}"));
        debug!("GET {url}");
        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Menu items are tagged with `restaurant_id` when the service omits it.
    pub async fn menu_for_restaurant(
        &self,
        restaurant_id: u64,
    ) -> Result<Vec<MenuItem>, reqwest::Error> {
        let url = self.api("/menu-items/search/findByRestaurantId");
        debug!("GET {url}?restaurantId={restaurant_id}");
        let page: Embedded<MenuItemList> = self
            .http
            .get(url)
            .query(&[("restaurantId", restaurant_id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut items = page.embedded.unwrap_or_default().menu_items;
        for item in &mut items {
            item.restaurant_id.get_or_insert(restaurant_id);
        }
        Ok(items)
    }

    pub async fn restaurant_stats(&self, id: u64) -> Result<RestaurantStats, reqwest::Error> {
        let url = self.api(&format!("/reviews/restaurant/{id}/stats"));
        debug!("GET {url}");
        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    pub async fn list_orders(&self) -> Result<Vec<Order>, reqwest::Error> {
        let url = self.api("/orders");
        debug!("GET {url}");
        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<Order, reqwest::Error> {
        let url = self.api("/orders");
        debug!("POST {url}");
        self.http
            .post(url)
            .json(order)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// The order service owns legal transitions; the requested one is sent as is.
    pub async fn update_order_status(
        &self,
        order_id: u64,
        status: OrderStatus,
    ) -> Result<(), reqwest::Error> {
        let url = self.api(&format!("/orders/{order_id}/status"));
        debug!("PUT {url}?status={}", status.as_str());
        self.http
            .put(url)
            .query(&[("status", status.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reviews
    // -------------------------------------------------------------------------

    pub async fn create_review(&self, review: &CreateReviewRequest) -> Result<(), reqwest::Error> {
        let url = self.api("/reviews");
        debug!("POST {url}");
        self.http
            .post(url)
            .json(review)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Deliveries
    // -------------------------------------------------------------------------

    pub async fn create_delivery_for_order(
        &self,
        request: &DeliveryForOrderRequest,
    ) -> Result<Delivery, reqwest::Error> {
        let url = self.delivery_api("/deliveries/create-for-order");
        debug!("POST {url}");
        self.http
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn rate_delivery(
        &self,
        delivery_id: u64,
        rating: &RateDeliveryRequest,
    ) -> Result<(), reqwest::Error> {
        let url = self.delivery_api(&format!("/deliveries/{delivery_id}/rate"));
        debug!("POST {url}");
        self.http
            .post(url)
            .json(rating)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

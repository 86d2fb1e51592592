//! Order Endpoints

use gloo_net::http::Request;

use crate::models::{Order, OrderList};

/// Fetch all currently placed orders
pub async fn list_orders() -> Result<Vec<Order>, String> {
    let response = Request::get("/order/list")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    let list = response
        .json::<OrderList>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(list.orders)
}

/// Overwrite an order with an edited copy
pub async fn sync_order(order: &Order) -> Result<String, String> {
    let response = Request::post("/order/sync")
        .json(order)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Response error: {}", e))
}

/// Delete a placed order
pub async fn delete_order(order_number: u32) -> Result<(), String> {
    let url = format!("/order/delete/{}", order_number);
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    Ok(())
}

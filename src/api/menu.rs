//! Menu Endpoints

use gloo_net::http::Request;
use serde::Serialize;

use crate::models::{MenuItem, MenuList};

#[derive(Serialize)]
struct NewMenuItem<'a> {
    name: &'a str,
    description: &'a str,
}

/// Fetch all items on the menu
pub async fn list_menu() -> Result<Vec<MenuItem>, String> {
    let response = Request::get("/menu/list")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    let list = response
        .json::<MenuList>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(list.items)
}

/// Add a new item to the menu
pub async fn add_menu_item(name: &str, description: &str) -> Result<String, String> {
    let response = Request::post("/menu/add")
        .json(&NewMenuItem { name, description })
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

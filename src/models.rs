//! Frontend Models
//!
//! Data structures matching the backend wire format (snake_case fields).

use serde::{Deserialize, Serialize};

/// An item on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_id: String,
    pub name: String,
    pub description: String,
}

/// A line in the cart: one menu item and how many of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: MenuItem,
    pub count: u32,
}

/// Cart as the backend serializes it (`GET /cart/view/{id}`, `POST /cart/sync`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub cart_id: String,
    pub items: Vec<CartEntry>,
}

/// `GET /menu/list` response body
#[derive(Debug, Clone, Deserialize)]
pub struct MenuList {
    pub items: Vec<MenuItem>,
}

/// A placed order (matches backend serializer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_number: u32,
    pub fulfilled: bool,
    pub items: Vec<CartEntry>,
}

/// `GET /order/list` response body
#[derive(Debug, Clone, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_snapshot_uses_backend_field_names() {
        let snapshot = CartSnapshot {
            cart_id: "DEMO".to_string(),
            items: vec![CartEntry {
                item: MenuItem {
                    item_id: "a1".to_string(),
                    name: "Cake".to_string(),
                    description: "Delicious cake".to_string(),
                },
                count: 2,
            }],
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["cart_id"], "DEMO");
        assert_eq!(json["items"][0]["count"], 2);
        assert_eq!(json["items"][0]["item"]["item_id"], "a1");
    }

    #[test]
    fn order_list_parses_backend_shape() {
        let body = r#"{"orders":[{"order_number":7,"fulfilled":false,"items":[]}]}"#;
        let list: OrderList = serde_json::from_str(body).unwrap();
        assert_eq!(list.orders.len(), 1);
        assert_eq!(list.orders[0].order_number, 7);
        assert!(!list.orders[0].fulfilled);
    }
}

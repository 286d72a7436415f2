//! Room Service Order Model
//!
//! Orders are read-only in this service: staff tooling renders them
//! but no mutation endpoint exists.

use serde::{Deserialize, Serialize};

/// Order fulfilment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOrderStatus {
    Preparing,
    Delivered,
}

impl Default for ServiceOrderStatus {
    fn default() -> Self {
        Self::Preparing
    }
}

impl ServiceOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceOrderStatus::Preparing => "preparing",
            ServiceOrderStatus::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for ServiceOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A line item on an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price
    pub price: f64,
}

/// Room service order record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: String,
    /// Door number the order is delivered to
    pub room_number: String,
    pub items: Vec<OrderItem>,
    /// Sum of item price x quantity
    pub total: f64,
    pub status: ServiceOrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_format() {
        let order = ServiceOrder {
            id: "o1".to_string(),
            room_number: "204".to_string(),
            items: vec![OrderItem {
                name: "Club Sandwich".to_string(),
                quantity: 2,
                price: 18.5,
            }],
            total: 37.0,
            status: ServiceOrderStatus::Preparing,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["roomNumber"], "204");
        assert_eq!(json["status"], "preparing");
        assert_eq!(json["items"][0]["quantity"], 2);
    }
}

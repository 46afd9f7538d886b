//! Yampi webhook event types.
//!
//! Defines the structures for parsing Yampi webhook payloads. Only fields
//! relevant to access management are captured.

use serde::{Deserialize, Serialize};

/// Yampi webhook event (simplified).
///
/// Contains the essential fields needed for webhook processing. Additional
/// fields from Yampi's full event schema are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YampiEvent {
    /// Dotted event name (e.g. "order.paid").
    pub event: String,

    /// ISO-8601 time the event was emitted, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// The resource that triggered the event (polymorphic per event type).
    pub resource: serde_json::Value,
}

impl YampiEvent {
    /// Parse the event name into a known enum variant.
    pub fn parsed_type(&self) -> YampiEventType {
        YampiEventType::from_event_name(&self.event)
    }

    /// Attempts to deserialize the resource as the specified type.
    pub fn deserialize_resource<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.resource.clone())
    }
}

/// Known Yampi event types that we handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YampiEventType {
    /// Order payment confirmed.
    OrderPaid,
    /// Order refunded after payment.
    OrderRefunded,
    /// Order cancelled.
    OrderCancelled,
    /// Unknown or unhandled event type.
    Unknown,
}

impl YampiEventType {
    /// Parse event type from the dotted event name.
    pub fn from_event_name(s: &str) -> Self {
        match s {
            "order.paid" => Self::OrderPaid,
            "order.refunded" => Self::OrderRefunded,
            "order.cancelled" => Self::OrderCancelled,
            _ => Self::Unknown,
        }
    }

    /// Convert to the Yampi event name string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderPaid => "order.paid",
            Self::OrderRefunded => "order.refunded",
            Self::OrderCancelled => "order.cancelled",
            Self::Unknown => "unknown",
        }
    }
}

/// Order fields extracted from an order.* event resource.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderResource {
    /// Yampi order number.
    pub id: i64,

    /// The buyer.
    pub customer: OrderCustomer,

    /// Purchased items.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Buyer fields from an order resource.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderCustomer {
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A purchased line item.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderItem {
    pub sku: String,

    #[serde(default)]
    pub quantity: u32,
}

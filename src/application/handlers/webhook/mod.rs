//! Webhook use cases.

mod process_order_event;

pub use process_order_event::{
    ProcessOrderEventHandler, WebhookOutcome, WebhookProcessingError,
};

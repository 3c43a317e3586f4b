//! Services Layer
//!
//! Console state and the actions that drive the rental service.

pub mod console;
pub mod notifications;

// Re-export for convenience
pub use console::{ConsoleState, decrease_amount};
pub use notifications::{Notification, NotificationLevel};

mod fixtures;
pub mod invoke;
pub mod tracing;

pub use fixtures::{event_for, load_event};
pub use invoke::{Invocation, invoke, invoke_with};
pub use self::tracing::{CapturedEvent, capture_events};

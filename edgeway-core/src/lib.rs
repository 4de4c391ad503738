pub mod conf;
pub mod event;
pub mod handler;
pub mod logging;
pub mod normalization;

pub use handler::{HandlerError, handle_event, handle_json};
pub use normalization::{Decision, Normalizer, RequestDescriptor, normalize};

use crate::event::{EdgeEvent, EventError, HandlerOutput};
use crate::normalization::{
    Decision, DescriptorError, Normalizer, RequestDescriptor, TransitionSink,
};
use thiserror::Error;
use tracing::debug;

/// Invocation faults. Surfaced to the platform as an edge-function error.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("edge event contains no records")]
    NoRecords,

    #[error(transparent)]
    Request(#[from] DescriptorError),

    #[error(transparent)]
    Event(#[from] EventError),
}

/// Run the normalizer against the first record of an edge event.
pub fn handle_event(
    event: EdgeEvent,
    normalizer: &Normalizer,
    sink: &dyn TransitionSink,
) -> Result<HandlerOutput, HandlerError> {
    let record = event
        .records
        .into_iter()
        .next()
        .ok_or(HandlerError::NoRecords)?;

    if let Some(config) = &record.cf.config {
        debug!(
            distribution_id = config.distribution_id.as_deref(),
            event_type = config.event_type.as_deref(),
            request_id = config.request_id.as_deref(),
            "edge event received"
        );
    }

    let descriptor = RequestDescriptor::try_from(record.cf.request)?;

    let output = match normalizer.normalize(descriptor, sink) {
        Decision::Redirect(redirect) => HandlerOutput::Response(redirect.into()),
        Decision::PassThrough(request) => HandlerOutput::Request(request.into_inner()),
    };

    Ok(output)
}

/// JSON in, JSON out. The shape the edge platform speaks.
pub fn handle_json(
    input: &str,
    normalizer: &Normalizer,
    sink: &dyn TransitionSink,
) -> Result<String, HandlerError> {
    let event = EdgeEvent::from_json(input)?;
    let output = handle_event(event, normalizer, sink)?;
    Ok(output.to_json()?)
}

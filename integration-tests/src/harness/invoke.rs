use crate::harness::{CapturedEvent, capture_events};
use edgeway_core::conf::NormalizerConfig;
use edgeway_core::event::{EdgeRequest, EdgeResponse, HandlerOutput};
use edgeway_core::logging::LogLevel;
use edgeway_core::normalization::{Normalizer, TracingSink};
use edgeway_core::{HandlerError, handle_json};
use serde_json::Value;

/// One handler run: the raw JSON it returned and the events it logged.
#[derive(Debug)]
pub struct Invocation {
    pub result: Result<String, HandlerError>,
    pub events: Vec<CapturedEvent>,
}

impl Invocation {
    pub fn json(&self) -> Value {
        let raw = self.result.as_ref().expect("handler failed");
        serde_json::from_str(raw).expect("handler returned invalid JSON")
    }

    pub fn output(&self) -> HandlerOutput {
        serde_json::from_value(self.json()).expect("output has an unknown shape")
    }

    pub fn response(&self) -> EdgeResponse {
        match self.output() {
            HandlerOutput::Response(response) => response,
            HandlerOutput::Request(request) => panic!("Expected a response, got {:?}", request),
        }
    }

    pub fn request(&self) -> EdgeRequest {
        match self.output() {
            HandlerOutput::Request(request) => request,
            HandlerOutput::Response(response) => panic!("Expected a request, got {:?}", response),
        }
    }

    /// Events emitted by the transition sink.
    pub fn transitions(&self) -> Vec<&CapturedEvent> {
        self.events
            .iter()
            .filter(|e| e.field("rule").is_some())
            .collect()
    }
}

pub fn invoke(event_json: &str) -> Invocation {
    invoke_with(event_json, &NormalizerConfig::default())
}

pub fn invoke_with(event_json: &str, config: &NormalizerConfig) -> Invocation {
    let normalizer = Normalizer::new(config);
    let sink = TracingSink::new(LogLevel::Info);

    let (result, events) = capture_events(|| handle_json(event_json, &normalizer, &sink));

    Invocation { result, events }
}

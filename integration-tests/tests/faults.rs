use edgeway_core::HandlerError;
use edgeway_core::event::EventError;
use edgeway_core::normalization::DescriptorError;
use integration_tests::harness::{invoke, load_event};

#[test]
fn missing_host_header_is_an_invocation_fault() {
    let inv = invoke(&load_event("missing_host"));

    assert!(matches!(
        inv.result,
        Err(HandlerError::Request(DescriptorError::MissingHost))
    ));
    assert!(inv.transitions().is_empty());
}

#[test]
fn empty_records_is_an_invocation_fault() {
    let inv = invoke(&load_event("no_records"));

    assert!(matches!(inv.result, Err(HandlerError::NoRecords)));
}

#[test]
fn malformed_json_is_an_invocation_fault() {
    let inv = invoke("{ not json");

    assert!(matches!(
        inv.result,
        Err(HandlerError::Event(EventError::Decode(_)))
    ));
}

#[test]
fn missing_uri_is_an_invocation_fault() {
    let raw = r#"{"Records":[{"cf":{"request":{"headers":{"host":[{"value":"example.com"}]}}}}]}"#;

    let inv = invoke(raw);

    assert!(matches!(
        inv.result,
        Err(HandlerError::Event(EventError::Decode(_)))
    ));
}

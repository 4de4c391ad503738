use crate::event::{EdgeRequest, EdgeResponse, HandlerOutput};
use crate::normalization::{NoopSink, RequestDescriptor, normalize};
use pretty_assertions::assert_eq;
use serde_json::json;

fn redirect_for(host: &str, uri: &str) -> EdgeResponse {
    let decision = normalize(RequestDescriptor::new(host, uri), &NoopSink);
    decision
        .redirect()
        .cloned()
        .map(EdgeResponse::from)
        .expect("expected a redirect")
}

#[test]
fn redirect_serializes_to_platform_shape() {
    // Arrange
    let output = HandlerOutput::Response(redirect_for("www.example.com", "/a/b"));

    // Act
    let encoded = serde_json::to_value(&output).unwrap();

    // Assert
    assert_eq!(
        encoded,
        json!({
            "status": "301",
            "statusDescription": "Moved permanently",
            "headers": {
                "location": [{ "key": "Location", "value": "https://example.com/a/b" }]
            }
        })
    );
}

#[test]
fn location_accessor_reads_header() {
    let response = redirect_for("example.com", "/posts/");

    assert_eq!(
        response.location(),
        Some("https://example.com/posts/index.html")
    );
}

#[test]
fn pass_through_has_no_status_fields() {
    // Arrange
    let output = HandlerOutput::Request(EdgeRequest::new("example.com", "/style.css"));

    // Act
    let encoded = serde_json::to_value(&output).unwrap();

    // Assert
    assert!(encoded.get("status").is_none());
    assert!(encoded.get("statusDescription").is_none());
    assert_eq!(encoded["uri"], json!("/style.css"));
}

#[test]
fn untagged_output_decodes_both_shapes() {
    // Arrange
    let response = HandlerOutput::Response(redirect_for("example.com", "/posts/"));
    let request = HandlerOutput::Request(EdgeRequest::new("example.com", "/style.css"));

    // Act
    let response_back: HandlerOutput =
        serde_json::from_str(&response.to_json().unwrap()).unwrap();
    let request_back: HandlerOutput = serde_json::from_str(&request.to_json().unwrap()).unwrap();

    // Assert
    assert_eq!(response_back, response);
    assert_eq!(request_back, request);
}

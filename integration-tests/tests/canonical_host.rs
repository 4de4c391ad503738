use integration_tests::harness::{event_for, invoke, load_event};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn www_host_redirects_to_apex() {
    let inv = invoke(&event_for("www.example.com", "/a/b"));

    assert_eq!(
        inv.json(),
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
fn www_host_wins_over_trailing_slash() {
    let inv = invoke(&load_event("www_trailing_slash"));

    let response = inv.response();

    assert_eq!(response.location(), Some("https://example.com/posts/"));
}

#[test]
fn query_string_is_not_carried_into_location() {
    let inv = invoke(&load_event("www_trailing_slash"));

    let location = inv.response().location().unwrap().to_string();

    assert!(!location.contains('?'), "location was {location}");
}

#[test]
fn www_in_the_middle_still_redirects() {
    let inv = invoke(&event_for("blog.www.example.com", "/style.css"));

    assert_eq!(
        inv.response().location(),
        Some("https://blog.www.example.com/style.css")
    );
}

#[test]
fn apex_host_is_not_redirected_by_host_rule() {
    let inv = invoke(&event_for("example.com", "/style.css"));

    assert_eq!(inv.request().uri, "/style.css");
}

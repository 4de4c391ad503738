use serde_json::json;
use std::fs;
use std::path::PathBuf;

/// Read `fixtures/events/<name>.json`.
pub fn load_event(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("events")
        .join(format!("{name}.json"));

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// A minimal viewer-request event for `host` and `uri`.
pub fn event_for(host: &str, uri: &str) -> String {
    json!({
        "Records": [{
            "cf": {
                "config": {
                    "distributionId": "EDFDVBD6EXAMPLE",
                    "eventType": "viewer-request"
                },
                "request": {
                    "clientIp": "203.0.113.178",
                    "method": "GET",
                    "querystring": "",
                    "uri": uri,
                    "headers": {
                        "host": [{ "key": "Host", "value": host }]
                    }
                }
            }
        }]
    })
    .to_string()
}

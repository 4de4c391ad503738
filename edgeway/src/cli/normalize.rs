use edgeway_core::conf::EdgewayConfig;
use edgeway_core::normalization::{Decision, Normalizer, RequestDescriptor, TracingSink};
use serde_json::json;

pub fn run(cfg: &EdgewayConfig, host: String, uri: String) -> anyhow::Result<()> {
    let normalizer = Normalizer::new(&cfg.normalizer);
    let sink = TracingSink::new(cfg.logging.transitions);

    let summary = match normalizer.normalize(RequestDescriptor::new(host, uri), &sink) {
        Decision::Redirect(redirect) => json!({
            "decision": "redirect",
            "status": redirect.status().as_u16(),
            "location": redirect.location(),
        }),
        Decision::PassThrough(request) => json!({
            "decision": "pass_through",
            "uri": request.uri(),
            "original_uri": request.original_uri(),
        }),
    };

    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}

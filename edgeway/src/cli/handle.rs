use anyhow::Context;
use edgeway_core::conf::EdgewayConfig;
use edgeway_core::event::EdgeEvent;
use edgeway_core::handle_event;
use edgeway_core::normalization::{Normalizer, TracingSink};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub fn run(cfg: &EdgewayConfig, event: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let raw = read_event(event)?;

    let event = EdgeEvent::from_json(&raw)?;
    let normalizer = Normalizer::new(&cfg.normalizer);
    let sink = TracingSink::new(cfg.logging.transitions);

    let output = handle_event(event, &normalizer, &sink)?;

    let encoded = if pretty {
        output.to_json_pretty()?
    } else {
        output.to_json()?
    };
    println!("{encoded}");

    Ok(())
}

fn read_event(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read event file {}", path.display())),
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read event from stdin")?;
            Ok(raw)
        }
    }
}

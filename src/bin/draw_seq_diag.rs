use clap::Parser;
use dsd_rs::config::load_config;
use dsd_rs::layout::layout_diagram;
use dsd_rs::timeline::read_events;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "draw-seq-diag",
    about = "Generate a sequence-diagram layout from captured event records"
)]
struct Args {
    /// JSON config file (hosts, event types, settings)
    #[arg(short, long)]
    config: PathBuf,

    /// CSV file listing the events
    #[arg(short, long)]
    input: PathBuf,

    /// Output layout JSON, consumed by a rendering backend
    #[arg(short, long)]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (mut registry, event_types, settings) = load_config(&args.config).unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(1);
    });

    let mut events = read_events(&args.input, &registry, &event_types, &settings)
        .unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(1);
        });

    registry.retain_participants(&mut events);

    if registry.is_empty() {
        eprintln!("No hosts were involved in any of the events. Aborting");
        process::exit(1);
    }
    if events.is_empty() {
        eprintln!("No events were provided. Aborting");
        process::exit(1);
    }

    let doc = layout_diagram(&mut registry, &events, &event_types, &settings);

    // Only written once the whole pipeline has succeeded.
    let json = serde_json::to_string_pretty(&doc).expect("serialize layout");
    fs::write(&args.output, json).expect("write layout");
    info!(path = %args.output.display(), "wrote layout document");
}

use clap::Parser;
use dsd_rs::capture::{match_capture, CapturePacket};
use dsd_rs::config::load_config;
use dsd_rs::filter::{display_filter, FilterStyle};
use dsd_rs::layout::layout_diagram;
use dsd_rs::timeline::write_events;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "query-capture",
    about = "Extract events from a decoded capture dump by matching requests to acks"
)]
struct Args {
    /// JSON config file (hosts, event types, settings)
    #[arg(short, long)]
    config: PathBuf,

    /// Decoded packet dump (JSON array), already filtered to relevant traffic
    #[arg(long)]
    capture: PathBuf,

    /// Hosts of interest, used to print the matching display filter
    #[arg(long, num_args = 1..)]
    hosts: Vec<String>,

    /// Event types of interest, used to print the matching display filter
    #[arg(
        short,
        long,
        num_args = 1..,
        default_values = ["StartCall", "EndCall", "endMedia", "CDRType1"]
    )]
    events: Vec<String>,

    /// If provided, write the discovered events to a CSV file
    #[arg(short, long)]
    write_events: Option<PathBuf>,

    /// If provided, also lay out a diagram and write it as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
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

    if !args.hosts.is_empty() {
        let matched = registry.match_hosts(&args.hosts);
        let hosts: Vec<_> = matched.iter().map(|idx| registry.get(*idx)).collect();
        info!(
            filter = %display_filter(&hosts, &args.events, FilterStyle::Compact),
            "display filter for this query"
        );
    }

    let raw = fs::read_to_string(&args.capture).expect("read capture dump");
    let packets: Vec<CapturePacket> = serde_json::from_str(&raw).expect("parse capture dump");
    info!(packets = packets.len(), "capture dump loaded");

    let mut events = match_capture(packets, &registry, &event_types, &settings);

    if let Some(path) = &args.write_events {
        write_events(path, &events, &registry).unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(1);
        });
        info!(path = %path.display(), count = events.len(), "wrote event records");
    }

    if let Some(path) = &args.output {
        registry.retain_participants(&mut events);
        if registry.is_empty() {
            eprintln!("No hosts were involved in any of the events. Aborting");
            process::exit(1);
        }
        if events.is_empty() {
            eprintln!("No events were found in the capture. Aborting");
            process::exit(1);
        }
        let doc = layout_diagram(&mut registry, &events, &event_types, &settings);
        let json = serde_json::to_string_pretty(&doc).expect("serialize layout");
        fs::write(path, json).expect("write layout");
        info!(path = %path.display(), "wrote layout document");
    }
}

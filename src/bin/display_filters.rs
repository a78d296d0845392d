use clap::Parser;
use dsd_rs::config::load_config;
use dsd_rs::filter::{display_filter, FilterStyle};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(
    name = "display-filters",
    about = "Produce capture display filters for events between hosts"
)]
struct Args {
    /// JSON config file (hosts, event types, settings)
    #[arg(short, long)]
    config: PathBuf,

    /// Hosts to include, by id, name or address
    #[arg(required = true)]
    hosts: Vec<String>,

    /// Event types to match
    #[arg(
        short,
        long,
        num_args = 1..,
        default_values = ["StartCall", "EndCall", "endMedia", "CDRType1"]
    )]
    events: Vec<String>,

    /// Emit a single-line filter instead of the indented form
    #[arg(long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let (registry, _event_types, _settings) = load_config(&args.config).unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(1);
    });

    let matched = registry.match_hosts(&args.hosts);
    if matched.is_empty() {
        eprintln!("None of the given hosts matched the configuration. Aborting");
        process::exit(1);
    }
    let hosts: Vec<_> = matched.iter().map(|idx| registry.get(*idx)).collect();

    let style = if args.compact {
        FilterStyle::Compact
    } else {
        FilterStyle::Expanded
    };
    println!("{}", display_filter(&hosts, &args.events, style));
}

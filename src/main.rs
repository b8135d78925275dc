//! repodoc CLI - clone a repository, extract symbols, print the template.

use anyhow::Context;
use clap::Parser;
use repodoc::{analyze_repository, clone_repository, render_rmarkdown};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract structural metadata from a repository and emit a documentation template
#[derive(Parser, Debug)]
#[command(name = "repodoc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository URL to clone and analyze
    #[arg(required_unless_present = "path")]
    url: Option<String>,

    /// Analyze an existing local directory instead of cloning
    #[arg(long)]
    path: Option<PathBuf>,

    /// Emit raw records as JSON instead of the RMarkdown template
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Keep the clone handle alive until analysis finishes; dropping it
    // deletes the working copy.
    let _repo;
    let root = match (&args.path, &args.url) {
        (Some(path), _) => path.clone(),
        (None, Some(url)) => {
            _repo = clone_repository(url).context("repository acquisition failed")?;
            _repo.path().to_path_buf()
        }
        (None, None) => unreachable!("clap enforces url or --path"),
    };

    let records = analyze_repository(&root);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print!("{}", render_rmarkdown(&records));
    }

    Ok(())
}

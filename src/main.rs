use std::{fs, path::PathBuf};

use clap::Parser;
use tf_idf_similarity::{compare_bytes_with, CompareConfig, DocSide, TFIDFPair};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tf-idf-similarity")]
#[command(about = "Similarity of two plain-text documents, in percent")]
#[command(version)]
struct Args {
    /// First document (UTF-8 text file)
    doc_a: PathBuf,

    /// Second document (UTF-8 text file)
    doc_b: PathBuf,

    /// Reject documents larger than this many bytes
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Also list the N highest weighted terms of each document
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = CompareConfig {
        max_input_bytes: args.max_bytes,
        ..Default::default()
    };

    let bytes_a = fs::read(&args.doc_a)?;
    let bytes_b = fs::read(&args.doc_b)?;
    debug!(a = %args.doc_a.display(), b = %args.doc_b.display(), len_a = bytes_a.len(), len_b = bytes_b.len(), "loaded documents");

    let result = compare_bytes_with(&config, &bytes_a, &bytes_b)?;
    info!(percentage = result.percentage, "compared");

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result);
    }

    if let Some(n) = args.top {
        // already validated by compare_bytes_with
        let text_a = std::str::from_utf8(&bytes_a)?;
        let text_b = std::str::from_utf8(&bytes_b)?;
        let pair: TFIDFPair = TFIDFPair::fit(text_a, text_b);
        for side in [DocSide::A, DocSide::B] {
            println!("{}:", side);
            for (term, weight) in pair.top_terms(side, n) {
                println!("    {:<24} {:.4}", term, weight);
            }
        }
    }

    Ok(())
}

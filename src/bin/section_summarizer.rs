//! Command-line front end: summarize a Wikipedia article section by section.

use anyhow::{bail, Result};
use clap::Parser;
use section_summarizer::{summaries_for, SummarizerConfig, WikipediaSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "section-summarizer",
    about = "Extract the most informative sentences of each Wikipedia article section"
)]
struct Args {
    /// Page name, e.g. Barack_Obama
    page_name: String,

    /// One in this many sentences is kept per section
    #[arg(short, long, default_value_t = 5.0)]
    compression_ratio: f64,

    /// Language of the stopword list
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Alternative MediaWiki API endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = SummarizerConfig::default()
        .with_compression_ratio(args.compression_ratio)
        .with_language(args.language);
    config.validate()?;

    let source = match args.api_url {
        Some(url) => WikipediaSource::with_api_url(url)?,
        None => WikipediaSource::new()?,
    };

    let response = summaries_for(&source, Some(&args.page_name), &config);
    if !response.is_success() {
        bail!("request for {:?} failed with status {}", args.page_name, response.status);
    }

    if args.pretty {
        println!("{}", response.to_json_pretty());
    } else {
        println!("{}", response.to_json());
    }
    Ok(())
}

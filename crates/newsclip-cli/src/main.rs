use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use newsclip_client::ReqwestFetcher;
use newsclip_core::{ArticleResult, PageExtractor, ScrapeService};

#[derive(Parser)]
#[command(
    name = "newsclip",
    version,
    about = "Fetch a news article and print its content and byline"
)]
struct Cli {
    /// The URL of the news article to scrape
    #[arg(short, long)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print the result as JSON instead of the plain-text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("newsclip_core=info".parse()?)
                .add_directive("newsclip_client=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let fetcher = ReqwestFetcher::with_timeout(Duration::from_secs(cli.timeout))
        .context("Failed to create HTTP client")?;
    let extractor = PageExtractor::new().context("Failed to build extractor")?;
    let service = ScrapeService::new(fetcher, extractor);

    let result = service
        .scrape(&cli.url)
        .await
        .with_context(|| format!("Error scraping article at {}", cli.url))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    Ok(())
}

/// Print the plain-text report to stdout.
fn print_report(result: &ArticleResult) {
    if result.has_content() {
        println!("Scraped Article Content:");
        println!("{}", result.content);
    } else {
        println!("No article content found.");
    }

    if result.has_byline() {
        println!("Byline: {}", result.byline);
    } else {
        println!("No author information found.");
    }
}

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::bail;
use clap::{Parser, Subcommand};
use pagefeed::{FeedClient, FeedUrl};
use searchcloud::{SearchClient, SearchEndpoint};
use sitesearch_ui::{DisplayState, SearchController};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod pipeline;

use config::Settings;
use pipeline::{export_documents, FeedContentSource, PageIndexer};

#[derive(Parser)]
#[command(name = "sitesearch", about = "Build and query the site search index")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the content feed and export search documents as NDJSON
    Build {
        /// Output file; "-" writes to stdout
        #[arg(short, long, default_value = "-")]
        output: String,
    },
    /// Decode the API-reference records and print their contents
    DumpApi,
    /// Run a query against the hosted index, e.g. to smoke-test a deployment
    Search {
        term: String,
        /// Restrict results to one site section
        #[arg(short, long)]
        section: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::parse();
    let settings = config::read_config()?;

    match opts.command {
        Command::Build { output } => build(&settings, &output).await,
        Command::DumpApi => dump_api(&settings).await,
        Command::Search { term, section } => search(&settings, &term, section.as_deref()).await,
    }
}

fn page_indexer(settings: &Settings) -> PageIndexer<FeedContentSource> {
    let client = FeedClient::new(FeedUrl::new(settings.feed.base_url.clone()));
    PageIndexer::new(FeedContentSource::new(client))
}

async fn build(settings: &Settings, output: &str) -> anyhow::Result<()> {
    let indexer = page_indexer(settings);
    let (documents, stats) = indexer.build_all().await?;

    if output == "-" {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        export_documents(&documents, &mut writer)?;
    } else {
        let mut writer = BufWriter::new(File::create(output)?);
        export_documents(&documents, &mut writer)?;
        writer.flush()?;
        info!(output, documents = stats.documents, "Wrote document export");
    }

    Ok(())
}

async fn dump_api(settings: &Settings) -> anyhow::Result<()> {
    let indexer = page_indexer(settings);
    for content in indexer.decode_api_content().await? {
        println!("{content}");
    }
    Ok(())
}

async fn search(settings: &Settings, term: &str, section: Option<&str>) -> anyhow::Result<()> {
    let client = SearchClient::open(SearchEndpoint {
        url: settings.search.endpoint.clone(),
        api_key: settings.search.api_key.clone(),
    })?;

    let mut controller = SearchController::new();

    // Empty-term search first, so facet names can be resolved to positions.
    let initial = controller.initial_request();
    let response = client.search(&initial.request).await?;
    controller.on_response(initial.seq, Ok(response));

    if let Some(section) = section {
        let Some(index) = controller
            .facets()
            .iter()
            .position(|(name, _)| name == section)
        else {
            bail!("Unknown section '{}'", section);
        };
        // Superseded by the term event below; only the final plan runs.
        let _ = controller.on_facet_changed(index);
    }

    let planned = controller.on_term_changed(term);
    let outcome = client.search(&planned.request).await;
    controller.on_response(planned.seq, outcome);
    client.close();

    if let Some(error) = controller.error() {
        bail!("Search failed: {}", error);
    }

    match controller.display() {
        DisplayState::Empty => {}
        DisplayState::NoResults { term } => println!("No results for '{term}'"),
        DisplayState::Results { hits, see_all } => {
            for hit in hits {
                let mut trail = hit.breadcrumbs.clone();
                trail.push(hit.page_title.clone());
                println!("{}  ({})", hit.title_html, trail.join(" > "));
            }
            if let Some(see_all) = see_all {
                println!("See all {} results: {}", see_all.count, see_all.href);
            }
        }
    }

    Ok(())
}

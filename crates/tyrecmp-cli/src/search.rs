//! `search` command: build a request, run it once, print and optionally
//! export the sorted result.

use std::time::Duration;

use clap::{Args, ValueEnum};
use tyrecmp_core::request::DEFAULT_BRAND;
use tyrecmp_core::{
    all_vendor_keys, summarize, write_export, AppConfig, SearchRequest, TyreSizeDescriptor,
};
use tyrecmp_search::{FixtureSource, OfferSource, RemoteSource, SearchOrchestrator};

use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Built-in sample offers
    Fixture,
    /// The configured offer search service
    Remote,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Section width, e.g. 205
    #[arg(long, default_value = "205")]
    pub width: String,

    /// Aspect ratio (sidewall height), e.g. 55
    #[arg(long, default_value = "55")]
    pub height: String,

    /// Rim diameter in inches, e.g. 16
    #[arg(long, default_value = "16")]
    pub rim: String,

    #[arg(long, default_value = "91")]
    pub load_index: String,

    #[arg(long, default_value = "V")]
    pub speed_index: String,

    /// Brand filter; pass an empty string for any brand
    #[arg(long, default_value = DEFAULT_BRAND)]
    pub brand: String,

    /// Vendor key to query; repeat for several. Defaults to every vendor
    #[arg(long = "site", value_name = "KEY")]
    pub sites: Vec<String>,

    /// Vendor key to leave out of the selection; repeatable
    #[arg(long = "skip-site", value_name = "KEY")]
    pub skip_sites: Vec<String>,

    /// Where offers come from; defaults to TYRECMP_USE_FIXTURE
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Sort by price, highest first
    #[arg(long)]
    pub desc: bool,

    /// Write the sorted result to a CSV file in TYRECMP_EXPORT_DIR
    #[arg(long)]
    pub export: bool,

    /// Print the sorted offers as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    fn size(&self) -> TyreSizeDescriptor {
        TyreSizeDescriptor::new(
            self.width.as_str(),
            self.height.as_str(),
            self.rim.as_str(),
            self.load_index.as_str(),
            self.speed_index.as_str(),
        )
    }

    /// Explicit `--site` keys, or every vendor, minus any `--skip-site`.
    pub(crate) fn selected_keys(&self) -> Vec<String> {
        let base = if self.sites.is_empty() {
            all_vendor_keys()
        } else {
            self.sites.clone()
        };
        base.into_iter()
            .filter(|k| !self.skip_sites.contains(k))
            .collect()
    }

    fn source_kind(&self, config: &AppConfig) -> SourceKind {
        self.source.unwrap_or(if config.use_fixture {
            SourceKind::Fixture
        } else {
            SourceKind::Remote
        })
    }
}

/// Build the offer source selected for this run.
///
/// # Errors
///
/// Returns an error if the remote client cannot be constructed (bad base
/// URL or TLS setup).
pub(crate) fn build_source(
    config: &AppConfig,
    kind: SourceKind,
) -> anyhow::Result<Box<dyn OfferSource>> {
    match kind {
        SourceKind::Fixture => Ok(Box::new(FixtureSource::with_delay(
            Duration::from_millis(config.fixture_delay_ms),
        ))),
        SourceKind::Remote => Ok(Box::new(RemoteSource::new(
            &config.search_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?)),
    }
}

/// Run one search and print the outcome.
///
/// # Errors
///
/// Returns an error if no vendor is selected, the search fails, or the
/// export cannot be written. Exporting an empty result is refused.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let request = SearchRequest::new(args.size(), args.brand.as_str(), args.selected_keys())?;
    let source = build_source(config, args.source_kind(config))?;

    let orchestrator = SearchOrchestrator::new();
    if args.desc {
        orchestrator.toggle_sort().await;
    }

    let result = orchestrator.search(&request, source.as_ref()).await?;
    let rows = result.sorted_offers();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("size: {}", request.size());
        for line in output::render_table(&rows, result.cheapest_price()) {
            println!("{line}");
        }
        let summary = summarize(&result, request.selected_vendor_keys().len());
        for line in output::render_summary(&summary) {
            println!("{line}");
        }
    }

    if args.export {
        if rows.is_empty() {
            anyhow::bail!("nothing to export: the search returned no offers");
        }
        let path = write_export(&config.export_dir, request.size(), &rows)?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "wrote CSV export");
        println!("exported {} offers to {}", rows.len(), path.display());
    }

    Ok(())
}

use anyhow::Context;
use chrono::Months;
use epi_core::{
    AnalysisConfig, AnalysisKind, AnalysisRequest, Analyzer, Dimension, FilterSpec, Frequency,
    RecordStore, RelativeAnchor, TimeWindow,
};
use log::{error, info};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: epi-core <store.json>")?;

    let start = Instant::now();
    let store = RecordStore::load_json(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let config = AnalysisConfig {
        relative_anchor: RelativeAnchor::DatasetMax,
        ..AnalysisConfig::default()
    };
    info!("{config}");
    let analyzer = Analyzer::new(&store, config)?;

    let mut requests = vec![
        AnalysisRequest::unfiltered(AnalysisKind::Count(Dimension::Region)),
        AnalysisRequest::unfiltered(AnalysisKind::CountPair(
            Dimension::Gender,
            Dimension::AgeGroup,
        )),
        AnalysisRequest::unfiltered(AnalysisKind::HighestRegion),
        AnalysisRequest::unfiltered(AnalysisKind::RatePerCapita { per: None }),
        AnalysisRequest::unfiltered(AnalysisKind::DensityCorrelation),
        AnalysisRequest::unfiltered(AnalysisKind::HighRisk { threshold: None }),
        AnalysisRequest::new(
            FilterSpec::new().with_window(TimeWindow::last_year()),
            AnalysisKind::Trend {
                frequency: Frequency::Month,
                by: None,
            },
        ),
    ];

    // Compare the last year of data against the year before it
    if let Some((_, last)) = store.date_span() {
        let cutoff = last - Months::new(12);
        requests.push(AnalysisRequest::new(
            FilterSpec::new().with_window(TimeWindow::LastYears(2)),
            AnalysisKind::PolicyImpact { cutoff },
        ));
    }

    for (request, result) in requests.iter().zip(analyzer.evaluate_batch(&requests)) {
        match result {
            Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
            Err(e) => error!("{:?} failed: {e}", request.kind),
        }
    }

    info!(
        "Evaluated {} requests over {} cases in {:?}",
        requests.len(),
        store.total_cases(),
        start.elapsed()
    );
    Ok(())
}

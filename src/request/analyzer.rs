//! The analysis pipeline: filter, then analyse

use chrono::NaiveDate;
use log::{debug, info};
use rayon::prelude::*;
use std::time::Instant;

use crate::algorithm::aggregate::{
    counts_by_region, group_count, group_count_pair, highest_region, rate_per_capita,
};
use crate::algorithm::correlation::density_prevalence;
use crate::algorithm::policy::assess;
use crate::algorithm::risk::{classify_risk, high_risk};
use crate::algorithm::temporal::{Resampled, resample};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::filter::{FacilitySpec, apply, apply_facilities, reference_date};
use crate::models::{CaseRecord, FacilityRecord};
use crate::request::{AnalysisKind, AnalysisOutput, AnalysisReport, AnalysisRequest};
use crate::store::RecordStore;

/// Runs requests against a read-only record store
#[derive(Debug, Clone)]
pub struct Analyzer<'a> {
    store: &'a RecordStore,
    config: AnalysisConfig,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` if the configuration is invalid.
    pub fn new(store: &'a RecordStore, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The date relative windows are measured back from right now
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        reference_date(self.config.relative_anchor, self.store.cases())
    }

    /// Filter and analyse, resolving relative windows with
    /// [`Analyzer::reference_date`]
    ///
    /// # Errors
    /// Returns any error raised by the requested analysis.
    pub fn evaluate(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        self.evaluate_at(request, self.reference_date())
    }

    /// Filter and analyse against a fixed reference date
    ///
    /// # Errors
    /// Returns any error raised by the requested analysis.
    pub fn evaluate_at(
        &self,
        request: &AnalysisRequest,
        reference: NaiveDate,
    ) -> Result<AnalysisReport> {
        let start = Instant::now();
        let filtered = apply(self.store.cases(), &request.filter, reference);
        let output = self.analyse(&filtered, &request.kind)?;

        info!(
            "{:?} over {} of {} cases in {:?}",
            request.kind,
            filtered.len(),
            self.store.total_cases(),
            start.elapsed()
        );

        Ok(AnalysisReport {
            filters: request.filter.describe(),
            total_cases: self.store.total_cases(),
            filtered_cases: filtered.len(),
            reference_date: reference,
            output,
        })
    }

    /// Evaluate independent requests in parallel
    ///
    /// All requests share one reference date. Results come back in request
    /// order.
    pub fn evaluate_batch(&self, requests: &[AnalysisRequest]) -> Vec<Result<AnalysisReport>> {
        let reference = self.reference_date();
        debug!("Evaluating {} requests against {reference}", requests.len());
        requests
            .par_iter()
            .map(|request| self.evaluate_at(request, reference))
            .collect()
    }

    /// Facilities matching a facility filter
    #[must_use]
    pub fn facilities(&self, spec: &FacilitySpec) -> Vec<&'a FacilityRecord> {
        apply_facilities(self.store.facilities(), spec)
    }

    fn analyse(&self, cases: &[&CaseRecord], kind: &AnalysisKind) -> Result<AnalysisOutput> {
        let output = match kind {
            AnalysisKind::Count(dimension) => {
                AnalysisOutput::Counts(group_count(cases, *dimension))
            }
            AnalysisKind::CountPair(first, second) => {
                AnalysisOutput::Counts(group_count_pair(cases, *first, *second))
            }
            AnalysisKind::HighestRegion => AnalysisOutput::Highest(highest_region(cases)),
            AnalysisKind::RatePerCapita { per } => {
                let per = per.unwrap_or(self.config.per_capita_base);
                AnalysisOutput::Rates(rate_per_capita(
                    &counts_by_region(cases),
                    self.store.profiles(),
                    per,
                )?)
            }
            AnalysisKind::DensityCorrelation => {
                AnalysisOutput::Correlation(density_prevalence(self.store, cases)?)
            }
            AnalysisKind::HighRisk { threshold } => {
                let threshold = threshold.unwrap_or(self.config.risk_threshold);
                let prevalence =
                    rate_per_capita(&counts_by_region(cases), self.store.profiles(), 1)?;
                AnalysisOutput::Risk {
                    threshold,
                    high_risk: high_risk(&prevalence, threshold)?,
                    regions: classify_risk(&prevalence, threshold)?,
                }
            }
            AnalysisKind::Trend { frequency, by } => {
                let series = resample(cases, *frequency, *by);
                let summary = match &series {
                    Resampled::Single(single) => single.summary(),
                    Resampled::ByCategory(_) => None,
                };
                AnalysisOutput::Trend { series, summary }
            }
            AnalysisKind::PolicyImpact { cutoff } => AnalysisOutput::Policy(assess(cases, *cutoff)),
        };
        Ok(output)
    }
}

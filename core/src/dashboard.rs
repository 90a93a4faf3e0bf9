//! The dashboard owns the dataset and turns selections into views.
//!
//! RECOMPUTE ORDER (fixed):
//!   1. Filter the dataset by the selection
//!   2. Monthly trend
//!   3. Category ranking
//!   4. Regional share
//!   5. Correlation matrix
//!   6. Distribution histogram
//!   7. Metrics
//!
//! RULES:
//!   - The dataset is generated once and never mutated.
//!   - Every view is recomputed from scratch; nothing is incremental.
//!   - The optional cache is keyed by selection and never needs
//!     invalidating, since the dataset cannot change.

use crate::{
    aggregation::{
        category_ranking, correlation_matrix, histogram, monthly_trend, regional_share,
        CategoryRanking, CorrelationMatrix, Histogram, MonthlyTrend, RegionalShare,
    },
    command::FilterCommand,
    config::PipelineConfig,
    error::PipelineResult,
    filter::{filter, Selection, WorkingSet},
    generator,
    metrics::{FormattedMetrics, MetricsSnapshot},
    record::Dataset,
};
use serde::Serialize;
use std::collections::HashMap;

/// Everything the presentation layer renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection:    Selection,
    pub trend:        MonthlyTrend,
    pub ranking:      CategoryRanking,
    pub share:        RegionalShare,
    pub correlation:  CorrelationMatrix,
    pub distribution: Histogram,
    pub metrics:      MetricsSnapshot,
    pub formatted:    FormattedMetrics,
}

/// The filter options the presentation layer offers, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub regions:    Vec<String>,
}

pub struct Dashboard {
    config:    PipelineConfig,
    dataset:   Dataset,
    selection: Selection,
    cache:     HashMap<Selection, DashboardView>,
}

impl Dashboard {
    /// Validate the config, generate its dataset and select everything.
    pub fn build(config: PipelineConfig) -> PipelineResult<Self> {
        let dataset = generator::generate(&config)?;
        Ok(Self::with_dataset(config, dataset))
    }

    /// Wrap an existing dataset. Used by tests with hand-built records.
    pub fn with_dataset(config: PipelineConfig, dataset: Dataset) -> Self {
        let selection = Selection::all(&config);
        Self {
            config,
            dataset,
            selection,
            cache: HashMap::new(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            categories: self.config.categories.clone(),
            regions:    self.config.regions.clone(),
        }
    }

    pub fn working_set(&self, selection: &Selection) -> WorkingSet<'_> {
        filter(&self.dataset, selection)
    }

    /// Full recomputation for `selection`. Never touches the cache.
    pub fn compute(&self, selection: &Selection) -> DashboardView {
        let set = self.working_set(selection);
        let metrics = MetricsSnapshot::compute(&set, self.config.growth_cutoff);

        let view = DashboardView {
            selection:    selection.clone(),
            trend:        monthly_trend(&set),
            ranking:      category_ranking(&set),
            share:        regional_share(&set),
            correlation:  correlation_matrix(&set),
            distribution: histogram(&set, self.config.histogram_bins),
            formatted:    metrics.formatted(),
            metrics,
        };

        log::debug!(
            "recomputed view: {} of {} records, total={:.0}, growth={:.1}%",
            set.len(),
            self.dataset.len(),
            view.metrics.total,
            view.metrics.growth_pct
        );
        view
    }

    /// Memoized view for `selection`.
    ///
    /// The cache is keyed by the selection narrowed to the catalog, so it
    /// holds at most 2^|categories| × 2^|regions| views however many
    /// unknown labels the presentation layer sends.
    pub fn view(&mut self, selection: &Selection) -> &DashboardView {
        let key = selection.within_catalog(&self.config);
        if !self.cache.contains_key(&key) {
            let view = self.compute(&key);
            self.cache.insert(key.clone(), view);
        } else {
            log::debug!("view cache hit ({} cached)", self.cache.len());
        }
        &self.cache[&key]
    }

    /// View for the active selection.
    pub fn current_view(&mut self) -> &DashboardView {
        let selection = self.selection.clone();
        self.view(&selection)
    }

    /// Apply a filter command and return the view it selects.
    pub fn handle(&mut self, command: &FilterCommand) -> &DashboardView {
        self.selection = command.apply(&self.selection, &self.config);
        log::debug!("selection changed by {command:?}");
        self.current_view()
    }

    pub fn cached_views(&self) -> usize {
        self.cache.len()
    }
}

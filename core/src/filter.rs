//! Category/region filtering.
//!
//! A selection is a membership test: OR within a dimension, AND
//! across dimensions. An empty set on either dimension selects
//! nothing; it never means "all".

use crate::{
    config::PipelineConfig,
    record::{Dataset, SaleRecord},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub categories: BTreeSet<String>,
    pub regions:    BTreeSet<String>,
}

impl Selection {
    pub fn new<C, R>(categories: C, regions: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            regions:    regions.into_iter().map(Into::into).collect(),
        }
    }

    /// The default selection: every catalog entry on both dimensions.
    pub fn all(config: &PipelineConfig) -> Self {
        Self::new(config.categories.iter().cloned(), config.regions.iter().cloned())
    }

    /// The labels of this selection that exist in the catalog. Filters
    /// exactly like `self`, since unknown labels match no record.
    pub fn within_catalog(&self, config: &PipelineConfig) -> Self {
        Self {
            categories: self
                .categories
                .iter()
                .filter(|c| config.categories.contains(c))
                .cloned()
                .collect(),
            regions: self
                .regions
                .iter()
                .filter(|r| config.regions.contains(r))
                .cloned()
                .collect(),
        }
    }

    pub fn matches(&self, record: &SaleRecord) -> bool {
        self.categories.contains(&record.category) && self.regions.contains(&record.region)
    }

    /// Restrict `records` to this selection.
    pub fn apply<'a, I>(&self, records: I) -> WorkingSet<'a>
    where
        I: IntoIterator<Item = &'a SaleRecord>,
    {
        WorkingSet {
            rows: records.into_iter().filter(|r| self.matches(r)).collect(),
        }
    }
}

/// The records passing the active selection, borrowed from the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingSet<'a> {
    rows: Vec<&'a SaleRecord>,
}

impl<'a> WorkingSet<'a> {
    /// The whole dataset, unfiltered.
    pub fn full(dataset: &'a Dataset) -> Self {
        Self {
            rows: dataset.records().iter().collect(),
        }
    }

    pub fn rows(&self) -> &[&'a SaleRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SaleRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Narrow this view further. Filtering with the same selection
    /// again returns the same rows.
    pub fn refine(&self, selection: &Selection) -> WorkingSet<'a> {
        selection.apply(self.iter())
    }
}

/// Apply `selection` to the full dataset.
pub fn filter<'a>(dataset: &'a Dataset, selection: &Selection) -> WorkingSet<'a> {
    selection.apply(dataset.records())
}

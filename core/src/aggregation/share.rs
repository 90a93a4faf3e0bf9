use super::SHARE_TITLE;
use crate::filter::WorkingSet;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionShare {
    pub region:      String,
    pub total_value: f64,
    /// total_value / total of all regions; 0.0 when that total is 0.
    pub proportion:  f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalShare {
    pub title:   &'static str,
    pub total:   f64,
    pub regions: Vec<RegionShare>,
}

impl RegionalShare {
    pub fn get(&self, region: &str) -> Option<&RegionShare> {
        self.regions.iter().find(|r| r.region == region)
    }
}

/// Proportion of `value` in `total`, with 0.0 for a non-positive total.
pub fn proportion(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total
    } else {
        0.0
    }
}

/// Sales per region, ordered by region label.
pub fn regional_share(set: &WorkingSet<'_>) -> RegionalShare {
    let mut by_region: BTreeMap<&str, f64> = BTreeMap::new();
    for record in set.iter() {
        *by_region.entry(record.region.as_str()).or_insert(0.0) += record.total_value();
    }

    let total: f64 = by_region.values().sum();
    let regions = by_region
        .into_iter()
        .map(|(region, total_value)| RegionShare {
            region: region.to_string(),
            total_value,
            proportion: proportion(total_value, total),
        })
        .collect();

    RegionalShare {
        title: SHARE_TITLE,
        total,
        regions,
    }
}

use crate::{config::PipelineConfig, filter::Selection};
use serde::{Deserialize, Serialize};

/// Filter changes reported by the presentation layer.
/// Variants may be added. Never remove or reorder them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum FilterCommand {
    SetCategories { categories: Vec<String> },
    SetRegions { regions: Vec<String> },
    /// Back to the full catalog on both dimensions.
    Reset,
}

impl FilterCommand {
    /// The selection after applying this command to `current`.
    ///
    /// Labels outside the catalog are kept (they simply match nothing)
    /// and logged.
    pub fn apply(&self, current: &Selection, config: &PipelineConfig) -> Selection {
        match self {
            Self::SetCategories { categories } => {
                warn_unknown("category", categories, &config.categories);
                Selection {
                    categories: categories.iter().cloned().collect(),
                    regions:    current.regions.clone(),
                }
            }
            Self::SetRegions { regions } => {
                warn_unknown("region", regions, &config.regions);
                Selection {
                    categories: current.categories.clone(),
                    regions:    regions.iter().cloned().collect(),
                }
            }
            Self::Reset => Selection::all(config),
        }
    }
}

fn warn_unknown(kind: &str, chosen: &[String], catalog: &[String]) {
    for label in chosen.iter().filter(|l| !catalog.contains(l)) {
        log::warn!("Unknown {kind} '{label}' in selection; it will match no records");
    }
}

use super::RANKING_TITLE;
use crate::filter::WorkingSet;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category:    String,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRanking {
    pub title:   &'static str,
    pub entries: Vec<CategoryTotal>,
}

impl CategoryRanking {
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.total_value).sum()
    }

    pub fn top(&self) -> Option<&CategoryTotal> {
        self.entries.first()
    }
}

/// Sales per category, largest first.
/// Equal totals keep the order in which their categories first appear.
pub fn category_ranking(set: &WorkingSet<'_>) -> CategoryRanking {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CategoryTotal> = Vec::new();

    for record in set.iter() {
        let idx = *slots.entry(record.category.as_str()).or_insert_with(|| {
            entries.push(CategoryTotal {
                category:    record.category.clone(),
                total_value: 0.0,
            });
            entries.len() - 1
        });
        entries[idx].total_value += record.total_value();
    }

    // sort_by is stable, which is what keeps ties in first-seen order.
    entries.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));

    CategoryRanking {
        title: RANKING_TITLE,
        entries,
    }
}

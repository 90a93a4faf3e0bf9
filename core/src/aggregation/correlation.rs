use super::CORRELATION_TITLE;
use crate::filter::WorkingSet;
use serde::Serialize;

/// Row/column labels, in matrix order.
pub const VARIABLES: [&str; 3] = ["quantity", "unit_price", "total_value"];

/// Pearson correlation across quantity, unit_price and total_value.
/// `None` marks an undefined coefficient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub title:  &'static str,
    pub labels: [&'static str; 3],
    pub values: [[Option<f64>; 3]; 3],
}

impl CorrelationMatrix {
    fn undefined() -> Self {
        Self {
            title:  CORRELATION_TITLE,
            labels: VARIABLES,
            values: [[None; 3]; 3],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Look up a coefficient by variable names.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let row = VARIABLES.iter().position(|v| *v == a)?;
        let col = VARIABLES.iter().position(|v| *v == b)?;
        self.get(row, col)
    }
}

/// Pearson's r for two equally long samples.
///
/// None when there are fewer than two pairs or either side has
/// zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
    let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx <= 0.0 || syy <= 0.0 {
        return None;
    }
    Some((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}

/// Under two records every cell is undefined. Otherwise the diagonal
/// is 1.0 and the matrix is symmetric by construction.
pub fn correlation_matrix(set: &WorkingSet<'_>) -> CorrelationMatrix {
    if set.len() < 2 {
        return CorrelationMatrix::undefined();
    }

    let columns: [Vec<f64>; 3] = [
        set.iter().map(|r| f64::from(r.quantity)).collect(),
        set.iter().map(|r| r.unit_price).collect(),
        set.iter().map(|r| r.total_value()).collect(),
    ];

    let mut matrix = CorrelationMatrix::undefined();
    for i in 0..VARIABLES.len() {
        matrix.values[i][i] = Some(1.0);
        for j in (i + 1)..VARIABLES.len() {
            let r = pearson(&columns[i], &columns[j]);
            matrix.values[i][j] = r;
            matrix.values[j][i] = r;
        }
    }
    matrix
}

//! Ordinary least squares for a single feature.

/// Fitted `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Closed-form least-squares line through `(xs[i], ys[i])`.
///
/// Returns `None` for fewer than two points, mismatched lengths or when all
/// `xs` are equal.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Option<LineFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let (sxx, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
            let dx = x - x_mean;
            (sxx + dx * dx, sxy + dx * (y - y_mean))
        });
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LineFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

/// Least-squares slope of `values` against their position `0, 1, 2, ...`.
pub fn index_slope(values: &[f64]) -> Option<f64> {
    let xs: Vec<f64> = (0..values.len()).map(|idx| idx as f64).collect();
    fit_line(&xs, values).map(|fit| fit.slope)
}

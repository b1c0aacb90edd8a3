// Bounded series and chart series domain models

/// Cap on displayed samples. Longer extractions keep only the trailing window.
pub const MAX_POINTS: usize = 50;

/// The most recent `MAX_POINTS` extracted samples, in backend order.
/// Replaced wholesale on each successful fetch, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundedSeries {
    samples: Vec<f64>,
}

impl BoundedSeries {
    /// Bound an extracted sample sequence to the trailing `MAX_POINTS`
    /// entries. Order is preserved and the operation is idempotent: feeding a
    /// series' own samples back through yields the same series.
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        if samples.len() > MAX_POINTS {
            samples.drain(..samples.len() - MAX_POINTS);
        }
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Chart-ready view of a `BoundedSeries`: positional labels paired with the
/// sample values. Pure derivation with no lifecycle of its own; recomputed
/// whenever the underlying series is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn derive(series: &BoundedSeries) -> Self {
        let labels = (1..=series.len()).map(|i| format!("Data {}", i)).collect();
        Self {
            labels,
            values: series.samples().to_vec(),
        }
    }
}

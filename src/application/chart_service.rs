// Flow chart service - Use case for fetching and bounding flow-rate series
use crate::application::record_repository::{Record, RecordRepository, RetrievalError};
use crate::domain::query::QueryParameters;
use crate::domain::series::{BoundedSeries, ChartSeries};
use std::sync::Arc;

/// Fixed path to the numeric payload field inside an uplink record.
const FLOW_RATE_PATH: &str = "/uplink_message/decoded_payload/usr1_flowRate";

/// Extract the flow-rate sample from one record. Total: a missing key at any
/// level or a non-numeric terminal value yields 0 rather than an error, so
/// one malformed record never breaks the series.
pub fn extract_flow_rate(record: &Record) -> f64 {
    record
        .pointer(FLOW_RATE_PATH)
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Holds the currently displayed series and refreshes it on demand.
///
/// Each successful refresh replaces the series wholesale; a failed refresh
/// leaves it untouched so the display keeps its prior state. Refresh takes
/// `&mut self`, so two refreshes of one service value cannot overlap and the
/// stale-response-overwrites-fresh race is ruled out by construction.
pub struct FlowChartService {
    repository: Arc<dyn RecordRepository>,
    series: BoundedSeries,
}

impl FlowChartService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self {
            repository,
            series: BoundedSeries::default(),
        }
    }

    /// One user-triggered fetch: retrieve records, extract one sample per
    /// record in order, bound to the trailing window, replace the series.
    pub async fn refresh(&mut self, params: &QueryParameters) -> Result<(), RetrievalError> {
        let records = self.repository.fetch_records(params).await?;
        let samples: Vec<f64> = records.iter().map(extract_flow_rate).collect();
        self.series = BoundedSeries::from_samples(samples);

        tracing::debug!(
            "Replaced series for measurement {}: {} samples",
            params.measurement,
            self.series.len()
        );
        Ok(())
    }

    pub fn series(&self) -> &BoundedSeries {
        &self.series
    }

    /// Recompute the chart-ready view of the current series.
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries::derive(&self.series)
    }
}

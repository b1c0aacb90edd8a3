// Chart payload handed to the rendering collaborator
use crate::domain::series::ChartSeries;
use serde::Serialize;

/// Line-chart payload in the shape the renderer consumes: the derived labels
/// and values plus static presentation options passed through unchanged.
#[derive(Debug, Serialize)]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    pub point_radius: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub animation: AnimationOptions,
    pub elements: ElementOptions,
    pub scales: ScaleOptions,
}

#[derive(Debug, Serialize)]
pub struct AnimationOptions {
    pub duration: u32,
    pub easing: String,
}

#[derive(Debug, Serialize)]
pub struct ElementOptions {
    pub line: LineOptions,
    pub point: PointOptions,
}

#[derive(Debug, Serialize)]
pub struct LineOptions {
    pub tension: f64,
}

#[derive(Debug, Serialize)]
pub struct PointOptions {
    pub radius: u32,
}

#[derive(Debug, Serialize)]
pub struct ScaleOptions {
    pub y: AxisOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            animation: AnimationOptions {
                duration: 500,
                easing: "easeOutQuad".to_string(),
            },
            elements: ElementOptions {
                line: LineOptions { tension: 0.3 },
                point: PointOptions { radius: 2 },
            },
            scales: ScaleOptions {
                y: AxisOptions {
                    begin_at_zero: false,
                },
            },
        }
    }
}

impl ChartPayload {
    pub fn new(chart: ChartSeries) -> Self {
        Self {
            labels: chart.labels,
            datasets: vec![Dataset {
                label: "usr1_flowRate".to_string(),
                data: chart.values,
                border_color: "red".to_string(),
                background_color: "rgba(255, 0, 0, 0.2)".to_string(),
                border_width: 2,
                point_radius: 3,
            }],
            options: ChartOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::BoundedSeries;

    #[test]
    fn test_payload_pairs_labels_with_values() {
        let series = BoundedSeries::from_samples(vec![5.0, 7.0, 9.0]);
        let payload = ChartPayload::new(ChartSeries::derive(&series));

        assert_eq!(payload.labels, vec!["Data 1", "Data 2", "Data 3"]);
        assert_eq!(payload.datasets.len(), 1);
        assert_eq!(payload.datasets[0].label, "usr1_flowRate");
        assert_eq!(payload.datasets[0].data, vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_payload_serializes_renderer_keys() {
        let series = BoundedSeries::from_samples(vec![1.0]);
        let payload = ChartPayload::new(ChartSeries::derive(&series));
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["datasets"][0]["borderColor"], "red");
        assert_eq!(json["options"]["animation"]["easing"], "easeOutQuad");
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], false);
    }
}

use crate::domain::query::{QueryParameters, TimeUnit};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub backend: BackendSettings,
    #[serde(default)]
    pub query: QueryDefaults,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

/// Query parameters used when the config file does not override them.
#[derive(Debug, Deserialize, Clone)]
pub struct QueryDefaults {
    #[serde(default = "default_measurement")]
    pub measurement: String,
    #[serde(default = "default_magnitude")]
    pub magnitude: u32,
    #[serde(default = "default_unit")]
    pub unit: TimeUnit,
}

fn default_measurement() -> String {
    "mqtt_data".to_string()
}

fn default_magnitude() -> u32 {
    3
}

fn default_unit() -> TimeUnit {
    TimeUnit::Months
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            measurement: default_measurement(),
            magnitude: default_magnitude(),
            unit: default_unit(),
        }
    }
}

impl QueryDefaults {
    pub fn to_parameters(&self) -> QueryParameters {
        QueryParameters::new(self.measurement.clone(), self.magnitude, self.unit)
    }
}

pub fn load_backend_config() -> anyhow::Result<BackendConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/backend"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_query_table_absent() {
        let config: BackendConfig =
            toml::from_str("[backend]\nbase_url = \"http://localhost:8080\"").unwrap();

        let params = config.query.to_parameters();
        assert_eq!(params.measurement, "mqtt_data");
        assert_eq!(params.magnitude, 3);
        assert_eq!(params.unit, TimeUnit::Months);
    }

    #[test]
    fn test_query_table_overrides_defaults() {
        let config: BackendConfig = toml::from_str(
            "[backend]\nbase_url = \"http://localhost:8080\"\n\n[query]\nmeasurement = \"pump_data\"\nmagnitude = 6\nunit = \"h\"",
        )
        .unwrap();

        let params = config.query.to_parameters();
        assert_eq!(params.measurement, "pump_data");
        assert_eq!(params.magnitude, 6);
        assert_eq!(params.unit, TimeUnit::Hours);
    }
}

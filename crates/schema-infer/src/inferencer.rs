//! Sampling-based schema inferencer.

use crate::classify::classify_field;
use crate::config::{InferenceConfig, SamplingPolicy};
use grid_core::{FieldConfig, FieldValue, Row};
use tracing::{debug, info};

/// Derives a field configuration for every key seen in a leading sample of
/// the records.
///
/// Keys that only appear after the sampling window are never classified.
#[derive(Debug, Clone, Default)]
pub struct SchemaInferencer {
    config: InferenceConfig,
}

impl SchemaInferencer {
    /// Create an inferencer with the given configuration.
    pub fn new(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Create an inferencer with the default configuration and the given policy.
    pub fn with_policy(policy: SamplingPolicy) -> Self {
        Self::new(InferenceConfig::default().with_sampling(policy))
    }

    /// The leading records that will be inspected.
    pub fn sample<'a>(&self, records: &'a [Row]) -> &'a [Row] {
        &records[..self.config.sampling.window(records.len())]
    }

    /// Infer one configuration per distinct key in the sample, in first-seen order.
    pub fn infer(&self, records: &[Row]) -> Vec<FieldConfig> {
        let sample = self.sample(records);
        if sample.is_empty() {
            return Vec::new();
        }

        let keys = discover_keys(sample);
        let configs: Vec<FieldConfig> = keys
            .iter()
            .map(|key| {
                let values: Vec<&FieldValue> =
                    sample.iter().filter_map(|row| row.get(key)).collect();
                let config = classify_field(key, &values, &self.config.currency);
                debug!("Classified field '{}' as {}", key, config.kind.name());
                config
            })
            .collect();

        info!(
            "Inferred {} fields from {} of {} records",
            configs.len(),
            sample.len(),
            records.len()
        );
        configs
    }
}

/// Union of keys across `rows`, in first-seen order.
pub fn discover_keys(rows: &[Row]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}

/// Infer field configurations with the standard policy (10 %, min 5, max 50).
pub fn infer(records: &[Row]) -> Vec<FieldConfig> {
    SchemaInferencer::default().infer(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::{FieldFormat, FieldKind};

    #[test]
    fn test_empty_input() {
        assert!(infer(&[]).is_empty());
    }

    #[test]
    fn test_keys_discovered_across_sample() {
        let rows = vec![
            Row::new().with("a", 1i64),
            Row::new().with("a", 2i64),
            Row::new().with("a", 3i64).with("b", "late"),
        ];
        let configs = infer(&rows);

        let keys: Vec<&str> = configs.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_sampling_window_excludes_later_records() {
        // 200 records under the standard policy: exactly the first 20 are inspected
        let mut rows: Vec<Row> = (0..200)
            .map(|i| Row::new().with("id", i as i64).with("status", "open"))
            .collect();
        rows[19].insert("lastSampled", "x");
        rows[20].insert("unsampled", "y");
        rows[150].insert("status", 12i64);

        let inferencer = SchemaInferencer::with_policy(SamplingPolicy::standard());
        assert_eq!(inferencer.sample(&rows).len(), 20);

        let configs = inferencer.infer(&rows);
        let keys: Vec<&str> = configs.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["id", "status", "lastSampled"]);

        let status = &configs[1];
        assert_eq!(
            status.kind,
            FieldKind::Enumerated {
                values: vec!["open".to_string()]
            }
        );
    }

    #[test]
    fn test_missing_key_counts_as_missing() {
        let rows = vec![
            Row::new().with("price", 10.5),
            Row::new(),
            Row::new().with("price", FieldValue::Null),
        ];
        let configs = infer(&rows);

        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].kind, FieldKind::Numeric);
        assert!(matches!(configs[0].format, FieldFormat::Currency { .. }));
    }

    #[test]
    fn test_compact_policy() {
        let rows: Vec<Row> = (0..100)
            .map(|i| Row::new().with(format!("f{i}"), 1i64))
            .collect();

        let inferencer = SchemaInferencer::with_policy(SamplingPolicy::compact());
        assert_eq!(inferencer.infer(&rows).len(), 5);
    }

    #[test]
    fn test_currency_code_from_config() {
        let config = InferenceConfig {
            currency: "EUR".to_string(),
            ..InferenceConfig::default()
        };
        let rows = vec![Row::new().with("amount", 5i64)];

        let configs = SchemaInferencer::new(config).infer(&rows);
        assert_eq!(
            configs[0].format,
            FieldFormat::Currency {
                code: "EUR".to_string()
            }
        );
    }
}

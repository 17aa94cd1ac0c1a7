use anyhow::{ensure, Context};
use launchcore::dataset::Dataset;
use launchcore::records::{LaunchRecord, OutcomeClass, KNOWN_SITES};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic launch table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub records: usize,
    pub seed: u64,
    pub success_rate: f64,
    pub max_payload_kg: f64,
    pub sites: Vec<String>,
    pub boosters: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 56,
            seed: 0,
            success_rate: 0.42,
            max_payload_kg: 9_600.0,
            sites: KNOWN_SITES.iter().map(|site| site.to_string()).collect(),
            boosters: ["v1.0", "v1.1", "FT", "B4", "B5"]
                .iter()
                .map(|booster| booster.to_string())
                .collect(),
        }
    }
}

impl GeneratorConfig {
    fn normalized_success_rate(&self) -> f64 {
        if self.success_rate.is_nan() {
            0.0
        } else {
            self.success_rate.clamp(0.0, 1.0)
        }
    }

    fn normalized_max_payload(&self) -> f64 {
        if self.max_payload_kg.is_finite() {
            self.max_payload_kg.max(0.0)
        } else {
            0.0
        }
    }
}

fn build_record_vector(config: &GeneratorConfig) -> anyhow::Result<Vec<LaunchRecord>> {
    ensure!(!config.sites.is_empty(), "generator needs at least one site");
    ensure!(
        !config.boosters.is_empty(),
        "generator needs at least one booster category"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let success_rate = config.normalized_success_rate();
    let max_payload = config.normalized_max_payload();
    let mut records = Vec::with_capacity(config.records);

    for index in 0..config.records {
        let site = &config.sites[rng.gen_range(0..config.sites.len())];
        // Later flights fly newer boosters, as in the real manifest.
        let era = index * config.boosters.len() / config.records.max(1);
        let booster_index = (era + rng.gen_range(0..2)).min(config.boosters.len() - 1);
        let payload = if max_payload > 0.0 {
            rng.gen_range(0.0..=max_payload).round()
        } else {
            0.0
        };
        let outcome = if rng.gen_bool(success_rate) {
            OutcomeClass::Success
        } else {
            OutcomeClass::Failure
        };
        records.push(LaunchRecord::new(
            site.as_str(),
            payload,
            outcome,
            config.boosters[booster_index].as_str(),
        ));
    }

    Ok(records)
}

pub fn build_dataset_from_config(config: &GeneratorConfig) -> anyhow::Result<Dataset> {
    let records = build_record_vector(config)?;
    Dataset::from_records(records).context("validating synthetic launch records")
}

pub fn build_dataset(records: usize, seed: u64) -> anyhow::Result<Dataset> {
    let config = GeneratorConfig {
        records,
        seed,
        ..Default::default()
    };
    build_dataset_from_config(&config)
}

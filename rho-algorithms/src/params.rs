use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Params {
    /// Starting probability of accepting a non-improving move in one update.
    pub base_accept_probability: f64,
    /// `update_step = 1 / num_nodes ^ update_step_exponent`.
    pub update_step_exponent: f64,
    /// Stop after this many updates even if conflicts remain.
    pub max_updates: Option<u64>,
    pub progress_interval: u64,
    /// Follow every accepted update with a greedy relabel of a bad node.
    pub greedy_polish: bool,
}

impl Params {
    pub fn defaults() -> Self {
        Self {
            base_accept_probability: 0.0,
            update_step_exponent: 2.5,
            max_updates: None,
            progress_interval: 10_000,
            greedy_polish: false,
        }
    }

    /// Defaults overridden by any user-provided key.
    /// Falls back to defaults if the merged map does not deserialize.
    pub fn initialize(hyperparameters: &Option<Map<String, Value>>) -> Self {
        let mut merged_params = match serde_json::to_value(Self::defaults()) {
            Ok(v) => v,
            Err(_) => return Self::defaults(),
        };
        if let (Value::Object(ref mut obj), Some(map)) = (&mut merged_params, hyperparameters) {
            for (k, v) in map {
                obj.insert(k.clone(), v.clone());
            }
        }

        match serde_json::from_value::<Self>(merged_params) {
            Ok(params) => {
                log::debug!("Search parameters: {:?}", params);
                params
            }
            Err(e) => {
                log::warn!("Invalid hyperparameters ({}), using defaults", e);
                Self::defaults()
            }
        }
    }

    pub fn update_step(&self, num_nodes: usize) -> f64 {
        1.0 / (num_nodes as f64).powf(self.update_step_exponent)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::defaults()
    }
}

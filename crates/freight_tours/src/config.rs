use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    costs::{CostModel, SpeedProfile, StaticCosts, TimeDependentCosts},
    error::ConfigError,
    problem::{
        location::{DistanceMetric, LocationRegistry},
        time_window::Time,
    },
    processor::{TourCostAndTwProcessor, TourCostProcessor, TourStatusProcessor},
};

fn default_speed() -> f64 {
    1.0
}

fn default_cost_per_distance() -> f64 {
    1.0
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CostModelConfig {
    Static {
        #[serde(default)]
        metric: DistanceMetric,
        #[serde(default = "default_speed")]
        speed: f64,
        #[serde(default = "default_cost_per_distance")]
        cost_per_distance: f64,
    },
    TimeDependent {
        #[serde(default)]
        metric: DistanceMetric,
        time_bins: Vec<Time>,
        speeds: Vec<f64>,
        /// Costs equal travel times when unset.
        #[serde(default)]
        cost_per_distance: Option<f64>,
    },
}

impl Default for CostModelConfig {
    fn default() -> Self {
        CostModelConfig::Static {
            metric: DistanceMetric::Euclidean,
            speed: default_speed(),
            cost_per_distance: default_cost_per_distance(),
        }
    }
}

impl CostModelConfig {
    pub fn build(&self, locations: Arc<LocationRegistry>) -> Result<CostModel, ConfigError> {
        match self {
            CostModelConfig::Static {
                metric,
                speed,
                cost_per_distance,
            } => {
                if !speed.is_finite() || *speed <= 0.0 {
                    return Err(ConfigError::InvalidStaticCosts(format!(
                        "speed must be finite and positive, got {speed}"
                    )));
                }

                Ok(StaticCosts::new(locations)
                    .with_metric(*metric)
                    .with_speed(*speed)
                    .with_cost_per_distance(*cost_per_distance)
                    .into())
            }
            CostModelConfig::TimeDependent {
                metric,
                time_bins,
                speeds,
                cost_per_distance,
            } => {
                let profile = SpeedProfile::new(time_bins.clone(), speeds.clone())?;
                let costs = TimeDependentCosts::new(locations, profile).with_metric(*metric);

                Ok(match cost_per_distance {
                    Some(rate) => costs.with_cost_per_distance(*rate),
                    None => costs,
                }
                .into())
            }
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    CostOnly,
    #[default]
    CostAndTimeWindows,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct EvaluatorParams {
    #[serde(default)]
    pub cost_model: CostModelConfig,
    #[serde(default)]
    pub processor: ProcessorKind,
}

impl EvaluatorParams {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build_processor(
        &self,
        locations: Arc<LocationRegistry>,
    ) -> Result<Box<dyn TourStatusProcessor>, ConfigError> {
        let costs = self.cost_model.build(locations)?;

        Ok(match self.processor {
            ProcessorKind::CostOnly => Box::new(TourCostProcessor::new(costs)),
            ProcessorKind::CostAndTimeWindows => Box::new(TourCostAndTwProcessor::new(costs)),
        })
    }
}

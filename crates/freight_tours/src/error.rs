use thiserror::Error;

use crate::problem::time_window::Time;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown location: {id}")]
pub struct UnknownLocation {
    pub id: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Invalid time window [{earliest}, {latest}]")]
pub struct InvalidTimeWindow {
    pub earliest: Time,
    pub latest: Time,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourStructureError {
    #[error("Tour must begin with a start activity")]
    MissingStart,
    #[error("Tour must finish with an end activity")]
    MissingEnd,
    #[error("Start activity scheduled more than once or after other activities")]
    MisplacedStart,
    #[error("Activity scheduled after the end activity")]
    ActivityAfterEnd,
    #[error("Shipment {0} delivered without a prior pickup")]
    DeliveryWithoutPickup(String),
    #[error("Shipment {0} picked up but never delivered")]
    PickupWithoutDelivery(String),
    #[error("Shipment {0} scheduled more than once as pickup")]
    DuplicatePickup(String),
    #[error("Shipment {0} scheduled more than once as delivery")]
    DuplicateDelivery(String),
    #[error(transparent)]
    InvalidTimeWindow(#[from] InvalidTimeWindow),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeedProfileError {
    #[error("Speed profile requires at least one time bin")]
    Empty,
    #[error("Got {bins} time bins but {speeds} speed values")]
    LengthMismatch { bins: usize, speeds: usize },
    #[error("Time bin boundaries must be finite, positive and strictly increasing (at bin {0})")]
    InvalidBoundary(usize),
    #[error("Speed at bin {0} must be finite and positive")]
    InvalidSpeed(usize),
    #[error("Planning horizon must be finite and positive, got {0}")]
    InvalidHorizon(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid {0}: must be finite")]
    InvalidServiceTime(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse evaluator configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid static cost model: {0}")]
    InvalidStaticCosts(String),
    #[error(transparent)]
    SpeedProfile(#[from] SpeedProfileError),
}

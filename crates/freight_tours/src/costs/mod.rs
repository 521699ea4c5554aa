pub mod static_costs;
pub mod time_dependent_costs;

use crate::problem::{location::LocationIdx, time_window::Time};

pub use static_costs::StaticCosts;
pub use time_dependent_costs::{SpeedProfile, TimeDependentCosts};

pub type Distance = f64;
pub type Cost = f64;

/// Travel time and cost between two registered locations.
///
/// Implementations are read-only: a single instance is shared by every tour
/// evaluated against it, possibly from several threads at once.
pub trait TransportCosts: Send + Sync {
    fn travel_distance(&self, from: LocationIdx, to: LocationIdx) -> Distance;

    /// Time needed to go from `from` to `to` when leaving at `departure`.
    fn travel_time(&self, from: LocationIdx, to: LocationIdx, departure: Time) -> Time;

    fn travel_cost(&self, from: LocationIdx, to: LocationIdx, departure: Time) -> Cost;
}

impl<T: TransportCosts + ?Sized> TransportCosts for &T {
    #[inline(always)]
    fn travel_distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        (**self).travel_distance(from, to)
    }

    #[inline(always)]
    fn travel_time(&self, from: LocationIdx, to: LocationIdx, departure: Time) -> Time {
        (**self).travel_time(from, to, departure)
    }

    #[inline(always)]
    fn travel_cost(&self, from: LocationIdx, to: LocationIdx, departure: Time) -> Cost {
        (**self).travel_cost(from, to, departure)
    }
}

/// The cost models an evaluator can be configured with.
#[derive(Debug, Clone)]
pub enum CostModel {
    Static(StaticCosts),
    TimeDependent(TimeDependentCosts),
}

impl TransportCosts for CostModel {
    #[inline(always)]
    fn travel_distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        match self {
            CostModel::Static(costs) => costs.travel_distance(from, to),
            CostModel::TimeDependent(costs) => costs.travel_distance(from, to),
        }
    }

    #[inline(always)]
    fn travel_time(&self, from: LocationIdx, to: LocationIdx, departure: Time) -> Time {
        match self {
            CostModel::Static(costs) => costs.travel_time(from, to, departure),
            CostModel::TimeDependent(costs) => costs.travel_time(from, to, departure),
        }
    }

    #[inline(always)]
    fn travel_cost(&self, from: LocationIdx, to: LocationIdx, departure: Time) -> Cost {
        match self {
            CostModel::Static(costs) => costs.travel_cost(from, to, departure),
            CostModel::TimeDependent(costs) => costs.travel_cost(from, to, departure),
        }
    }
}

impl From<StaticCosts> for CostModel {
    fn from(costs: StaticCosts) -> Self {
        CostModel::Static(costs)
    }
}

impl From<TimeDependentCosts> for CostModel {
    fn from(costs: TimeDependentCosts) -> Self {
        CostModel::TimeDependent(costs)
    }
}

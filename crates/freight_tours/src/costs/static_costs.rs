use std::sync::Arc;

use crate::{
    costs::{Cost, Distance, TransportCosts},
    problem::{
        location::{DistanceMetric, LocationIdx, LocationRegistry},
        time_window::Time,
    },
};

/// Departure independent costs: `time = distance / speed` and
/// `cost = distance * cost_per_distance`. Both default to the plain distance.
#[derive(Debug, Clone)]
pub struct StaticCosts {
    locations: Arc<LocationRegistry>,
    metric: DistanceMetric,
    speed: f64,
    cost_per_distance: f64,
}

impl StaticCosts {
    pub fn new(locations: Arc<LocationRegistry>) -> Self {
        StaticCosts {
            locations,
            metric: DistanceMetric::default(),
            speed: 1.0,
            cost_per_distance: 1.0,
        }
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// `speed` must be finite and positive, checked by the configuration
    /// layer before it gets here.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_cost_per_distance(mut self, cost_per_distance: f64) -> Self {
        self.cost_per_distance = cost_per_distance;
        self
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn cost_per_distance(&self) -> f64 {
        self.cost_per_distance
    }

    pub fn locations(&self) -> &LocationRegistry {
        &self.locations
    }
}

impl TransportCosts for StaticCosts {
    #[inline(always)]
    fn travel_distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        if from == to {
            return 0.0;
        }

        self.locations
            .location(from)
            .distance(self.locations.location(to), self.metric)
    }

    #[inline(always)]
    fn travel_time(&self, from: LocationIdx, to: LocationIdx, _departure: Time) -> Time {
        self.travel_distance(from, to) / self.speed
    }

    #[inline(always)]
    fn travel_cost(&self, from: LocationIdx, to: LocationIdx, _departure: Time) -> Cost {
        self.travel_distance(from, to) * self.cost_per_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_euclidean_costs_are_symmetric() {
        let (registry, ids) = test_utils::create_registry(vec![(0.0, 0.0), (3.0, 4.0)]);
        let costs = StaticCosts::new(Arc::new(registry));

        assert_eq!(costs.travel_distance(ids[0], ids[1]), 5.0);
        assert_eq!(costs.travel_time(ids[0], ids[1], 0.0), 5.0);
        assert_eq!(costs.travel_cost(ids[1], ids[0], 42.0), 5.0);
        assert_eq!(costs.travel_time(ids[1], ids[1], 0.0), 0.0);
        assert_eq!(costs.travel_cost(ids[0], ids[0], 0.0), 0.0);
    }

    #[test]
    fn test_speed_and_rate() {
        let (registry, ids) = test_utils::create_registry(vec![(0.0, 0.0), (0.0, 10.0)]);
        let costs = StaticCosts::new(Arc::new(registry))
            .with_speed(2.0)
            .with_cost_per_distance(3.0);

        assert_eq!(costs.travel_time(ids[0], ids[1], 0.0), 5.0);
        assert_eq!(costs.travel_cost(ids[0], ids[1], 0.0), 30.0);
    }

    #[test]
    fn test_manhattan_metric() {
        let (registry, ids) = test_utils::create_registry(vec![(0.0, 9.0), (10.0, 0.0)]);
        let costs = StaticCosts::new(Arc::new(registry)).with_metric(DistanceMetric::Manhattan);

        assert_eq!(costs.travel_distance(ids[0], ids[1]), 19.0);
    }
}

use std::sync::Arc;

use tracing::trace;

use crate::{
    costs::{Cost, Distance, TransportCosts},
    error::SpeedProfileError,
    problem::{
        location::{DistanceMetric, LocationIdx, LocationRegistry},
        time_window::Time,
    },
};

/// Piecewise constant speeds over the planning horizon.
///
/// Bin `i` covers `[boundaries[i - 1], boundaries[i])`, the first bin starts
/// at time zero (earlier departures are treated as being in it). Past the last
/// boundary the final speed applies indefinitely.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedProfile {
    boundaries: Vec<Time>,
    speeds: Vec<f64>,
}

impl SpeedProfile {
    pub fn new(boundaries: Vec<Time>, speeds: Vec<f64>) -> Result<Self, SpeedProfileError> {
        if boundaries.is_empty() {
            return Err(SpeedProfileError::Empty);
        }

        if boundaries.len() != speeds.len() {
            return Err(SpeedProfileError::LengthMismatch {
                bins: boundaries.len(),
                speeds: speeds.len(),
            });
        }

        let mut previous = 0.0;
        for (bin, &boundary) in boundaries.iter().enumerate() {
            if !boundary.is_finite() || boundary <= previous {
                return Err(SpeedProfileError::InvalidBoundary(bin));
            }
            previous = boundary;
        }

        if let Some(bin) = speeds
            .iter()
            .position(|&speed| !speed.is_finite() || speed <= 0.0)
        {
            return Err(SpeedProfileError::InvalidSpeed(bin));
        }

        Ok(SpeedProfile { boundaries, speeds })
    }

    /// Splits `[0, horizon]` into `speeds.len()` bins of equal length.
    pub fn uniform(horizon: Time, speeds: Vec<f64>) -> Result<Self, SpeedProfileError> {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(SpeedProfileError::InvalidHorizon(horizon));
        }

        let bins = speeds.len();
        let boundaries = (1..=bins)
            .map(|bin| horizon * bin as f64 / bins as f64)
            .collect();

        SpeedProfile::new(boundaries, speeds)
    }

    pub fn boundaries(&self) -> &[Time] {
        &self.boundaries
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn max_speed(&self) -> f64 {
        self.speeds.iter().copied().fold(0.0, f64::max)
    }

    fn bin_at(&self, time: Time) -> usize {
        self.boundaries.partition_point(|&boundary| boundary <= time)
    }

    /// Time needed to cover `distance` when leaving at `departure`.
    pub fn travel_time(&self, distance: Distance, departure: Time) -> Time {
        if distance <= 0.0 {
            return 0.0;
        }

        let last_speed = self.speeds[self.speeds.len() - 1];
        let mut remaining = distance;
        let mut clock = departure;
        let mut bin = self.bin_at(departure);

        loop {
            let Some(&bin_end) = self.boundaries.get(bin) else {
                trace!(clock, remaining, "travelling past the last time bin");
                clock += remaining / last_speed;
                break;
            };

            let speed = self.speeds[bin];
            let reachable = (bin_end - clock) * speed;

            if reachable >= remaining {
                clock += remaining / speed;
                break;
            }

            remaining -= reachable;
            clock = bin_end;
            bin += 1;
        }

        clock - departure
    }
}

/// Travel times integrated over a [`SpeedProfile`]. Cost equals the travel
/// time unless a distance based rate is configured.
#[derive(Debug, Clone)]
pub struct TimeDependentCosts {
    locations: Arc<LocationRegistry>,
    profile: SpeedProfile,
    metric: DistanceMetric,
    cost_per_distance: Option<f64>,
}

impl TimeDependentCosts {
    pub fn new(locations: Arc<LocationRegistry>, profile: SpeedProfile) -> Self {
        TimeDependentCosts {
            locations,
            profile,
            metric: DistanceMetric::default(),
            cost_per_distance: None,
        }
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_cost_per_distance(mut self, cost_per_distance: f64) -> Self {
        self.cost_per_distance = Some(cost_per_distance);
        self
    }

    pub fn profile(&self) -> &SpeedProfile {
        &self.profile
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

impl TransportCosts for TimeDependentCosts {
    #[inline(always)]
    fn travel_distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        if from == to {
            return 0.0;
        }

        self.locations
            .location(from)
            .distance(self.locations.location(to), self.metric)
    }

    fn travel_time(&self, from: LocationIdx, to: LocationIdx, departure: Time) -> Time {
        self.profile.travel_time(self.travel_distance(from, to), departure)
    }

    fn travel_cost(&self, from: LocationIdx, to: LocationIdx, departure: Time) -> Cost {
        match self.cost_per_distance {
            Some(rate) => self.travel_distance(from, to) * rate,
            None => self.travel_time(from, to, departure),
        }
    }
}

use tracing::{debug, instrument};

use crate::{
    costs::TransportCosts,
    problem::{driver::Driver, vehicle::Vehicle},
    processor::{TourStatusProcessor, schedule},
    tour::Tour,
};

/// Transport totals plus time window feasibility.
///
/// A forward sweep computes the earliest operation start of each activity, a
/// backward sweep the latest start that still lets every later activity meet
/// its window. Legs in the backward sweep are timed at the earliest departure
/// from the forward sweep rather than at the latest departure, so the two
/// passes never have to iterate towards a fixed point; with time dependent
/// costs the latest starts are therefore an approximation.
pub struct TourCostAndTwProcessor<C> {
    costs: C,
}

impl<C: TransportCosts> TourCostAndTwProcessor<C> {
    pub fn new(costs: C) -> Self {
        TourCostAndTwProcessor { costs }
    }

    pub fn costs(&self) -> &C {
        &self.costs
    }
}

impl<C: TransportCosts> TourStatusProcessor for TourCostAndTwProcessor<C> {
    #[instrument(
        level = "trace",
        skip_all,
        fields(vehicle = vehicle.external_id(), activities = tour.len())
    )]
    fn process(&self, tour: &mut Tour, vehicle: &Vehicle, _driver: &Driver) {
        let activities = tour.activities_mut();
        let mut tour_data = schedule::update_earliest_start_times(&self.costs, activities);
        tour_data.feasible = schedule::update_latest_start_times(&self.costs, activities);

        if !tour_data.feasible {
            debug!(
                transport_time = tour_data.transport_time,
                transport_cost = tour_data.transport_cost,
                "Tour violates time windows"
            );
        }

        tour.set_tour_data(tour_data);
    }
}

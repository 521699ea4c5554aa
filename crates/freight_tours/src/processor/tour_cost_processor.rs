use tracing::instrument;

use crate::{
    costs::TransportCosts,
    problem::{driver::Driver, vehicle::Vehicle},
    processor::{TourStatusProcessor, schedule},
    tour::Tour,
};

/// Transport time and cost only, for coarse scoring of candidates. Time
/// windows only delay departures here; they never make the tour infeasible
/// and latest start times are not propagated.
pub struct TourCostProcessor<C> {
    costs: C,
}

impl<C: TransportCosts> TourCostProcessor<C> {
    pub fn new(costs: C) -> Self {
        TourCostProcessor { costs }
    }

    pub fn costs(&self) -> &C {
        &self.costs
    }
}

impl<C: TransportCosts> TourStatusProcessor for TourCostProcessor<C> {
    #[instrument(
        level = "trace",
        skip_all,
        fields(vehicle = vehicle.external_id(), activities = tour.len())
    )]
    fn process(&self, tour: &mut Tour, vehicle: &Vehicle, _driver: &Driver) {
        let activities = tour.activities_mut();
        let tour_data = schedule::update_earliest_start_times(&self.costs, activities);
        schedule::reset_latest_start_times(activities);

        tour.set_tour_data(tour_data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problem::time_window::UNBOUNDED, test_utils};

    #[test]
    fn test_calculated_costs() {
        let fixture = test_utils::StaticScenario::new();
        let processor = TourCostProcessor::new(fixture.costs());
        let mut tour = fixture.two_shipment_tour();

        processor.process(&mut tour, &fixture.vehicle, &fixture.driver);

        assert_eq!(tour.tour_data().transport_cost, 40.0);
        assert_eq!(tour.tour_data().transport_time, 40.0);
    }

    #[test]
    fn test_calculated_costs_for_another_tour() {
        let fixture = test_utils::StaticScenario::new();
        let processor = TourCostProcessor::new(fixture.costs());
        let mut tour = fixture.single_shipment_tour();

        processor.process(&mut tour, &fixture.vehicle, &fixture.driver);

        assert_eq!(tour.tour_data().transport_cost, 38.0);
        assert_eq!(tour.tour_data().transport_time, 38.0);
        assert_eq!(tour.tour_data().waiting_time, 0.0);
        assert!(tour.is_feasible());
    }

    #[test]
    fn test_earliest_times_follow_travel() {
        let fixture = test_utils::StaticScenario::new();
        let processor = TourCostProcessor::new(fixture.costs());
        let mut tour = fixture.single_shipment_tour();

        processor.process(&mut tour, &fixture.vehicle, &fixture.driver);

        let earliest = tour
            .activities()
            .iter()
            .map(|activity| activity.earliest_operation_start_time())
            .collect::<Vec<_>>();
        assert_eq!(earliest, vec![0.0, 9.0, 28.0, 38.0]);
    }

    #[test]
    fn test_time_windows_do_not_flag_infeasibility() {
        let fixture = test_utils::TimeWindowScenario::new();
        let processor = TourCostProcessor::new(fixture.static_costs());
        let mut tour = fixture.tour();

        processor.process(&mut tour, &fixture.vehicle, &fixture.driver);

        assert!(tour.is_feasible());
        assert_eq!(tour.activity(1).earliest_operation_start_time(), 10.0);
        assert_eq!(tour.activity(2).earliest_operation_start_time(), 30.0);
        assert_eq!(tour.tour_data().waiting_time, 0.0);
        assert_eq!(tour.activity(1).latest_operation_start_time(), 12.0);
        assert_eq!(tour.end().latest_operation_start_time(), UNBOUNDED);
    }
}

use crate::{
    costs::TransportCosts,
    problem::time_window::latest_start_before,
    tour::{TourData, activity::TourActivity},
};

/// Forward sweep: earliest operation start of every activity plus the
/// transport totals of the tour. Feasibility is left to the caller.
pub(super) fn update_earliest_start_times<C: TransportCosts + ?Sized>(
    costs: &C,
    activities: &mut [TourActivity],
) -> TourData {
    let mut tour_data = TourData::default();
    let Some((first, rest)) = activities.split_first_mut() else {
        return tour_data;
    };

    let first_start = first.time_window().start();
    first.set_earliest_operation_start_time(first_start);

    let mut previous_location_id = first.location_id();
    let mut departure = first_start + first.service_time();

    for activity in rest {
        let location_id = activity.location_id();
        let travel_time = costs.travel_time(previous_location_id, location_id, departure);
        let arrival = departure + travel_time;
        let start = activity.time_window().earliest_start_on_arrival(arrival);

        tour_data.transport_time += travel_time;
        tour_data.transport_cost += costs.travel_cost(previous_location_id, location_id, departure);
        tour_data.waiting_time += start - arrival;

        activity.set_earliest_operation_start_time(start);

        previous_location_id = location_id;
        departure = start + activity.service_time();
    }

    tour_data
}

/// Backward sweep: latest operation start of every activity. Legs are timed
/// at the earliest departure computed by the forward sweep, which must have
/// run first. Returns whether every activity can start within its bounds.
pub(super) fn update_latest_start_times<C: TransportCosts + ?Sized>(
    costs: &C,
    activities: &mut [TourActivity],
) -> bool {
    let Some((last, rest)) = activities.split_last_mut() else {
        return true;
    };

    let mut next_latest = last.time_window().end_or_unbounded();
    last.set_latest_operation_start_time(next_latest);

    let mut feasible = last.is_feasible();
    let mut next_location_id = last.location_id();

    for activity in rest.iter_mut().rev() {
        let departure = activity.earliest_operation_start_time() + activity.service_time();
        let travel_time = costs.travel_time(activity.location_id(), next_location_id, departure);
        let latest = latest_start_before(
            activity.time_window(),
            next_latest,
            travel_time,
            activity.service_time(),
        );

        activity.set_latest_operation_start_time(latest);
        feasible &= activity.is_feasible();

        next_latest = latest;
        next_location_id = activity.location_id();
    }

    feasible
}

/// Latest starts bounded only by each activity's own window.
pub(super) fn reset_latest_start_times(activities: &mut [TourActivity]) {
    for activity in activities {
        let latest = activity.time_window().end_or_unbounded();
        activity.set_latest_operation_start_time(latest);
    }
}

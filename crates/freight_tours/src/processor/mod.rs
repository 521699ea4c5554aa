mod schedule;
pub mod tour_cost_and_tw_processor;
pub mod tour_cost_processor;

use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

use crate::{
    problem::{driver::Driver, vehicle::Vehicle},
    tour::Tour,
};

pub use tour_cost_and_tw_processor::TourCostAndTwProcessor;
pub use tour_cost_processor::TourCostProcessor;

/// Evaluates a tour in place: computed activity times and the aggregate
/// [`crate::tour::TourData`] are overwritten on every call.
pub trait TourStatusProcessor: Send + Sync {
    fn process(&self, tour: &mut Tour, vehicle: &Vehicle, driver: &Driver);
}

impl<P: TourStatusProcessor + ?Sized> TourStatusProcessor for Box<P> {
    fn process(&self, tour: &mut Tour, vehicle: &Vehicle, driver: &Driver) {
        (**self).process(tour, vehicle, driver)
    }
}

/// Evaluates independent tours on the rayon thread pool.
pub fn process_in_parallel<P: TourStatusProcessor + ?Sized>(
    processor: &P,
    tours: &mut [Tour],
    vehicle: &Vehicle,
    driver: &Driver,
) {
    tours
        .par_iter_mut()
        .for_each(|tour| processor.process(tour, vehicle, driver));
}

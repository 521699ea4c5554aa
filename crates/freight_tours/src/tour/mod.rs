pub mod activity;
pub mod tour_builder;

use serde::Serialize;

use crate::{
    costs::Cost,
    problem::{shipment::Shipment, time_window::Time},
    tour::activity::{ActivityKind, TourActivity},
};

pub use tour_builder::TourBuilder;

/// Aggregate result of the last evaluation of a tour.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TourData {
    pub transport_time: Time,
    pub transport_cost: Cost,
    pub waiting_time: Time,
    pub feasible: bool,
}

impl Default for TourData {
    fn default() -> Self {
        TourData {
            transport_time: 0.0,
            transport_cost: 0.0,
            waiting_time: 0.0,
            feasible: true,
        }
    }
}

/// Ordered stops of one vehicle, always `Start, .., End`.
///
/// The sequence is fixed once built. Only the processors write the computed
/// activity times and the [`TourData`].
#[derive(Debug, Clone)]
pub struct Tour {
    activities: Vec<TourActivity>,
    tour_data: TourData,
}

impl Tour {
    pub(crate) fn new(activities: Vec<TourActivity>) -> Self {
        Tour {
            activities,
            tour_data: TourData::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn activities(&self) -> &[TourActivity] {
        &self.activities
    }

    pub fn activity(&self, index: usize) -> &TourActivity {
        &self.activities[index]
    }

    pub fn start(&self) -> &TourActivity {
        &self.activities[0]
    }

    pub fn end(&self) -> &TourActivity {
        &self.activities[self.len() - 1]
    }

    pub fn tour_data(&self) -> &TourData {
        &self.tour_data
    }

    pub fn is_feasible(&self) -> bool {
        self.tour_data.feasible
    }

    /// Shipments served by the tour, in pickup order.
    pub fn shipments(&self) -> impl Iterator<Item = &Shipment> {
        self.activities
            .iter()
            .filter_map(|activity| match activity.kind() {
                ActivityKind::Pickup(shipment) => Some(shipment.as_ref()),
                _ => None,
            })
    }

    pub(crate) fn activities_mut(&mut self) -> &mut [TourActivity] {
        &mut self.activities
    }

    pub(crate) fn set_tour_data(&mut self, tour_data: TourData) {
        self.tour_data = tour_data;
    }
}

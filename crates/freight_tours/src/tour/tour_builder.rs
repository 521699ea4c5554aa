use std::sync::Arc;

use fxhash::FxHashSet;
use tracing::debug;

use crate::{
    error::TourStructureError,
    problem::{
        location::LocationIdx,
        shipment::Shipment,
        time_window::{Time, TimeWindow},
        vehicle::Vehicle,
    },
    tour::{
        Tour,
        activity::{ActivityKind, TourActivity},
    },
};

/// Records scheduling calls and validates the resulting sequence on
/// [`TourBuilder::build`]. The first structural violation wins; later calls
/// are ignored once an error has been recorded.
#[derive(Default)]
pub struct TourBuilder {
    activities: Vec<TourActivity>,
    picked_up: FxHashSet<String>,
    delivered: FxHashSet<String>,
    ended: bool,
    error: Option<TourStructureError>,
}

impl TourBuilder {
    /// A `latest` of `f64::MAX` or infinity leaves the start unbounded.
    pub fn start(
        &mut self,
        location_id: LocationIdx,
        earliest: Time,
        latest: Time,
    ) -> &mut TourBuilder {
        if let Err(error) = self.check_start() {
            return self.fail(error);
        }

        match TimeWindow::new(earliest, Some(latest)) {
            Ok(time_window) => self.activities.push(TourActivity::depot(
                ActivityKind::Start,
                location_id,
                time_window,
            )),
            Err(error) => return self.fail(error.into()),
        }

        self
    }

    pub fn start_at_depot(&mut self, vehicle: &Vehicle) -> &mut TourBuilder {
        let time_window = vehicle.operable_time_window();
        self.start(
            vehicle.depot_location_id(),
            time_window.start(),
            time_window.end_or_unbounded(),
        )
    }

    pub fn pickup(&mut self, shipment: &Arc<Shipment>) -> &mut TourBuilder {
        if let Err(error) = self.check_job_activity() {
            return self.fail(error);
        }

        if !self.picked_up.insert(shipment.external_id().to_owned()) {
            return self.fail(TourStructureError::DuplicatePickup(
                shipment.external_id().to_owned(),
            ));
        }

        self.activities.push(TourActivity::pickup(Arc::clone(shipment)));
        self
    }

    pub fn delivery(&mut self, shipment: &Arc<Shipment>) -> &mut TourBuilder {
        if let Err(error) = self.check_job_activity() {
            return self.fail(error);
        }

        let external_id = shipment.external_id();
        if self.delivered.contains(external_id) {
            return self.fail(TourStructureError::DuplicateDelivery(
                external_id.to_owned(),
            ));
        }

        if !self.picked_up.contains(external_id) {
            return self.fail(TourStructureError::DeliveryWithoutPickup(
                external_id.to_owned(),
            ));
        }

        self.delivered.insert(external_id.to_owned());
        self.activities.push(TourActivity::delivery(Arc::clone(shipment)));
        self
    }

    pub fn end(
        &mut self,
        location_id: LocationIdx,
        earliest: Time,
        latest: Time,
    ) -> &mut TourBuilder {
        if let Err(error) = self.check_job_activity() {
            return self.fail(error);
        }

        match TimeWindow::new(earliest, Some(latest)) {
            Ok(time_window) => {
                self.activities.push(TourActivity::depot(
                    ActivityKind::End,
                    location_id,
                    time_window,
                ));
                self.ended = true;
            }
            Err(error) => return self.fail(error.into()),
        }

        self
    }

    pub fn end_at_depot(&mut self, vehicle: &Vehicle) -> &mut TourBuilder {
        let time_window = vehicle.operable_time_window();
        self.end(
            vehicle.depot_location_id(),
            time_window.start(),
            time_window.end_or_unbounded(),
        )
    }

    pub fn build(self) -> Result<Tour, TourStructureError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        if self.activities.is_empty() {
            return Err(TourStructureError::MissingStart);
        }

        if !self.ended {
            return Err(TourStructureError::MissingEnd);
        }

        let undelivered = self.activities.iter().find_map(|activity| match activity.kind() {
            ActivityKind::Pickup(shipment) if !self.delivered.contains(shipment.external_id()) => {
                Some(shipment.external_id().to_owned())
            }
            _ => None,
        });

        if let Some(external_id) = undelivered {
            debug!(shipment = %external_id, "Rejecting tour with undelivered pickup");
            return Err(TourStructureError::PickupWithoutDelivery(external_id));
        }

        Ok(Tour::new(self.activities))
    }

    fn check_start(&self) -> Result<(), TourStructureError> {
        if self.ended {
            Err(TourStructureError::ActivityAfterEnd)
        } else if !self.activities.is_empty() {
            Err(TourStructureError::MisplacedStart)
        } else {
            Ok(())
        }
    }

    fn check_job_activity(&self) -> Result<(), TourStructureError> {
        if self.ended {
            Err(TourStructureError::ActivityAfterEnd)
        } else if self.activities.is_empty() {
            Err(TourStructureError::MissingStart)
        } else {
            Ok(())
        }
    }

    fn fail(&mut self, error: TourStructureError) -> &mut TourBuilder {
        if self.error.is_none() {
            debug!(%error, "Invalid tour schedule");
            self.error = Some(error);
        }
        self
    }
}

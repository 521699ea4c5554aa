use std::{fmt::Display, sync::Arc};

use crate::problem::{
    location::LocationIdx,
    shipment::Shipment,
    time_window::{Time, TimeWindow},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityKind {
    Start,
    Pickup(Arc<Shipment>),
    Delivery(Arc<Shipment>),
    End,
}

impl ActivityKind {
    pub fn shipment(&self) -> Option<&Shipment> {
        match self {
            ActivityKind::Pickup(shipment) | ActivityKind::Delivery(shipment) => Some(shipment),
            ActivityKind::Start | ActivityKind::End => None,
        }
    }
}

impl Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::Start => write!(f, "Start"),
            ActivityKind::Pickup(shipment) => write!(f, "Pickup({})", shipment.external_id()),
            ActivityKind::Delivery(shipment) => write!(f, "Delivery({})", shipment.external_id()),
            ActivityKind::End => write!(f, "End"),
        }
    }
}

/// One stop of a tour. The operation start times are written by the tour
/// status processors only.
#[derive(Debug, Clone)]
pub struct TourActivity {
    kind: ActivityKind,
    location_id: LocationIdx,
    time_window: TimeWindow,
    service_time: Time,

    earliest_operation_start_time: Time,
    latest_operation_start_time: Time,
}

impl TourActivity {
    pub(crate) fn depot(
        kind: ActivityKind,
        location_id: LocationIdx,
        time_window: TimeWindow,
    ) -> Self {
        TourActivity::new(kind, location_id, time_window, 0.0)
    }

    pub(crate) fn pickup(shipment: Arc<Shipment>) -> Self {
        let pickup = shipment.pickup();
        let (location_id, time_window, service_time) =
            (pickup.location_id(), *pickup.time_window(), pickup.service_time());

        TourActivity::new(
            ActivityKind::Pickup(shipment),
            location_id,
            time_window,
            service_time,
        )
    }

    pub(crate) fn delivery(shipment: Arc<Shipment>) -> Self {
        let delivery = shipment.delivery();
        let (location_id, time_window, service_time) = (
            delivery.location_id(),
            *delivery.time_window(),
            delivery.service_time(),
        );

        TourActivity::new(
            ActivityKind::Delivery(shipment),
            location_id,
            time_window,
            service_time,
        )
    }

    fn new(
        kind: ActivityKind,
        location_id: LocationIdx,
        time_window: TimeWindow,
        service_time: Time,
    ) -> Self {
        TourActivity {
            kind,
            location_id,
            time_window,
            service_time,
            earliest_operation_start_time: time_window.start(),
            latest_operation_start_time: time_window.end_or_unbounded(),
        }
    }

    pub fn kind(&self) -> &ActivityKind {
        &self.kind
    }

    pub fn location_id(&self) -> LocationIdx {
        self.location_id
    }

    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    pub fn service_time(&self) -> Time {
        self.service_time
    }

    pub fn earliest_operation_start_time(&self) -> Time {
        self.earliest_operation_start_time
    }

    /// `f64::INFINITY` when nothing downstream bounds this activity.
    pub fn latest_operation_start_time(&self) -> Time {
        self.latest_operation_start_time
    }

    pub fn is_feasible(&self) -> bool {
        self.earliest_operation_start_time <= self.latest_operation_start_time
    }

    pub(crate) fn set_earliest_operation_start_time(&mut self, time: Time) {
        self.earliest_operation_start_time = time;
    }

    pub(crate) fn set_latest_operation_start_time(&mut self, time: Time) {
        self.latest_operation_start_time = time;
    }
}

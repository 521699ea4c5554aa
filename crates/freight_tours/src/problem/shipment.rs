use serde::Serialize;

use crate::{
    error::BuilderError,
    problem::{
        location::LocationIdx,
        time_window::{Time, TimeWindow},
    },
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShipmentLocation {
    location_id: LocationIdx,
    time_window: TimeWindow,
    service_time: Time,
}

impl ShipmentLocation {
    pub fn new(location_id: LocationIdx, time_window: TimeWindow) -> Self {
        ShipmentLocation {
            location_id,
            time_window,
            service_time: 0.0,
        }
    }

    /// Negative service times are clamped to zero.
    pub fn with_service_time(
        mut self,
        service_time: Time,
        field: &'static str,
    ) -> Result<Self, BuilderError> {
        if !service_time.is_finite() {
            return Err(BuilderError::InvalidServiceTime(field));
        }

        self.service_time = service_time.max(0.0);
        Ok(self)
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
}

/// A pickup and delivery pair served by the same tour.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Shipment {
    external_id: String,
    size: f64,
    pickup: ShipmentLocation,
    delivery: ShipmentLocation,
}

impl Shipment {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn pickup(&self) -> &ShipmentLocation {
        &self.pickup
    }

    pub fn delivery(&self) -> &ShipmentLocation {
        &self.delivery
    }
}

#[derive(Default)]
pub struct ShipmentBuilder {
    external_id: Option<String>,
    size: Option<f64>,
    pickup_location_id: Option<LocationIdx>,
    pickup_time_window: Option<TimeWindow>,
    pickup_service_time: Option<Time>,
    delivery_location_id: Option<LocationIdx>,
    delivery_time_window: Option<TimeWindow>,
    delivery_service_time: Option<Time>,
}

impl ShipmentBuilder {
    pub fn set_external_id(&mut self, external_id: impl Into<String>) -> &mut ShipmentBuilder {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn set_size(&mut self, size: f64) -> &mut ShipmentBuilder {
        self.size = Some(size);
        self
    }

    pub fn set_pickup_location_id(&mut self, location_id: LocationIdx) -> &mut ShipmentBuilder {
        self.pickup_location_id = Some(location_id);
        self
    }

    pub fn set_pickup_time_window(&mut self, time_window: TimeWindow) -> &mut ShipmentBuilder {
        self.pickup_time_window = Some(time_window);
        self
    }

    pub fn set_pickup_service_time(&mut self, service_time: Time) -> &mut ShipmentBuilder {
        self.pickup_service_time = Some(service_time);
        self
    }

    pub fn set_delivery_location_id(&mut self, location_id: LocationIdx) -> &mut ShipmentBuilder {
        self.delivery_location_id = Some(location_id);
        self
    }

    pub fn set_delivery_time_window(&mut self, time_window: TimeWindow) -> &mut ShipmentBuilder {
        self.delivery_time_window = Some(time_window);
        self
    }

    pub fn set_delivery_service_time(&mut self, service_time: Time) -> &mut ShipmentBuilder {
        self.delivery_service_time = Some(service_time);
        self
    }

    pub fn build(self) -> Result<Shipment, BuilderError> {
        let pickup = ShipmentLocation::new(
            self.pickup_location_id
                .ok_or(BuilderError::MissingField("pickup_location_id"))?,
            self.pickup_time_window.unwrap_or_default(),
        )
        .with_service_time(
            self.pickup_service_time.unwrap_or(0.0),
            "pickup_service_time",
        )?;

        let delivery = ShipmentLocation::new(
            self.delivery_location_id
                .ok_or(BuilderError::MissingField("delivery_location_id"))?,
            self.delivery_time_window.unwrap_or_default(),
        )
        .with_service_time(
            self.delivery_service_time.unwrap_or(0.0),
            "delivery_service_time",
        )?;

        Ok(Shipment {
            external_id: self
                .external_id
                .ok_or(BuilderError::MissingField("external_id"))?,
            size: self.size.unwrap_or(0.0),
            pickup,
            delivery,
        })
    }
}

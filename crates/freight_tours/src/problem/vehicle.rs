use serde::Serialize;

use crate::{
    error::BuilderError,
    problem::{location::LocationIdx, time_window::TimeWindow},
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    external_id: String,
    vehicle_type: String,
    depot_location_id: LocationIdx,
    operable_time_window: TimeWindow,
    capacity: f64,
}

impl Vehicle {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn depot_location_id(&self) -> LocationIdx {
        self.depot_location_id
    }

    /// `[earliest start, latest end]` of the vehicle's shift.
    pub fn operable_time_window(&self) -> &TimeWindow {
        &self.operable_time_window
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

#[derive(Default)]
pub struct VehicleBuilder {
    external_id: Option<String>,
    vehicle_type: Option<String>,
    depot_location_id: Option<LocationIdx>,
    operable_time_window: Option<TimeWindow>,
    capacity: Option<f64>,
}

impl VehicleBuilder {
    pub fn set_vehicle_id(&mut self, external_id: impl Into<String>) -> &mut VehicleBuilder {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn set_vehicle_type(&mut self, vehicle_type: impl Into<String>) -> &mut VehicleBuilder {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn set_depot_location_id(&mut self, depot_location_id: LocationIdx) -> &mut VehicleBuilder {
        self.depot_location_id = Some(depot_location_id);
        self
    }

    pub fn set_operable_time_window(&mut self, time_window: TimeWindow) -> &mut VehicleBuilder {
        self.operable_time_window = Some(time_window);
        self
    }

    pub fn set_capacity(&mut self, capacity: f64) -> &mut VehicleBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn build(self) -> Result<Vehicle, BuilderError> {
        Ok(Vehicle {
            external_id: self
                .external_id
                .ok_or(BuilderError::MissingField("external_id"))?,
            vehicle_type: self.vehicle_type.unwrap_or_default(),
            depot_location_id: self
                .depot_location_id
                .ok_or(BuilderError::MissingField("depot_location_id"))?,
            operable_time_window: self.operable_time_window.unwrap_or_default(),
            capacity: self.capacity.unwrap_or(f64::INFINITY),
        })
    }
}

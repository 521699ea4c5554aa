use std::sync::Arc;

use crate::{
    costs::{SpeedProfile, StaticCosts, TimeDependentCosts},
    problem::{
        driver::Driver,
        location::{DistanceMetric, Location, LocationIdx, LocationRegistry},
        shipment::{Shipment, ShipmentBuilder},
        time_window::TimeWindow,
        vehicle::{Vehicle, VehicleBuilder},
    },
    tour::{Tour, TourBuilder},
};

pub fn location_id(x: f64, y: f64) -> String {
    format!("{x},{y}")
}

pub fn create_registry(locations: Vec<(f64, f64)>) -> (LocationRegistry, Vec<LocationIdx>) {
    let mut registry = LocationRegistry::new();
    let ids = locations
        .into_iter()
        .map(|(x, y)| registry.add_location(location_id(x, y), Location::from_cartesian(x, y)))
        .collect();

    (registry, ids)
}

pub fn create_location_grid(rows: usize, cols: usize) -> LocationRegistry {
    let locations = (0..rows)
        .flat_map(|y| (0..cols).map(move |x| (x as f64, y as f64)))
        .collect();

    create_registry(locations).0
}

pub fn create_shipment(
    external_id: &str,
    pickup: LocationIdx,
    pickup_time_window: Option<TimeWindow>,
    delivery: LocationIdx,
) -> Arc<Shipment> {
    let mut builder = ShipmentBuilder::default();
    builder
        .set_external_id(external_id)
        .set_size(1.0)
        .set_pickup_location_id(pickup)
        .set_delivery_location_id(delivery);

    if let Some(time_window) = pickup_time_window {
        builder.set_pickup_time_window(time_window);
    }

    Arc::new(builder.build().unwrap())
}

pub fn create_vehicle(depot: LocationIdx) -> Vehicle {
    let mut builder = VehicleBuilder::default();
    builder
        .set_vehicle_id("vehicle")
        .set_vehicle_type("van")
        .set_depot_location_id(depot)
        .set_operable_time_window(TimeWindow::bounded(0.0, 1000.0).unwrap())
        .set_capacity(10.0);
    builder.build().unwrap()
}

/// Shipments on the plain grid, all legs measured in Manhattan distance.
///
/// - A: (0,0) -> (0,10)
/// - B: (0,0) -> (10,0)
/// - C: (0,9) -> (10,0)
pub struct StaticScenario {
    pub registry: Arc<LocationRegistry>,
    pub depot: LocationIdx,
    pub shipments: [Arc<Shipment>; 3],
    pub vehicle: Vehicle,
    pub driver: Driver,
}

impl StaticScenario {
    pub fn new() -> Self {
        let (registry, ids) =
            create_registry(vec![(0.0, 0.0), (0.0, 10.0), (10.0, 0.0), (0.0, 9.0)]);
        let [depot, north, east, near_north] = [ids[0], ids[1], ids[2], ids[3]];

        StaticScenario {
            registry: Arc::new(registry),
            depot,
            shipments: [
                create_shipment("A", depot, None, north),
                create_shipment("B", depot, None, east),
                create_shipment("C", near_north, None, east),
            ],
            vehicle: create_vehicle(depot),
            driver: Driver::new("driver"),
        }
    }

    pub fn costs(&self) -> StaticCosts {
        StaticCosts::new(Arc::clone(&self.registry)).with_metric(DistanceMetric::Manhattan)
    }

    /// start -> pickup A -> pickup B -> deliver A -> deliver B -> end
    pub fn two_shipment_tour(&self) -> Tour {
        let [a, b, _] = &self.shipments;
        let mut builder = TourBuilder::default();
        builder
            .start(self.depot, 0.0, f64::MAX)
            .pickup(a)
            .pickup(b)
            .delivery(a)
            .delivery(b)
            .end(self.depot, 0.0, f64::MAX);
        builder.build().unwrap()
    }

    /// start -> pickup C -> deliver C -> end
    pub fn single_shipment_tour(&self) -> Tour {
        let [_, _, c] = &self.shipments;
        let mut builder = TourBuilder::default();
        builder
            .start(self.depot, 0.0, f64::MAX)
            .pickup(c)
            .delivery(c)
            .end(self.depot, 0.0, f64::MAX);
        builder.build().unwrap()
    }
}

/// Two shipments with pickup windows, both delivered at the depot.
///
/// - 1: (0,10) within [8, 12] -> (0,0)
/// - 2: (10,0) within [30, 30] -> (0,0)
pub struct TimeWindowScenario {
    pub registry: Arc<LocationRegistry>,
    pub depot: LocationIdx,
    pub shipments: [Arc<Shipment>; 2],
    pub vehicle: Vehicle,
    pub driver: Driver,
}

impl TimeWindowScenario {
    pub fn new() -> Self {
        Self::with_pickup_windows(
            TimeWindow::bounded(8.0, 12.0).unwrap(),
            TimeWindow::bounded(30.0, 30.0).unwrap(),
        )
    }

    pub fn with_pickup_windows(first: TimeWindow, second: TimeWindow) -> Self {
        let (registry, ids) = create_registry(vec![(0.0, 0.0), (0.0, 10.0), (10.0, 0.0)]);
        let [depot, north, east] = [ids[0], ids[1], ids[2]];

        TimeWindowScenario {
            registry: Arc::new(registry),
            depot,
            shipments: [
                create_shipment("1", north, Some(first), depot),
                create_shipment("2", east, Some(second), depot),
            ],
            vehicle: create_vehicle(depot),
            driver: Driver::default(),
        }
    }

    pub fn static_costs(&self) -> StaticCosts {
        StaticCosts::new(Arc::clone(&self.registry)).with_metric(DistanceMetric::Manhattan)
    }

    /// Bins at [20, 40, 60, 80, 100] with speeds [1, 2, 1, 2, 1].
    pub fn time_dependent_costs(&self) -> TimeDependentCosts {
        let profile = SpeedProfile::uniform(100.0, vec![1.0, 2.0, 1.0, 2.0, 1.0]).unwrap();
        TimeDependentCosts::new(Arc::clone(&self.registry), profile)
            .with_metric(DistanceMetric::Manhattan)
    }

    /// start(t=0) -> pickup 1 -> pickup 2 -> deliver 1 -> deliver 2 -> end
    pub fn tour(&self) -> Tour {
        let [first, second] = &self.shipments;
        let mut builder = TourBuilder::default();
        builder
            .start(self.depot, 0.0, 0.0)
            .pickup(first)
            .pickup(second)
            .delivery(first)
            .delivery(second)
            .end(self.depot, 0.0, f64::MAX);
        builder.build().unwrap()
    }
}

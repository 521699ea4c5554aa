use fxhash::FxHashMap;
use geo::{Distance, Euclidean};
use serde::{Deserialize, Serialize};

use crate::error::UnknownLocation;

/// Handle into a [`LocationRegistry`]. Only the registry that issued it can
/// resolve it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationIdx(usize);

impl std::fmt::Display for LocationIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl LocationIdx {
    pub const fn get(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            point: geo::Point::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn euclidean_distance(&self, to: &Location) -> f64 {
        Euclidean.distance(self.point, to.point)
    }

    pub fn manhattan_distance(&self, to: &Location) -> f64 {
        (self.x() - to.x()).abs() + (self.y() - to.y()).abs()
    }

    pub fn distance(&self, to: &Location, metric: DistanceMetric) -> f64 {
        match metric {
            DistanceMetric::Euclidean => self.euclidean_distance(to),
            DistanceMetric::Manhattan => self.manhattan_distance(to),
        }
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

/// Maps external location identifiers to coordinates.
#[derive(Debug, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    ids: FxHashMap<String, LocationIdx>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `location` under `id`. Registering an id twice replaces its
    /// coordinate and keeps the original handle.
    pub fn add_location(&mut self, id: impl Into<String>, location: Location) -> LocationIdx {
        let id = id.into();
        if let Some(&idx) = self.ids.get(&id) {
            self.locations[idx.0] = location;
            return idx;
        }

        let idx = LocationIdx(self.locations.len());
        self.locations.push(location);
        self.ids.insert(id, idx);
        idx
    }

    pub fn lookup(&self, id: &str) -> Result<LocationIdx, UnknownLocation> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| UnknownLocation { id: id.to_owned() })
    }

    pub fn coordinate(&self, id: &str) -> Result<&Location, UnknownLocation> {
        self.lookup(id).map(|idx| self.location(idx))
    }

    /// # Panics
    ///
    /// Panics if `idx` was not issued by this registry.
    #[inline(always)]
    pub fn location(&self, idx: LocationIdx) -> &Location {
        &self.locations[idx.0]
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_and_unknown() {
        let mut registry = LocationRegistry::new();
        let depot = registry.add_location("depot", Location::from_cartesian(0.0, 0.0));
        let customer = registry.add_location("customer", Location::from_cartesian(3.0, 4.0));

        assert_eq!(registry.lookup("depot"), Ok(depot));
        assert_eq!(registry.lookup("customer"), Ok(customer));
        assert_eq!(registry.coordinate("customer").unwrap().y(), 4.0);
        assert_eq!(
            registry.lookup("warehouse"),
            Err(UnknownLocation {
                id: String::from("warehouse")
            })
        );
    }

    #[test]
    fn test_re_registering_keeps_handle() {
        let mut registry = LocationRegistry::new();
        let first = registry.add_location("a", Location::from_cartesian(0.0, 0.0));
        let second = registry.add_location("a", Location::from_cartesian(1.0, 1.0));

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.location(first).x(), 1.0);
    }

    #[test]
    fn test_distances() {
        let from = Location::from_cartesian(0.0, 0.0);
        let to = Location::from_cartesian(3.0, 4.0);

        assert_eq!(from.distance(&to, DistanceMetric::Euclidean), 5.0);
        assert_eq!(from.distance(&to, DistanceMetric::Manhattan), 7.0);
        assert_eq!(to.distance(&to, DistanceMetric::Euclidean), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_handle_from_another_registry_panics() {
        let mut registry = LocationRegistry::new();
        registry.add_location("a", Location::from_cartesian(0.0, 0.0));
        let foreign = registry.add_location("b", Location::from_cartesian(1.0, 1.0));

        LocationRegistry::new().location(foreign);
    }
}

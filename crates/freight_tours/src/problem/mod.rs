pub mod driver;
pub mod location;
pub mod shipment;
pub mod time_window;
pub mod vehicle;

pub mod config;
pub mod costs;
pub mod error;
pub mod problem;
pub mod processor;
pub mod tour;

#[cfg(test)]
pub(crate) mod test_utils;

//! Infrastructure concerns: filesystem locations.

pub mod paths;

pub use paths::{config_dir, data_dir};

pub mod payments;
pub mod stats;

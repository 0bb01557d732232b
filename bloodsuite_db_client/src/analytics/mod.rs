pub mod dashboard;
pub mod district;
pub mod trend;

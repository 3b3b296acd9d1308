pub mod dashboard;
pub mod eoi;
pub mod profile;
pub mod stats;

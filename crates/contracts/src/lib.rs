pub mod dashboard;
pub mod domain;
pub mod eoi;
pub mod profile;
pub mod system;

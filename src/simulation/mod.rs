pub mod error;
pub mod params;
pub mod motion;
pub mod grid;
pub mod runner;
pub mod scenario;

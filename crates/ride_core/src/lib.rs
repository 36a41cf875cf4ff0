pub mod agents;
pub mod clock;
pub mod error;
pub mod matching;
pub mod pathfind;
pub mod pricing;
pub mod ride;
pub mod ride_log;
pub mod session;
pub mod spatial;

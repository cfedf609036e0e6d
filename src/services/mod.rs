pub mod aggregator;
pub mod catalog;
pub mod executor;
pub mod planner;
pub mod profile;
pub mod providers;
pub mod recommender;

pub use profile::ProfileBuilder;
pub use recommender::Recommender;

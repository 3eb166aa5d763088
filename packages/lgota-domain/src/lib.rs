pub mod benefit;
pub mod hints;
pub mod present;
pub mod query;
pub mod scoring;
pub mod selection;

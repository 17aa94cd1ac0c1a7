pub mod launch;
pub mod site;

pub use launch::{LaunchRecord, OutcomeClass};
pub use site::{SiteSelection, ALL_SITES, KNOWN_SITES};

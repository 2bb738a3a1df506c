pub mod composer;
pub mod knowledge;

pub use composer::{compose_report, is_low_confidence, readable_label, Severity};
pub use knowledge::{lookup, lookup_or_placeholder, DiseaseInfo, PLACEHOLDER};

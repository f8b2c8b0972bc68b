pub(crate) mod collect_sorted;
pub(crate) mod combine;
pub(crate) mod combine_global;
pub(crate) mod common;
pub(crate) mod keyed;
pub(crate) mod sources;
pub(crate) mod values;

// Only files with top-level functions get re-exported
pub use sources::*;

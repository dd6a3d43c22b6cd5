pub mod common_nd;
pub mod ksg;

// Unified re-exports so tests and users can import
// ksgmeasure::estimators::approaches::* ergonomically.
pub use ksg::{KsgConditionalMutualInformation, KsgMutualInformation};

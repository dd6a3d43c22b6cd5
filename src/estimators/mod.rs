pub mod approaches;
pub mod mutual_information;
pub mod traits;

pub use traits::{
    ConditionalMutualInformationEstimator, GlobalValue, LocalValues, MutualInformationEstimator,
};

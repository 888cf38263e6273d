use thiserror::Error;

use crate::search::distance::Distance;

/// Validation failures raised by [`crate::search::SearchCriteria`] at the
/// offending call, before anything reaches the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("cannot request more than 50 results, {requested} were requested")]
    TooManyResults { requested: u32 },

    #[error("search area of {requested} is larger than the maximum of 40000 meters")]
    AreaTooLarge { requested: Distance },

    #[error("{requested} cannot be combined with {existing}")]
    IncompatibleCriteria {
        requested: &'static str,
        existing: &'static str,
    },
}

pub mod criteria;
pub mod distance;
pub mod error;
pub mod options;
pub mod pagination;
pub mod query;

pub use criteria::SearchCriteria;
pub use distance::{Distance, UnitOfLength};
pub use error::CriteriaError;
pub use options::{Attribute, Locale, PricingLevel, SortingMode};
pub use pagination::Pagination;
pub use query::QueryString;

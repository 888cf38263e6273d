//! Typed client for the Yelp Fusion business search API.
//!
//! The heart of the crate is [`search::SearchCriteria`], which accumulates
//! and validates search parameters before anything goes over the wire. The
//! [`client`] module is a thin async transport; business and review payloads
//! come back as raw JSON.

pub mod client;
pub mod models;
pub mod search;

pub use client::{ClientTrait, YelpClient};
pub use models::{Coordinates, Region, SearchResponse};
pub use search::{
    Attribute, CriteriaError, Distance, Locale, Pagination, PricingLevel, QueryString,
    SearchCriteria, SortingMode, UnitOfLength,
};

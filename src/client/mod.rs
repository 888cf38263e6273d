pub mod traits;
pub mod yelp;

pub use traits::ClientTrait;
pub use yelp::YelpClient;

use std::fmt;

/// Orderings the search endpoint can apply to its results.
///
/// The API treats these as suggestions; results for `rating` or
/// `review_count` may still mix in other strong signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortingMode {
    BestMatch,
    Rating,
    ReviewCount,
    Distance,
}

impl SortingMode {
    pub fn value(self) -> &'static str {
        match self {
            SortingMode::BestMatch => "best_match",
            SortingMode::Rating => "rating",
            SortingMode::ReviewCount => "review_count",
            SortingMode::Distance => "distance",
        }
    }
}

/// Ordinal pricing tiers, 1 being the least expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingLevel {
    Inexpensive,
    Moderate,
    Pricey,
    UltraHighEnd,
}

impl PricingLevel {
    pub fn value(self) -> u8 {
        match self {
            PricingLevel::Inexpensive => 1,
            PricingLevel::Moderate => 2,
            PricingLevel::Pricey => 3,
            PricingLevel::UltraHighEnd => 4,
        }
    }
}

/// Boolean business facets that can narrow a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    HotAndNew,
    RequestAQuote,
    Reservation,
    WaitlistReservation,
    Cashback,
    Deals,
    GenderNeutralRestrooms,
    OpenToAll,
    WheelchairAccessible,
}

impl Attribute {
    pub fn value(self) -> &'static str {
        match self {
            Attribute::HotAndNew => "hot_and_new",
            Attribute::RequestAQuote => "request_a_quote",
            Attribute::Reservation => "reservation",
            Attribute::WaitlistReservation => "waitlist_reservation",
            Attribute::Cashback => "cashback",
            Attribute::Deals => "deals",
            Attribute::GenderNeutralRestrooms => "gender_neutral_restrooms",
            Attribute::OpenToAll => "open_to_all",
            Attribute::WheelchairAccessible => "wheelchair_accessible",
        }
    }
}

/// A language-region pair for localized results.
///
/// The API expects the underscore form, e.g. `es_MX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    region: String,
}

impl Locale {
    pub fn new(language: &str, region: &str) -> Self {
        Self {
            language: language.to_lowercase(),
            region: region.to_uppercase(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.language, self.region)
    }
}

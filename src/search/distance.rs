use std::fmt;

/// Units of length accepted when talking about a search radius.
///
/// The API measures distances in meters; miles and kilometers are what a
/// regular user actually thinks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOfLength {
    Meters,
    Miles,
    Kilometers,
}

impl UnitOfLength {
    /// Conversion factor from this unit to meters
    fn meters_per_unit(self) -> f64 {
        match self {
            UnitOfLength::Meters => 1.0,
            UnitOfLength::Miles => 1_609.344,
            UnitOfLength::Kilometers => 1_000.0,
        }
    }
}

impl fmt::Display for UnitOfLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitOfLength::Meters => "meters",
            UnitOfLength::Miles => "miles",
            UnitOfLength::Kilometers => "kilometers",
        };
        f.write_str(name)
    }
}

/// A magnitude paired with a unit of length.
///
/// Searching by coordinates includes the distance from that point to each
/// business, so the same type serves both input validation and display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    pub value: f64,
    pub unit: UnitOfLength,
}

impl Distance {
    pub fn in_meters(meters: f64) -> Self {
        Self {
            value: meters,
            unit: UnitOfLength::Meters,
        }
    }

    pub fn in_miles(miles: f64) -> Self {
        Self {
            value: miles,
            unit: UnitOfLength::Miles,
        }
    }

    pub fn in_kilometers(kilometers: f64) -> Self {
        Self {
            value: kilometers,
            unit: UnitOfLength::Kilometers,
        }
    }

    /// The largest search radius the API accepts.
    pub fn largest() -> Self {
        Self::in_meters(40_000.0)
    }

    /// Distances can be compared even when they use different units of length.
    pub fn bigger_than(&self, other: Distance) -> bool {
        self.value > other.convert_to(self.unit).value
    }

    /// Distances can be compared even when they use different units of length.
    pub fn smaller_than(&self, other: Distance) -> bool {
        self.value < other.convert_to(self.unit).value
    }

    /// Convert to another unit, e.g. to show kilometers or miles in a UI.
    pub fn convert_to(&self, unit: UnitOfLength) -> Distance {
        let meters = self.value * self.unit.meters_per_unit();
        Distance {
            value: meters / unit.meters_per_unit(),
            unit,
        }
    }
}

/// The value with exactly two decimal places, a space, then the unit name in
/// lowercase, e.g. `3.56 kilometers`.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

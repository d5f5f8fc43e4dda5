//! # Vehicle Module
//!
//! The two record types carried around by the optional walkthrough.
//!
//! Both records are plain immutable values: fields are set once at
//! construction, equality is field-wise, and each has a short human-readable
//! rendering.
//!
//! ```
//! use optional_showcase::{Car, Truck};
//!
//! let car = Car::new("Ford", "Raptor");
//! assert_eq!(car.to_string(), "Ford Raptor");
//!
//! let truck = Truck::from_car(&car, "HUGE");
//! assert_eq!(truck.to_string(), "HUGE Ford Raptor");
//! ```

use std::borrow::Cow;
use std::fmt;

/// A car identified by manufacturer and model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    pub manufacturer: Cow<'static, str>,
    pub model: Cow<'static, str>,
}

impl Car {
    /// Creates a car from any owned or borrowed text.
    pub fn new(manufacturer: impl Into<Cow<'static, str>>, model: impl Into<Cow<'static, str>>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
        }
    }

    /// Creates a car from string literals, usable in `const` items.
    pub const fn from_static(manufacturer: &'static str, model: &'static str) -> Self {
        Self {
            manufacturer: Cow::Borrowed(manufacturer),
            model: Cow::Borrowed(model),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.manufacturer, self.model)
    }
}

/// A truck: a car with a size class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Truck {
    pub manufacturer: Cow<'static, str>,
    pub model: Cow<'static, str>,
    pub size: Cow<'static, str>,
}

impl Truck {
    pub fn new(
        manufacturer: impl Into<Cow<'static, str>>,
        model: impl Into<Cow<'static, str>>,
        size: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            size: size.into(),
        }
    }

    pub const fn from_static(manufacturer: &'static str, model: &'static str, size: &'static str) -> Self {
        Self {
            manufacturer: Cow::Borrowed(manufacturer),
            model: Cow::Borrowed(model),
            size: Cow::Borrowed(size),
        }
    }

    /// Widens a car into a truck of the given size.
    pub fn from_car(car: &Car, size: impl Into<Cow<'static, str>>) -> Self {
        Self {
            manufacturer: car.manufacturer.clone(),
            model: car.model.clone(),
            size: size.into(),
        }
    }
}

// Size goes first: "HUGE Ford Raptor".
impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.size, self.manufacturer, self.model)
    }
}

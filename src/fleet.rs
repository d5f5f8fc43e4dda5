//! The shared fleet of cars and the factories that hand out optionals.

use crate::optional::{Optional, NULLOPT};
use crate::vehicle::{Car, Truck};

pub const LOUD_CAR: Car = Car::from_static("Hyundai", "i30 N");
pub const REASONABLE_CAR: Car = Car::from_static("Volkswagen", "Golf");
pub const HUGE_CAR: Car = Car::from_static("Ford", "Raptor");

/// Returns an empty optional built from the absent marker.
pub fn make_empty_car() -> Optional<Car> {
    NULLOPT.into()
}

pub fn make_empty_truck() -> Optional<Truck> {
    NULLOPT.into()
}

/// Returns the huge car, widened into a truck.
pub fn produce_truck() -> Optional<Truck> {
    Optional::new(Truck::from_car(&HUGE_CAR, "HUGE"))
}

/// Fake repository lookup by model name (case-insensitive).
pub fn find_by_model(model: &str) -> Optional<Car> {
    if model.eq_ignore_ascii_case(&HUGE_CAR.model) {
        Optional::new(HUGE_CAR)
    } else {
        Optional::empty()
    }
}

use quickcheck::{Arbitrary, Gen, QuickCheck};
use crate::optional::{Optional, OptionalError, NULLOPT};
use crate::vehicle::{Car, Truck};

impl Arbitrary for Car {
    fn arbitrary(g: &mut Gen) -> Self {
        Car::new(String::arbitrary(g), String::arbitrary(g))
    }
}

impl Arbitrary for Truck {
    fn arbitrary(g: &mut Gen) -> Self {
        Truck::new(String::arbitrary(g), String::arbitrary(g), String::arbitrary(g))
    }
}

// Property: value_or on an empty optional yields the fallback
fn prop_value_or_empty(fallback: Car) -> bool {
    Optional::<Car>::empty().value_or(fallback.clone()) == fallback
}

// Property: value_or on a filled optional ignores the fallback
fn prop_value_or_filled(value: Car, fallback: Car) -> bool {
    Optional::new(value.clone()).value_or(fallback) == value
}

// Property: value on empty fails, value on filled hands back the value
fn prop_value_access(value: Option<Car>) -> bool {
    let opt = Optional::from(value.clone());
    match value {
        Some(car) => opt.has_value() && opt.value() == Ok(&car),
        None => !opt.has_value() && opt.value() == Err(OptionalError::EmptyAccess),
    }
}

// Property: record equality agrees with field-by-field comparison
fn prop_car_equality_field_wise(a: Car, b: Car) -> bool {
    (a == b) == (a.manufacturer == b.manufacturer && a.model == b.model)
}

fn prop_truck_equality_field_wise(a: Truck, b: Truck) -> bool {
    (a == b) == (a.manufacturer == b.manufacturer && a.model == b.model && a.size == b.size)
}

// Property: the absent marker builds empty optionals of both record types
fn prop_marker_is_polymorphic(_: u8) -> bool {
    let car: Optional<Car> = NULLOPT.into();
    let truck: Optional<Truck> = NULLOPT.into();
    !car.has_value() && !truck.has_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_or_empty() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_value_or_empty as fn(Car) -> bool);
    }

    #[test]
    fn test_value_or_filled() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_value_or_filled as fn(Car, Car) -> bool);
    }

    #[test]
    fn test_value_access() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_value_access as fn(Option<Car>) -> bool);
    }

    #[test]
    fn test_record_equality() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_car_equality_field_wise as fn(Car, Car) -> bool);
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_truck_equality_field_wise as fn(Truck, Truck) -> bool);
    }

    #[test]
    fn test_marker_is_polymorphic() {
        QuickCheck::new()
            .tests(10)
            .quickcheck(prop_marker_is_polymorphic as fn(u8) -> bool);
    }
}

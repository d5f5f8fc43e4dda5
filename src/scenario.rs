//! # Scenario Module
//!
//! Seven labeled walkthroughs of optional idioms.
//!
//! Each scenario writes a title, an underline of `-` of the same length, and
//! one or more outcome lines to the given sink. The outcome lines are fixed
//! text and must not change.

use std::io::{self, Write};

use crate::fleet::{make_empty_car, LOUD_CAR, REASONABLE_CAR};
use crate::optional::{Optional, OptionalError, NULLOPT};
use crate::vehicle::Car;

/// Signature shared by every scenario body.
pub type ScenarioFn = fn(&mut dyn Write) -> io::Result<()>;

/// A named scenario.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub run: ScenarioFn,
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("name", &self.name).finish()
    }
}

/// All scenarios, in the order the driver runs them.
pub const SCENARIOS: [Scenario; 7] = [
    Scenario { name: "optional_of_null", run: optional_of_null },
    Scenario { name: "optional_of_null_usage", run: optional_of_null_usage },
    Scenario { name: "optional_of_value_usage", run: optional_of_value_usage },
    Scenario { name: "optional_of_value_other_usage", run: optional_of_value_other_usage },
    Scenario { name: "bouncer_patterns", run: bouncer_patterns },
    Scenario { name: "fake_repository_return_value", run: fake_repository_return_value },
    Scenario { name: "direct_value_access", run: direct_value_access },
];

/// Writes `title` followed by a dashed underline of equal length.
pub fn write_heading(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

pub fn optional_of_null(out: &mut dyn Write) -> io::Result<()> {
    write_heading(out, "optional_of_null")?;

    let null_opt_const: Optional<Car> = NULLOPT.into();
    let null_opt_method = make_empty_car();
    let null_opt_obj1 = Optional::<Car>::default();
    let null_opt_obj2 = Optional::<Car>::from(NULLOPT);

    let named = [
        ("null_opt_const", &null_opt_const),
        ("null_opt_method", &null_opt_method),
        ("null_opt_obj1", &null_opt_obj1),
        ("null_opt_obj2", &null_opt_obj2),
    ];
    for (name, opt) in named {
        if !opt.has_value() {
            writeln!(out, "{} has no value", name)?;
        }
    }
    Ok(())
}

pub fn optional_of_null_usage(out: &mut dyn Write) -> io::Result<()> {
    write_heading(out, "optional_of_null_usage")?;

    let null_opt = make_empty_car();

    let null_value_or = null_opt.value_or(REASONABLE_CAR);
    if let Err(OptionalError::EmptyAccess) = null_opt.value() {
        writeln!(out, "value() throws if optional is empty")?;
    }

    if null_value_or == REASONABLE_CAR {
        writeln!(out, "value_or() gets default object if optional is empty")?;
    }
    Ok(())
}

pub fn optional_of_value_usage(out: &mut dyn Write) -> io::Result<()> {
    write_heading(out, "optional_of_value_usage")?;

    let hyunday_opt = Optional::new(LOUD_CAR);
    let hyundai_value_or = hyunday_opt.value_or(REASONABLE_CAR);

    if hyundai_value_or == LOUD_CAR {
        writeln!(out, "value_or() gets object if optional is not empty")?;
    }
    Ok(())
}

pub fn optional_of_value_other_usage(out: &mut dyn Write) -> io::Result<()> {
    write_heading(out, "optional_of_value_other_usage")?;
    writeln!(out, "There's nothing std::optional has to offer here")
}

pub fn bouncer_patterns(out: &mut dyn Write) -> io::Result<()> {
    write_heading(out, "bouncer_patterns")?;

    let hyunday_opt = Optional::new(LOUD_CAR);

    if !hyunday_opt.has_value() {
        writeln!(out, "ERROR: If you see that then something is wrong")?;
    }
    let value = &hyunday_opt.manufacturer;
    writeln!(out, "Hyunday manufacturer value is {} (surprise)", value)
}

pub fn fake_repository_return_value(out: &mut dyn Write) -> io::Result<()> {
    write_heading(out, "fake_repository_return_value")?;
    writeln!(out, "Didn't bother to write helper methods; ")?;
    writeln!(out, "std::optional has no map() or filter() like Java")
}

pub fn direct_value_access(out: &mut dyn Write) -> io::Result<()> {
    write_heading(out, "direct_value_access")?;

    let hyunday_opt = Optional::new(LOUD_CAR);

    let manufacturer1 = hyunday_opt.value().map(|car| &car.manufacturer);
    let manufacturer2 = &(*hyunday_opt).manufacturer;
    let manufacturer3 = &hyunday_opt.manufacturer;

    if manufacturer1 == Ok(manufacturer2) && manufacturer2 == manufacturer3 && *manufacturer3 == "Hyundai" {
        writeln!(out, "C++ offers some nicer ways to directly access the object")?;
    }
    Ok(())
}

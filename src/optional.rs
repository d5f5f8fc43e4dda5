//! # Optional Module
//!
//! A container that either holds a value of `T` or holds nothing.
//!
//! `Optional<T>` is a two-state tagged union:
//! - [`Optional::Empty`] - no value
//! - [`Optional::Filled`] - exactly one value of `T`
//!
//! An empty optional of any element type can be built from the typeless
//! [`NULLOPT`] marker. Checked access goes through [`Optional::value`], which
//! reports [`OptionalError::EmptyAccess`] instead of aborting. Unchecked
//! access goes through `Deref`, so both `*opt` and `opt.field` reach the
//! contained value directly.
//!
//! ```
//! use optional_showcase::{Optional, OptionalError, NULLOPT};
//!
//! let empty: Optional<i32> = NULLOPT.into();
//! assert!(!empty.has_value());
//! assert_eq!(empty.value(), Err(OptionalError::EmptyAccess));
//! assert_eq!(empty.value_or(7), 7);
//!
//! let filled = Optional::new(42);
//! assert_eq!(filled.value(), Ok(&42));
//! assert_eq!(*filled, 42);
//! ```

use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// Failure raised by checked access on an empty optional.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    #[error("bad optional access")]
    EmptyAccess,
}

/// The absent marker. Converts into an empty `Optional<T>` for every `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullOpt;

/// The single absent marker value.
pub const NULLOPT: NullOpt = NullOpt;

impl fmt::Display for NullOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nullopt")
    }
}

/// Either empty or filled with one value of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Empty,
    Filled(T),
}

impl<T> Optional<T> {
    /// Creates an empty optional without needing a `T`.
    pub const fn empty() -> Self {
        Optional::Empty
    }

    /// Creates a filled optional that owns `value`.
    pub const fn new(value: T) -> Self {
        Optional::Filled(value)
    }

    /// Returns `true` iff the optional is filled.
    pub const fn has_value(&self) -> bool {
        matches!(self, Optional::Filled(_))
    }

    /// Borrows the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::EmptyAccess`] if the optional is empty.
    pub fn value(&self) -> Result<&T, OptionalError> {
        match self {
            Optional::Filled(value) => Ok(value),
            Optional::Empty => Err(OptionalError::EmptyAccess),
        }
    }

    /// Consumes the optional and returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::EmptyAccess`] if the optional is empty.
    pub fn into_value(self) -> Result<T, OptionalError> {
        match self {
            Optional::Filled(value) => Ok(value),
            Optional::Empty => Err(OptionalError::EmptyAccess),
        }
    }

    /// Returns a copy of the contained value, or `fallback` if empty.
    ///
    /// `fallback` is always evaluated by the caller; use
    /// [`Optional::value_or_else`] to defer it.
    pub fn value_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self {
            Optional::Filled(value) => value.clone(),
            Optional::Empty => fallback,
        }
    }

    /// Like [`Optional::value_or`], but only builds the fallback when empty.
    pub fn value_or_else<F>(&self, fallback: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self {
            Optional::Filled(value) => value.clone(),
            Optional::Empty => fallback(),
        }
    }

    /// Returns `self` if filled, otherwise `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Filled(_) => self,
            Optional::Empty => other,
        }
    }

    /// Returns `self` if filled, otherwise the optional produced by `f`.
    pub fn or_else<F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Filled(_) => self,
            Optional::Empty => f(),
        }
    }

    /// Unwraps the value or hands back the caller's own error.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Filled(value) => Ok(value),
            Optional::Empty => Err(err),
        }
    }

    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Filled(value) => Ok(value),
            Optional::Empty => Err(err()),
        }
    }

    /// Runs `f` on the contained value; does nothing when empty.
    pub fn if_present<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Optional::Filled(value) = self {
            f(value);
        }
    }

    /// Transforms the contained value. Empty stays empty.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Filled(value) => Optional::Filled(f(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Filled(value) => {
                if predicate(&value) {
                    Optional::Filled(value)
                } else {
                    Optional::Empty
                }
            }
            Optional::Empty => Optional::Empty,
        }
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Filled(value) => Optional::Filled(value),
            Optional::Empty => Optional::Empty,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Empty
    }
}

impl<T> From<NullOpt> for Optional<T> {
    fn from(_: NullOpt) -> Self {
        Optional::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Filled(value),
            None => Optional::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional {
            Optional::Filled(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

/// Unchecked access. Panics on an empty optional; only use it on optionals
/// known to be filled.
impl<T> Deref for Optional<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Optional::Filled(value) => value,
            Optional::Empty => panic!("dereferenced an empty optional"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Filled(value) => fmt::Display::fmt(value, f),
            Optional::Empty => fmt::Display::fmt(&NULLOPT, f),
        }
    }
}

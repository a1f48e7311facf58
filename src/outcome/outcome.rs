use std::mem;

use super::{ErrorSet, Member};
use crate::panic::{Fatal, WrongStatePanic};

/// The result of a computation that may fail with one of a closed set of error kinds.
///
/// An Outcome is in exactly one of three states:
/// - [`Empty`](Outcome::Empty): neither a value nor an error. This is the default state and the
///   state left behind by [`take`](Outcome::take); it isn't a meaningful result by itself.
/// - [`Value`](Outcome::Value): the computation produced a `T`.
/// - [`Error`](Outcome::Error): the computation failed with one kind from the set `E`.
///
/// Unlike [`Result`], reading the wrong state through [`value`](Outcome::value) or
/// [`error`](Outcome::error) is a fatal contract violation. Callers are expected to branch on
/// [`has_value`](Outcome::has_value), [`has_error`](Outcome::has_error) or plain pattern matching
/// first.
///
/// An Outcome with a narrow error set converts into one with a wider set through
/// [`widen`](Outcome::widen), which carries the error kind and payload across unchanged. The wider
/// set must list every kind of the narrower one; this is checked when compiling the [`From`] impl
/// between the two sets, so there is no runtime "unknown kind" case.
///
/// # Examples
/// ```
/// use derive_more::{Display, Error};
/// use standard_core::error_set;
/// use standard_core::outcome::Outcome;
///
/// #[derive(Debug, Display, Error, PartialEq)]
/// #[display("too large")]
/// struct TooLarge;
///
/// #[derive(Debug, Display, Error, PartialEq)]
/// #[display("too small")]
/// struct TooSmall;
///
/// error_set! {
///     #[derive(Debug, PartialEq)]
///     enum RangeError {
///         TooLarge(TooLarge),
///         TooSmall(TooSmall),
///     }
/// }
///
/// fn clamp_check(value: i32) -> Outcome<i32, RangeError> {
///     if value > 1000 {
///         Outcome::err(TooLarge)
///     } else if value < -1000 {
///         Outcome::err(TooSmall)
///     } else {
///         Outcome::ok(value)
///     }
/// }
///
/// assert_eq!(*clamp_check(12).value(), 12);
/// assert!(clamp_check(5000).has_error::<TooLarge>());
/// assert!(!clamp_check(5000).has_error::<TooSmall>());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    #[default]
    Empty,
    Value(T),
    Error(E),
}

impl<T, E: ErrorSet> Outcome<T, E> {
    /// Creates an Outcome holding `value`.
    pub const fn ok(value: T) -> Outcome<T, E> {
        Outcome::Value(value)
    }

    /// Creates an Outcome holding the error kind `K`.
    pub fn err<K>(kind: K) -> Outcome<T, E>
    where
        E: Member<K>,
    {
        Outcome::Error(E::from(kind))
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    pub const fn has_any_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Whether self holds an error of kind `K`. Kinds are compared by slot, never by payload.
    pub fn has_error<K>(&self) -> bool
    where
        E: Member<K>,
    {
        match self {
            Outcome::Error(error) => error.slot() == <E as Member<K>>::SLOT,
            _ => false,
        }
    }

    /// Returns a reference to the contained value.
    ///
    /// # Panics
    /// Panics if self doesn't hold a value.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Value(value) => value,
            other => other.wrong_state("a value"),
        }
    }

    /// Returns a mutable reference to the contained value.
    ///
    /// # Panics
    /// Panics if self doesn't hold a value.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Outcome::Value(value) => value,
            other => other.wrong_state("a value"),
        }
    }

    /// Consumes self, returning the contained value.
    ///
    /// # Panics
    /// Panics if self doesn't hold a value.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Outcome::Value(value) => value,
            other => other.wrong_state("a value"),
        }
    }

    /// Returns the contained value, or `default` in any other state.
    pub fn value_or(self, default: T) -> T {
        match self {
            Outcome::Value(value) => value,
            _ => default,
        }
    }

    /// Returns a reference to the payload of the error kind `K`.
    ///
    /// # Panics
    /// Panics unless self holds an error of exactly kind `K`.
    #[track_caller]
    pub fn error<K>(&self) -> &K
    where
        E: Member<K>,
    {
        let found = match self {
            Outcome::Error(error) => error.get(),
            _ => None,
        };
        match found {
            Some(kind) => kind,
            None => self.wrong_state(E::KINDS[<E as Member<K>>::SLOT]),
        }
    }

    /// Consumes self, returning the payload of the error kind `K`.
    ///
    /// # Panics
    /// Panics unless self holds an error of exactly kind `K`.
    #[track_caller]
    pub fn into_error<K>(self) -> K
    where
        E: Member<K>,
    {
        match self {
            Outcome::Error(error) => match error.take() {
                Ok(kind) => kind,
                Err(other) => Outcome::<T, E>::Error(other)
                    .wrong_state(E::KINDS[<E as Member<K>>::SLOT]),
            },
            other => other.wrong_state(E::KINDS[<E as Member<K>>::SLOT]),
        }
    }

    /// Returns a reference to the contained error set, whatever its kind.
    ///
    /// # Panics
    /// Panics if self doesn't hold an error.
    #[track_caller]
    pub fn any_error(&self) -> &E {
        match self {
            Outcome::Error(error) => error,
            other => other.wrong_state("an error"),
        }
    }

    /// Moves the current state out of self, leaving [`Empty`](Outcome::Empty) behind.
    pub fn take(&mut self) -> Outcome<T, E> {
        mem::take(self)
    }

    /// Converts into an Outcome over a wider error set. Empty stays empty, a value stays a value
    /// and an error is re-tagged into the same kind of the wider set with its payload unchanged.
    pub fn widen<F: ErrorSet + From<E>>(self) -> Outcome<T, F> {
        match self {
            Outcome::Empty => Outcome::Empty,
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Error(error) => Outcome::Error(F::from(error)),
        }
    }

    pub fn map<U, M: FnOnce(T) -> U>(self, op: M) -> Outcome<U, E> {
        match self {
            Outcome::Empty => Outcome::Empty,
            Outcome::Value(value) => Outcome::Value(op(value)),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Runs `op` only if self holds an error, then returns self unchanged. This is the failure-only
    /// counterpart of a scope guard: cleanup that should happen only when a call fails is keyed on
    /// the Outcome itself.
    pub fn on_error<O: FnOnce(&E)>(self, op: O) -> Outcome<T, E> {
        if let Outcome::Error(error) = &self {
            op(error);
        }
        self
    }

    /// Converts into a [`Result`], so that `?` can be used in functions returning one.
    ///
    /// # Panics
    /// Panics if self is empty.
    #[track_caller]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(error) => Err(error),
            Outcome::Empty => Outcome::<T, E>::Empty.wrong_state("a value or an error"),
        }
    }

    fn state_name(&self) -> &'static str {
        match self {
            Outcome::Empty => "empty",
            Outcome::Value(_) => "a value",
            Outcome::Error(error) => error.kind_name(),
        }
    }

    #[track_caller]
    fn wrong_state(&self, expected: &'static str) -> ! {
        WrongStatePanic {
            expected,
            actual: self.state_name(),
        }
        .raise()
    }
}

impl<T, E: ErrorSet> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Error(error),
        }
    }
}

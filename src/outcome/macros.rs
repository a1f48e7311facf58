/// Declares an error set: an enum with one single-field variant per error kind, implementing
/// [`ErrorSet`](crate::outcome::ErrorSet), [`Member`](crate::outcome::Member) for every kind,
/// [`From`] for every kind, [`Display`](std::fmt::Display) and [`Error`](std::error::Error).
///
/// Every kind must implement [`Error`](std::error::Error) and be `'static`. Slots are assigned in
/// declaration order. Listing the same kind twice is a compile error.
///
/// Attributes before `enum` are forwarded. The set must derive `Debug` and may derive `Clone`,
/// `PartialEq` and friends. Don't derive `Display`, `Error` or `From`, they're generated.
///
/// # Examples
/// ```
/// use derive_more::{Display, Error};
/// use standard_core::error_set;
/// use standard_core::outcome::ErrorSet;
///
/// #[derive(Debug, Display, Error)]
/// #[display("overflow")]
/// struct Overflow;
///
/// #[derive(Debug, Display, Error)]
/// #[display("underflow")]
/// struct Underflow;
///
/// error_set! {
///     #[derive(Debug)]
///     pub enum MathError {
///         Overflow(Overflow),
///         Underflow(Underflow),
///     }
/// }
///
/// let error = MathError::from(Underflow);
/// assert_eq!(error.slot(), 1);
/// assert_eq!(error.kind_name(), "Underflow");
/// assert_eq!(error.to_string(), "underflow");
/// ```
#[macro_export]
macro_rules! error_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident($kind:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$variant_meta])* $variant($kind) ),+
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $( $name::$variant(kind) => ::core::fmt::Display::fmt(kind, f) ),+
                }
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> ::core::option::Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    $( $name::$variant(kind) => ::core::option::Option::Some(
                        kind as &(dyn ::std::error::Error + 'static)
                    ) ),+
                }
            }
        }

        $(
            impl ::core::convert::From<$kind> for $name {
                fn from(kind: $kind) -> Self {
                    $name::$variant(kind)
                }
            }
        )+

        const _: () = {
            #[allow(dead_code, non_camel_case_types)]
            enum Slot {
                $( $variant ),+
            }

            impl $crate::outcome::ErrorSet for $name {
                const KINDS: &'static [&'static str] = &[ $( ::core::stringify!($variant) ),+ ];

                fn slot(&self) -> usize {
                    match self {
                        $( $name::$variant(_) => Slot::$variant as usize ),+
                    }
                }
            }

            $(
                impl $crate::outcome::Member<$kind> for $name {
                    const SLOT: usize = Slot::$variant as usize;

                    #[allow(unreachable_patterns)]
                    fn get(&self) -> ::core::option::Option<&$kind> {
                        match self {
                            $name::$variant(kind) => ::core::option::Option::Some(kind),
                            _ => ::core::option::Option::None,
                        }
                    }

                    #[allow(unreachable_patterns)]
                    fn take(self) -> ::core::result::Result<$kind, Self> {
                        match self {
                            $name::$variant(kind) => ::core::result::Result::Ok(kind),
                            other => ::core::result::Result::Err(other),
                        }
                    }
                }
            )+
        };
    };
}

/// Implements [`From`] from a narrow error set into a wider one, by exhaustively matching every
/// variant of the narrow set and re-tagging its payload as the same kind in the wider set.
///
/// Leaving out a variant of `$from` fails to compile (non-exhaustive match), as does naming a kind
/// the wider set doesn't declare (missing `From` impl).
///
/// # Examples
/// ```
/// use derive_more::{Display, Error};
/// use standard_core::{error_set, widen};
/// use standard_core::outcome::Outcome;
///
/// #[derive(Debug, Display, Error, PartialEq)]
/// #[display("a")]
/// struct A;
/// #[derive(Debug, Display, Error, PartialEq)]
/// #[display("b")]
/// struct B;
/// #[derive(Debug, Display, Error, PartialEq)]
/// #[display("c")]
/// struct C;
///
/// error_set! { #[derive(Debug)] enum Narrow { A(A), B(B) } }
/// error_set! { #[derive(Debug)] enum Wide { A(A), B(B), C(C) } }
/// widen!(Narrow => Wide { A, B });
///
/// let narrow: Outcome<(), Narrow> = Outcome::err(B);
/// let wide: Outcome<(), Wide> = narrow.widen();
/// assert!(wide.has_error::<B>());
/// assert!(!wide.has_error::<C>());
/// ```
#[macro_export]
macro_rules! widen {
    ($from:ident => $to:ident { $($variant:ident),+ $(,)? }) => {
        impl ::core::convert::From<$from> for $to {
            fn from(value: $from) -> Self {
                match value {
                    $( $from::$variant(kind) => $to::from(kind) ),+
                }
            }
        }
    };
}

/// Unwraps the value of an [`Outcome`](crate::outcome::Outcome), or returns early from the
/// enclosing function with the error widened into its return type. An empty Outcome is returned as
/// empty.
///
/// # Examples
/// ```
/// use derive_more::{Display, Error};
/// use standard_core::{attempt, error_set};
/// use standard_core::outcome::Outcome;
///
/// #[derive(Debug, Display, Error)]
/// #[display("odd")]
/// struct Odd;
///
/// error_set! { #[derive(Debug)] enum ParityError { Odd(Odd) } }
///
/// fn half(value: u32) -> Outcome<u32, ParityError> {
///     if value % 2 == 0 { Outcome::ok(value / 2) } else { Outcome::err(Odd) }
/// }
///
/// fn quarter(value: u32) -> Outcome<u32, ParityError> {
///     let halved = attempt!(half(value));
///     half(halved)
/// }
///
/// assert_eq!(*quarter(12).value(), 3);
/// assert!(quarter(6).has_error::<Odd>());
/// ```
#[macro_export]
macro_rules! attempt {
    ($outcome:expr) => {
        match $outcome {
            $crate::outcome::Outcome::Value(value) => value,
            $crate::outcome::Outcome::Error(error) => {
                return $crate::outcome::Outcome::Error(::core::convert::From::from(error));
            }
            $crate::outcome::Outcome::Empty => return $crate::outcome::Outcome::Empty,
        }
    };
}

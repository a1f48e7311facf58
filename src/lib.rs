//! This crate is a small core library: checked integers, a typed result with explicit error sets,
//! and containers that take their memory from an allocator the caller chooses.
//!
//! # Purpose
//! Each piece is a building block that the rest of a program can rely on without hidden costs or
//! hidden failure modes. Arithmetic never wraps silently, errors are always one of a closed list of
//! kinds that the caller can name, and nothing allocates unless it was handed an allocator.
//!
//! # Error Handling
//! There are two tiers of failure here, and it's worth being clear about which is which.
//!
//! A broken contract, such as an integer overflow, reading the wrong state of an
//! [`Outcome`](outcome::Outcome) or running out of memory in a method that can't report it, is
//! fatal. These conditions live in [`panic`], and all of them panic with a message pointing at the
//! caller's source location. (Set `panic = "abort"` if they should take the process down outright.)
//!
//! Expected failures are returned as values. An [`Outcome`](outcome::Outcome) holds either a value
//! or one error out of a set declared with [`error_set!`], and each error kind is a plain struct
//! (often a ZST) implementing [`Error`](std::error::Error). Error sets convert into wider sets
//! through exhaustive matches written by [`widen!`], so adding a kind is a compile error everywhere
//! it isn't handled.
//!
//! # Allocation
//! The [`alloc`] module defines a small, byte-oriented [`Allocator`](alloc::Allocator) trait with
//! several backends. The C heap backend relies on `libc` and can be turned off with the `heap`
//! feature. The [`collections`] take an allocator on every call that might need memory, or bind
//! one with [`Managed`](collections::Managed).
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming, and optionally on `log` (the `logging` feature) to trace allocator
//! traffic.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

mod logging;

pub mod alloc;
#[cfg(feature = "collections")]
pub mod collections;
pub mod num;
pub mod outcome;
pub mod panic;

#[cfg(test)]
pub(crate) mod util;

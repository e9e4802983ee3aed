#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]
#![cfg_attr(feature = "nightly", feature(try_trait_v2, try_trait_v2_residual))]

extern crate alloc;

/// Emits a trace event naming the variant being dispatched.
macro_rules! trace_dispatch {
    ($tag:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(variant = $tag.as_str(), "dispatching outcome");
    };
}

pub mod dispatch;
pub mod errors;
pub mod result;
pub mod tag;
pub mod variant;

pub use dispatch::Outcome;
pub use errors::{Error, UnknownTag};
pub use result::{Result, result};
pub use tag::Tag;
pub use variant::{Failure, Success};

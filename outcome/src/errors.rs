use alloc::string::String;

/// The default failure payload of [`Result`](crate::Result), boxed as `Box<dyn Error>`.
pub trait Error: core::error::Error {}

impl<T: core::error::Error> Error for T {}

/// A discriminant string that names neither variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown result tag `{0}`, expected `success` or `failure`")]
pub struct UnknownTag(pub String);

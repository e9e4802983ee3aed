use crate::tag::Tag;

/// The outcome of a computation that produced a value.
///
/// # Examples
///
/// ```
/// use outcome::Success;
///
/// let success = Success::new(5);
/// assert_eq!(success.value, 5);
/// assert_eq!(*success.value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Success<T> {
    pub value: T,
}

impl<T> Success<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// The produced value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Borrows the payload, leaving `self` untouched.
    #[must_use]
    pub const fn as_ref(&self) -> Success<&T> {
        Success { value: &self.value }
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        Tag::Success
    }
}

/// The outcome of a computation that did not produce a value, and why.
///
/// The reason is ordinary data and need not be an error type.
///
/// # Examples
///
/// ```
/// use outcome::Failure;
///
/// let failure = Failure::new("bad");
/// assert_eq!(failure.reason, "bad");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Failure<E> {
    pub reason: E,
}

impl<E> Failure<E> {
    #[must_use]
    pub const fn new(reason: E) -> Self {
        Self { reason }
    }

    /// Why the computation failed.
    #[must_use]
    pub const fn reason(&self) -> &E {
        &self.reason
    }

    #[must_use]
    pub fn into_reason(self) -> E {
        self.reason
    }

    /// Borrows the payload, leaving `self` untouched.
    #[must_use]
    pub const fn as_ref(&self) -> Failure<&E> {
        Failure {
            reason: &self.reason,
        }
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        Tag::Failure
    }
}

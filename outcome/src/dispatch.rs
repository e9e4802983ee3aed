//! Dispatch through the variants themselves instead of through the tag.
//!
//! Each of [`Success`] and [`Failure`] implements [`Outcome`] on its own and knows which
//! handler to call. [`Result`] implements it by forwarding to whichever variant it holds, so
//! code written against the trait accepts every encoding.

use crate::{
    result::{Result, result},
    tag::Tag,
    variant::{Failure, Success},
};

/// A value that is either a success carrying a `T` or a failure carrying an `E`.
pub trait Outcome<T, E> {
    /// The discriminant of this outcome.
    fn tag(&self) -> Tag;

    /// Consumes the outcome and calls exactly one of the handlers, returning its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Failure, Outcome, Success};
    ///
    /// let double = |s: Success<usize>| s.value * 2;
    /// let length = |f: Failure<&str>| f.reason.len();
    ///
    /// assert_eq!(Success::new(5).match_with(double, length), 10);
    /// assert_eq!(Failure::new("bad").match_with(double, length), 3);
    /// ```
    fn match_with<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        Self: Sized,
        F: FnOnce(Success<T>) -> U,
        G: FnOnce(Failure<E>) -> U;

    /// Like [`match_with`](Self::match_with), but hands out borrowed variants so the outcome
    /// can be observed any number of times.
    fn match_ref<'a, U, F, G>(&'a self, on_success: F, on_failure: G) -> U
    where
        T: 'a,
        E: 'a,
        F: FnOnce(Success<&'a T>) -> U,
        G: FnOnce(Failure<&'a E>) -> U;

    /// Converts into the tagged encoding.
    fn into_result(self) -> Result<T, E>
    where
        Self: Sized,
    {
        self.match_with(Result::Success, Result::Failure)
    }
}

impl<T, E> Outcome<T, E> for Success<T> {
    fn tag(&self) -> Tag {
        Self::tag(self)
    }

    fn match_with<U, F, G>(self, on_success: F, _on_failure: G) -> U
    where
        F: FnOnce(Self) -> U,
        G: FnOnce(Failure<E>) -> U,
    {
        trace_dispatch!(Tag::Success);
        on_success(self)
    }

    fn match_ref<'a, U, F, G>(&'a self, on_success: F, _on_failure: G) -> U
    where
        T: 'a,
        E: 'a,
        F: FnOnce(Success<&'a T>) -> U,
        G: FnOnce(Failure<&'a E>) -> U,
    {
        trace_dispatch!(Tag::Success);
        on_success(self.as_ref())
    }
}

impl<T, E> Outcome<T, E> for Failure<E> {
    fn tag(&self) -> Tag {
        Self::tag(self)
    }

    fn match_with<U, F, G>(self, _on_success: F, on_failure: G) -> U
    where
        F: FnOnce(Success<T>) -> U,
        G: FnOnce(Self) -> U,
    {
        trace_dispatch!(Tag::Failure);
        on_failure(self)
    }

    fn match_ref<'a, U, F, G>(&'a self, _on_success: F, on_failure: G) -> U
    where
        T: 'a,
        E: 'a,
        F: FnOnce(Success<&'a T>) -> U,
        G: FnOnce(Failure<&'a E>) -> U,
    {
        trace_dispatch!(Tag::Failure);
        on_failure(self.as_ref())
    }
}

impl<T, E> Outcome<T, E> for Result<T, E> {
    fn tag(&self) -> Tag {
        Self::tag(self)
    }

    fn match_with<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce(Success<T>) -> U,
        G: FnOnce(Failure<E>) -> U,
    {
        result(self, on_success, on_failure)
    }

    fn match_ref<'a, U, F, G>(&'a self, on_success: F, on_failure: G) -> U
    where
        T: 'a,
        E: 'a,
        F: FnOnce(Success<&'a T>) -> U,
        G: FnOnce(Failure<&'a E>) -> U,
    {
        result(self.as_ref(), on_success, on_failure)
    }

    fn into_result(self) -> Self {
        self
    }
}

use alloc::boxed::Box;

use crate::{
    errors::Error,
    tag::Tag,
    variant::{Failure, Success},
};

/// Either a [`Success`] holding a value or a [`Failure`] holding a reason.
///
/// Failure is carried as data; nothing here panics or unwinds on the failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T, E = Box<dyn Error>> {
    Success(Success<T>),
    Failure(Failure<E>),
}

/// Calls `on_success` or `on_failure` depending on the variant of `r` and returns what it returns.
///
/// Exactly one handler runs, once, on the calling thread. A panic raised by the handler
/// propagates unchanged.
///
/// # Examples
///
/// ```
/// use outcome::{Failure, Result, Success, result};
///
/// let double = |s: Success<usize>| s.value * 2;
/// let length = |f: Failure<&str>| f.reason.len();
///
/// assert_eq!(result(Result::success(5), double, length), 10);
/// assert_eq!(result(Result::failure("bad"), double, length), 3);
/// ```
pub fn result<T, E, U, F, G>(r: Result<T, E>, on_success: F, on_failure: G) -> U
where
    F: FnOnce(Success<T>) -> U,
    G: FnOnce(Failure<E>) -> U,
{
    trace_dispatch!(r.tag());
    match r {
        Result::Success(success) => on_success(success),
        Result::Failure(failure) => on_failure(failure),
    }
}

impl<T, E> Result<T, E> {
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(Success::new(value))
    }

    #[must_use]
    pub const fn failure(reason: E) -> Self {
        Self::Failure(Failure::new(reason))
    }

    /// The discriminant of this value.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Success(_) => Tag::Success,
            Self::Failure(_) => Tag::Failure,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.tag().is_success()
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.tag().is_failure()
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    ///
    /// Dispatching on the borrowed value leaves the original intact, so it can be matched again.
    #[must_use]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Success(success) => Result::Success(success.as_ref()),
            Self::Failure(failure) => Result::Failure(failure.as_ref()),
        }
    }

    /// Returns a reference to the value, if this is a success.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(success) => Some(&success.value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the reason, if this is a failure.
    #[must_use]
    pub const fn reason(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(&failure.reason),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        result(self, |s| Some(s.value), |_| None)
    }

    #[must_use]
    pub fn into_reason(self) -> Option<E> {
        result(self, |_| None, |f| Some(f.reason))
    }

    /// Transforms the value of a success, passing a failure through untouched.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(success) => Result::success(f(success.value)),
            Self::Failure(failure) => Result::Failure(failure),
        }
    }

    /// Transforms the reason of a failure, passing a success through untouched.
    #[must_use]
    pub fn map_failure<R, F>(self, f: F) -> Result<T, R>
    where
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(success) => Result::Success(success),
            Self::Failure(failure) => Result::failure(f(failure.reason)),
        }
    }

    /// Chains a computation that may itself fail onto a success.
    #[must_use]
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(success) => f(success.value),
            Self::Failure(failure) => Result::Failure(failure),
        }
    }

    /// Converts into the standard library's `Result`.
    #[allow(clippy::missing_errors_doc)]
    #[must_use]
    pub fn into_std(self) -> core::result::Result<T, E> {
        result(self, |s| Ok(s.value), |f| Err(f.reason))
    }
}

impl<T, E> From<Success<T>> for Result<T, E> {
    fn from(success: Success<T>) -> Self {
        Self::Success(success)
    }
}

impl<T, E> From<Failure<E>> for Result<T, E> {
    fn from(failure: Failure<E>) -> Self {
        Self::Failure(failure)
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::success(value),
            Err(reason) => Self::failure(reason),
        }
    }
}

#[cfg(feature = "nightly")]
mod try_impl {
    use core::{
        convert::Infallible,
        ops::{ControlFlow, FromResidual, Residual, Try},
    };

    use super::Result;

    impl<T, E> Try for Result<T, E> {
        type Output = T;
        type Residual = Result<Infallible, E>;

        fn from_output(output: T) -> Self {
            Self::success(output)
        }

        fn branch(self) -> ControlFlow<Self::Residual, T> {
            match self {
                Self::Success(success) => ControlFlow::Continue(success.value),
                Self::Failure(failure) => ControlFlow::Break(Result::Failure(failure)),
            }
        }
    }

    impl<T, E> Residual<T> for Result<Infallible, E> {
        type TryType = Result<T, E>;
    }

    impl<T, E, R: From<E>> FromResidual<Result<Infallible, E>> for Result<T, R> {
        fn from_residual(residual: Result<Infallible, E>) -> Self {
            match residual {
                Result::Success(success) => match success.value {},
                Result::Failure(failure) => Self::failure(R::from(failure.reason)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, string::String, vec::Vec};
    use core::cell::Cell;

    use super::{Result, result};
    use crate::{
        errors::{Error, UnknownTag},
        tag::Tag,
    };

    #[test]
    fn test_dispatch_success() {
        let failures = Cell::new(0);
        let seen = result(
            Result::<i32, &str>::success(7),
            |s| s.value,
            |_| {
                failures.set(failures.get() + 1);
                -1
            },
        );
        assert_eq!(seen, 7);
        assert_eq!(failures.get(), 0);
    }

    #[test]
    fn test_dispatch_failure() {
        let successes = Cell::new(0);
        let seen = result(
            Result::<i32, &str>::failure("boom"),
            |_| {
                successes.set(successes.get() + 1);
                ""
            },
            |f| f.reason,
        );
        assert_eq!(seen, "boom");
        assert_eq!(successes.get(), 0);
    }

    #[test]
    fn test_dispatch_forwards_return_value() {
        let double = |s: crate::Success<i32>| s.value * 2;
        let length = |f: crate::Failure<&str>| i32::try_from(f.reason.len()).unwrap();

        assert_eq!(result(Result::success(5), double, length), 10);
        assert_eq!(result(Result::failure("bad"), double, length), 3);
    }

    #[test]
    fn test_dispatch_on_borrow_is_repeatable() {
        let r: Result<String, u8> = Result::success(String::from("value"));
        let calls = Cell::new(0);
        let observe = || {
            result(
                r.as_ref(),
                |s| {
                    calls.set(calls.get() + 1);
                    s.value.len()
                },
                |f| usize::from(*f.reason),
            )
        };

        assert_eq!(observe(), observe());
        assert_eq!(calls.get(), 2);
        assert_eq!(r.value().map(String::as_str), Some("value"));
    }

    #[test]
    fn test_tag_and_predicates() {
        let ok: Result<u8, u8> = Result::success(1);
        let err: Result<u8, u8> = Result::failure(2);

        assert_eq!(ok.tag(), Tag::Success);
        assert!(ok.is_success() && !ok.is_failure());
        assert_eq!(err.tag(), Tag::Failure);
        assert!(err.is_failure() && !err.is_success());
    }

    #[test]
    fn test_accessors() {
        let ok: Result<u8, &str> = Result::success(1);
        let err: Result<u8, &str> = Result::failure("no");

        assert_eq!(ok.value(), Some(&1));
        assert_eq!(ok.reason(), None);
        assert_eq!(err.value(), None);
        assert_eq!(err.reason(), Some(&"no"));
        assert_eq!(ok.into_value(), Some(1));
        assert_eq!(err.into_reason(), Some("no"));
    }

    #[test]
    fn test_combinators() {
        let ok: Result<u8, &str> = Result::success(4);
        let err: Result<u8, &str> = Result::failure("no");

        assert_eq!(ok.map(|v| v + 1), Result::success(5));
        assert_eq!(err.map(|v| v + 1), Result::failure("no"));
        assert_eq!(err.map_failure(str::len), Result::failure(2));
        assert_eq!(ok.map_failure(str::len), Result::success(4));

        let halve = |v: u8| {
            if v.is_multiple_of(2) {
                Result::success(v / 2)
            } else {
                Result::failure("odd")
            }
        };
        assert_eq!(ok.and_then(halve), Result::success(2));
        assert_eq!(
            ok.and_then(halve).and_then(halve).and_then(halve),
            Result::failure("odd")
        );
        assert_eq!(err.and_then(halve), Result::failure("no"));
    }

    #[test]
    fn test_std_interop() {
        let parsed: Vec<Result<u8, _>> = ["12", "x"]
            .iter()
            .map(|s| Result::from(s.parse::<u8>()))
            .collect();

        assert!(parsed[0].is_success());
        assert!(parsed[1].is_failure());
        assert_eq!(Result::<u8, ()>::success(3).into_std(), Ok(3));
        assert_eq!(Result::<u8, ()>::failure(()).into_std(), Err(()));
    }

    #[test]
    fn test_default_failure_is_boxed_error() {
        let reason: Box<dyn Error> = Box::new(UnknownTag("nope".into()));
        let r: Result<u8> = Result::failure(reason);
        let message = result(r, |_| String::new(), |f| alloc::format!("{}", f.reason));
        assert_eq!(
            message,
            "unknown result tag `nope`, expected `success` or `failure`"
        );
    }

    #[cfg(feature = "nightly")]
    #[test]
    fn test_question_mark_short_circuits() {
        fn halve(v: u8) -> Result<u8, &'static str> {
            if v.is_multiple_of(2) {
                Result::success(v / 2)
            } else {
                Result::failure("odd")
            }
        }

        fn quarter(v: u8) -> Result<u8, &'static str> {
            let half = halve(v)?;
            halve(half)
        }

        assert_eq!(quarter(8), Result::success(2));
        assert_eq!(quarter(6), Result::failure("odd"));
        assert_eq!(quarter(7), Result::failure("odd"));
    }
}

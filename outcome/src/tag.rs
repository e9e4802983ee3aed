use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use alloc::string::ToString;

use crate::errors::UnknownTag;

/// The discriminant of a [`Result`](crate::Result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Success,
    Failure,
}

impl Tag {
    /// The wire name of the discriminant, `"success"` or `"failure"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = UnknownTag;

    /// Parses a discriminant. Matching is exact: `"Success"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

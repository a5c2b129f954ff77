use std::fmt;

/// Outcome of a cost query.
///
/// `Unreachable` means the search frontier emptied before the target was
/// settled. It is a normal outcome, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", content = "cost", rename_all = "snake_case")
)]
pub enum PathCost {
    Reachable(u64),
    Unreachable,
}

impl PathCost {
    /// The cost, if the target was reached.
    #[inline]
    pub fn cost(self) -> Option<u64> {
        match self {
            PathCost::Reachable(c) => Some(c),
            PathCost::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, PathCost::Reachable(_))
    }
}

impl From<Option<u64>> for PathCost {
    fn from(cost: Option<u64>) -> Self {
        match cost {
            Some(c) => PathCost::Reachable(c),
            None => PathCost::Unreachable,
        }
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCost::Reachable(c) => write!(f, "{c}"),
            PathCost::Unreachable => f.write_str("unreachable"),
        }
    }
}

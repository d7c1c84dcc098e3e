/// The outcome of an `if/else` or `match` inside a block.
///
/// Both arms may carry different types as long as each converts into the
/// family's component; [`Block::push_either`](crate::Block::push_either)
/// performs that conversion before handing the branch to
/// [`BlockBuilder::build_either`](crate::BlockBuilder::build_either).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch<A, B> {
    /// The `if` arm (or first `match` arm group).
    First(A),
    /// The `else` arm.
    Second(B),
}

impl<A, B> Branch<A, B> {
    /// Evaluate only the arm selected by `condition`.
    pub fn when(condition: bool, first: impl FnOnce() -> A, second: impl FnOnce() -> B) -> Self {
        if condition {
            Self::First(first())
        } else {
            Self::Second(second())
        }
    }

    /// Convert both arms with their own functions.
    pub fn map<C, D>(self, first: impl FnOnce(A) -> C, second: impl FnOnce(B) -> D) -> Branch<C, D> {
        match self {
            Self::First(a) => Branch::First(first(a)),
            Self::Second(b) => Branch::Second(second(b)),
        }
    }

    /// `true` when the first arm was taken.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        matches!(self, Self::First(_))
    }
}

impl<T> Branch<T, T> {
    /// Unwrap the taken arm when both arms share a type.
    pub fn into_inner(self) -> T {
        match self {
            Self::First(value) | Self::Second(value) => value,
        }
    }
}

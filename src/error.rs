use thiserror::Error;

/// `InvalidArgument` is returned when a call into [`SegTree`](crate::seg_tree::SegTree)
/// breaks one of its preconditions. The tree is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("cannot build a segment tree from an empty sequence")]
    EmptyInput,

    #[error("position {pos} is out of range for {len} elements")]
    PositionOutOfRange { pos: usize, len: usize },

    #[error("range [{left}, {right}] is invalid for {len} elements")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("a node sum overflows the value type")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;

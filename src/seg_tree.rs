use std::ops::RangeInclusive;

use crate::error::{InvalidArgument, Result};


/// Monoid must satisfy the following.
/// ```rs
/// fn test<M: Monoid>(m: M, n: M, l: M) {
///     m.op(M::identity()) == m;
///     M::identity().op(m) == m;
///     m.op(n.op(l)) == m.op(n).op(l);
/// }
/// ```
pub trait Monoid: Clone + Copy + PartialEq {
    fn identity() -> Self;
    fn op(self, other: Self) -> Self;

    /// `op` that reports overflow instead of wrapping or panicking.
    fn checked_op(self, other: Self) -> Option<Self> {
        Some(self.op(other))
    }
}

macro_rules! impl_sum_monoid {
    ($($t:ty),*) => {
        $(
            impl Monoid for $t {
                #[inline]
                fn identity() -> Self {
                    0
                }

                #[inline]
                fn op(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn checked_op(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

impl_sum_monoid!(i32, i64);

/// Segment tree over N monoid values. Point update and range query both take O(log N).
///
/// Nodes live in a flat array: the root is at 0 and node `i` has children `2i + 1` and `2i + 2`.
/// The array is sized for the next power of two of N, while the recursion only ever
/// spans the logical range `0..=N-1`, so slots it never reaches keep the identity.
#[derive(Debug, Clone)]
pub struct SegTree<T> {
    vec: Vec<T>,
    size: usize,
    padded_size: usize,
}

impl<T: Monoid> SegTree<T> {
    pub fn new(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            return Err(InvalidArgument::EmptyInput);
        }

        let size = values.len();
        let padded_size = size.next_power_of_two();

        let mut tree = Self {
            vec: vec![T::identity(); padded_size * 2 - 1],
            size,
            padded_size,
        };
        tree.build(values, 0, 0..=size - 1)?;

        Ok(tree)
    }

    fn build(&mut self, values: &[T], index: usize, looking: RangeInclusive<usize>) -> Result<()> {
        let (lx, rx) = (*looking.start(), *looking.end());

        if lx == rx {
            self.vec[index] = values[lx];
            return Ok(());
        }

        let mid = (lx + rx) / 2;
        self.build(values, index * 2 + 1, lx..=mid)?;
        self.build(values, index * 2 + 2, mid + 1..=rx)?;
        self.vec[index] = self.vec[index * 2 + 1]
            .checked_op(self.vec[index * 2 + 2])
            .ok_or(InvalidArgument::Overflow)?;
        Ok(())
    }

    #[inline]
    fn pull(&mut self, index: usize) {
        self.vec[index] = self.vec[index * 2 + 1].op(self.vec[index * 2 + 2]);
    }

    fn query_sub(
        &self,
        querying: &RangeInclusive<usize>,
        index: usize,
        looking: RangeInclusive<usize>,
    ) -> Option<T> {
        let (lx, rx) = (*looking.start(), *looking.end());

        if rx < *querying.start() || *querying.end() < lx {
            // no overlap
            Some(T::identity())
        } else if *querying.start() <= lx && rx <= *querying.end() {
            // looking lies entirely inside querying
            Some(self.vec[index])
        } else {
            let mid = (lx + rx) / 2;
            self.query_sub(querying, index * 2 + 1, lx..=mid)?
                .checked_op(self.query_sub(querying, index * 2 + 2, mid + 1..=rx)?)
        }
    }

    /// Folds the values at `left..=right`. A fold that overflows is reported as `Overflow`.
    pub fn query(&self, left: usize, right: usize) -> Result<T> {
        if right < left || self.size <= right {
            return Err(InvalidArgument::InvalidRange {
                left,
                right,
                len: self.size,
            });
        }

        self.query_sub(&(left..=right), 0, 0..=self.size - 1)
            .ok_or(InvalidArgument::Overflow)
    }

    /// Backing index of the leaf holding `pos`.
    fn leaf(&self, pos: usize) -> usize {
        let (mut index, mut lx, mut rx) = (0, 0, self.size - 1);
        while lx != rx {
            let mid = (lx + rx) / 2;
            if pos <= mid {
                index = index * 2 + 1;
                rx = mid;
            } else {
                index = index * 2 + 2;
                lx = mid + 1;
            }
        }
        index
    }

    fn update_sub(&mut self, pos: usize, value: T, index: usize, looking: RangeInclusive<usize>) {
        let (lx, rx) = (*looking.start(), *looking.end());

        if lx == rx {
            self.vec[index] = value;
            return;
        }

        let mid = (lx + rx) / 2;
        if pos <= mid {
            self.update_sub(pos, value, index * 2 + 1, lx..=mid);
        } else {
            self.update_sub(pos, value, index * 2 + 2, mid + 1..=rx);
        }
        self.pull(index);
    }

    /// The value `index` would hold after `update(pos, value)`, or `None` on overflow.
    fn updated_value(
        &self,
        pos: usize,
        value: T,
        index: usize,
        looking: RangeInclusive<usize>,
    ) -> Option<T> {
        let (lx, rx) = (*looking.start(), *looking.end());

        if lx == rx {
            return Some(value);
        }

        let mid = (lx + rx) / 2;
        if pos <= mid {
            self.updated_value(pos, value, index * 2 + 1, lx..=mid)?
                .checked_op(self.vec[index * 2 + 2])
        } else {
            self.vec[index * 2 + 1]
                .checked_op(self.updated_value(pos, value, index * 2 + 2, mid + 1..=rx)?)
        }
    }

    /// Fails with `Overflow`, leaving the tree untouched, when a sum on the path would overflow.
    pub fn update(&mut self, pos: usize, value: T) -> Result<()> {
        self.check_pos(pos)?;
        self.updated_value(pos, value, 0, 0..=self.size - 1)
            .ok_or(InvalidArgument::Overflow)?;
        self.update_sub(pos, value, 0, 0..=self.size - 1);
        Ok(())
    }

    /// Resets `pos` to the identity. The position stays addressable.
    pub fn eliminate(&mut self, pos: usize) -> Result<()> {
        self.update(pos, T::identity())
    }

    pub fn get(&self, pos: usize) -> Result<T> {
        self.check_pos(pos)?;
        Ok(self.vec[self.leaf(pos)])
    }

    /// The current logical sequence, read back one leaf at a time.
    pub fn values(&self) -> Vec<T> {
        (0..self.size).map(|pos| self.vec[self.leaf(pos)]).collect()
    }

    /// The whole backing array, including slots the logical range never reaches.
    #[inline]
    pub fn raw_nodes(&self) -> &[T] {
        &self.vec
    }

    #[inline]
    pub fn logical_size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn padded_size(&self) -> usize {
        self.padded_size
    }

    fn check_pos(&self, pos: usize) -> Result<()> {
        if self.size <= pos {
            return Err(InvalidArgument::PositionOutOfRange {
                pos,
                len: self.size,
            });
        }
        Ok(())
    }
}

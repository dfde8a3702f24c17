//! Lazy segment tree where a range increment adds a fixed per-index weight
//! instead of a flat constant.
//!
//! Every update is a count of weighted increments. A node holding `k` pending
//! increments over `[l, r]` has already added `k * (W(r) - W(l - 1))` to its
//! own sum, where `W` is the prefix sum of the weights, so pushing down only
//! moves the count to the children.
//!
//! Every node sum is a contiguous range sum, so its magnitude never exceeds
//! `sum |values| + applied * sum |weights|`, where `applied` is the total of
//! `|times|` over all updates so far. Updates that would push this bound past
//! `i64::MAX` are rejected up front, so no arithmetic inside a traversal can
//! overflow. The bound ignores cancellation: `+k` followed by `-k` still
//! spends `2k` of headroom.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegTreeError {
    #[error("invalid construction: {values} values and {weights} weights")]
    InvalidConstruction { values: usize, weights: usize },
    #[error("range [{left}, {right}] is out of bounds for length {len}")]
    OutOfRange { left: i64, right: i64, len: usize },
    #[error("arithmetic overflow: {0} does not fit in i64")]
    Overflow(&'static str),
}

fn abs_sum(xs: &[i64]) -> Option<i64> {
    xs.iter().try_fold(0i64, |acc, &x| acc.checked_add(x.checked_abs()?))
}

#[derive(Debug, Clone)]
pub struct WeightedSegTree {
    n: usize,
    pub sum: Vec<i64>,
    pub lazy: Vec<i64>,
    // weight_prefix[i] = weights[0] + .. + weights[i - 1]
    weight_prefix: Vec<i64>,
    abs_values: i64,
    abs_weights: i64,
    // sum of |times| over every accepted update
    applied: i64,
}

impl WeightedSegTree {
    pub fn new(values: &[i64], weights: &[i64]) -> Result<Self, SegTreeError> {
        let n = values.len();
        if n == 0 || weights.len() != n {
            return Err(SegTreeError::InvalidConstruction {
                values: n,
                weights: weights.len(),
            });
        }
        let abs_values = abs_sum(values).ok_or(SegTreeError::Overflow("sum of |values|"))?;
        let abs_weights = abs_sum(weights).ok_or(SegTreeError::Overflow("sum of |weights|"))?;

        let mut weight_prefix = Vec::with_capacity(n + 1);
        weight_prefix.push(0);
        let mut acc = 0;
        for &w in weights {
            acc += w;
            weight_prefix.push(acc);
        }

        let mut tree = Self {
            n,
            sum: vec![0; 4 * n],
            lazy: vec![0; 4 * n],
            weight_prefix,
            abs_values,
            abs_weights,
            applied: 0,
        };
        tree.build_rec(1, 0, n - 1, values);
        log::debug!(
            "built weighted segment tree: n = {}, total = {}",
            n,
            tree.sum[1]
        );
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn build_rec(&mut self, node: usize, start: usize, end: usize, values: &[i64]) {
        self.lazy[node] = 0;
        if start == end {
            self.sum[node] = values[start];
            return;
        }
        let mid = (start + end) >> 1;
        self.build_rec(node << 1, start, mid, values);
        self.build_rec(node << 1 | 1, mid + 1, end, values);
        self.pull_sum(node);
    }

    fn check(&self, left: usize, right: usize) -> Result<(), SegTreeError> {
        if left < self.n && right < self.n {
            Ok(())
        } else {
            Err(SegTreeError::OutOfRange {
                left: i64::try_from(left).unwrap_or(i64::MAX),
                right: i64::try_from(right).unwrap_or(i64::MAX),
                len: self.n,
            })
        }
    }

    // caller guarantees start <= end < n
    #[inline]
    fn weight_between(&self, start: usize, end: usize) -> i64 {
        self.weight_prefix[end + 1] - self.weight_prefix[start]
    }

    /// Sum of the weights over `[left, right]`, i.e. what one `range_add`
    /// adds to `range_sum(left, right)`.
    pub fn weight_sum(&self, left: usize, right: usize) -> Result<i64, SegTreeError> {
        self.check(left, right)?;
        if left > right {
            return Ok(0);
        }
        Ok(self.weight_between(left, right))
    }

    #[inline]
    fn apply(&mut self, node: usize, start: usize, end: usize, times: i64) {
        self.lazy[node] += times;
        self.sum[node] += times * self.weight_between(start, end);
    }

    #[inline]
    fn push_down(&mut self, node: usize, start: usize, end: usize) {
        let times = self.lazy[node];
        if times != 0 && start < end {
            let mid = (start + end) >> 1;
            self.apply(node << 1, start, mid, times);
            self.apply(node << 1 | 1, mid + 1, end, times);
        }
        self.lazy[node] = 0;
    }

    #[inline]
    fn pull_sum(&mut self, node: usize) {
        self.sum[node] = self.sum[node << 1] + self.sum[node << 1 | 1];
    }

    /// Adds `weights[i]` to every index `i` in `[left, right]`.
    /// An inverted range with in-bounds endpoints is a no-op.
    pub fn range_add(&mut self, left: usize, right: usize) -> Result<(), SegTreeError> {
        self.range_add_by(left, right, 1)
    }

    /// Adds `times * weights[i]` to every index `i` in `[left, right]`.
    pub fn range_add_by(
        &mut self,
        left: usize,
        right: usize,
        times: i64,
    ) -> Result<(), SegTreeError> {
        self.check(left, right)?;
        if times == 0 || left > right {
            return Ok(());
        }
        let applied = times
            .checked_abs()
            .and_then(|t| self.applied.checked_add(t))
            .filter(|&a| {
                a.checked_mul(self.abs_weights)
                    .and_then(|x| x.checked_add(self.abs_values))
                    .is_some()
            })
            .ok_or(SegTreeError::Overflow("range sum after update"))?;
        self.applied = applied;
        self.add_rec(1, 0, self.n - 1, left, right, times);
        Ok(())
    }

    fn add_rec(
        &mut self,
        node: usize,
        start: usize,
        end: usize,
        left: usize,
        right: usize,
        times: i64,
    ) {
        if left > right {
            return;
        }
        self.push_down(node, start, end);
        if start == left && end == right {
            self.apply(node, start, end, times);
            return;
        }
        let mid = (start + end) >> 1;
        self.add_rec(node << 1, start, mid, left, right.min(mid), times);
        self.add_rec(node << 1 | 1, mid + 1, end, left.max(mid + 1), right, times);
        self.pull_sum(node);
    }

    /// Sum of the current values over `[left, right]`; 0 for an inverted range.
    pub fn range_sum(&mut self, left: usize, right: usize) -> Result<i64, SegTreeError> {
        self.check(left, right)?;
        Ok(self.sum_rec(1, 0, self.n - 1, left, right))
    }

    fn sum_rec(&mut self, node: usize, start: usize, end: usize, left: usize, right: usize) -> i64 {
        if left > right {
            return 0;
        }
        self.push_down(node, start, end);
        if start == left && end == right {
            return self.sum[node];
        }
        let mid = (start + end) >> 1;
        self.sum_rec(node << 1, start, mid, left, right.min(mid))
            + self.sum_rec(node << 1 | 1, mid + 1, end, left.max(mid + 1), right)
    }

    pub fn get(&mut self, index: usize) -> Result<i64, SegTreeError> {
        self.range_sum(index, index)
    }
}

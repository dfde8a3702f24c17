//! Reads the operation stream and answers it with a [`WeightedSegTree`].

use std::io::Write;

use thiserror::Error;

use crate::io::{InputError, InputStream};
use crate::tree::segtree_weighted::{SegTreeError, WeightedSegTree};

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Tree(#[from] SegTreeError),
    #[error("failed to write answer: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Add { left: usize, right: usize },
    Sum { left: usize, right: usize },
}

impl Query {
    /// Reads `op left right`. `+` is an update, every other op is a sum query.
    /// Negative indices are reported as [`SegTreeError::OutOfRange`].
    pub fn read<I: InputStream>(input: &mut I, len: usize) -> Result<Self, QueryError> {
        let is_add = input.token().ok_or(InputError::Eof("operation"))? == b"+";
        let left: i64 = input.value("index")?;
        let right: i64 = input.value("index")?;
        let (Ok(l), Ok(r)) = (usize::try_from(left), usize::try_from(right)) else {
            return Err(SegTreeError::OutOfRange { left, right, len }.into());
        };
        Ok(if is_add {
            Query::Add { left: l, right: r }
        } else {
            Query::Sum { left: l, right: r }
        })
    }
}

// values and weights are 32-bit on the wire, sums are kept in i64
fn read_array<I: InputStream>(
    input: &mut I,
    n: usize,
    what: &'static str,
) -> Result<Vec<i64>, InputError> {
    (0..n)
        .map(|_| input.value::<i32>(what).map(i64::from))
        .collect()
}

/// Runs the whole protocol: header, initial values, weights, then `m`
/// operations. Answers are written one per line in input order.
pub fn run<I: InputStream, W: Write>(input: &mut I, output: &mut W) -> Result<(), QueryError> {
    let n: usize = input.value("array length")?;
    let values = read_array(input, n, "initial value")?;
    let weights = read_array(input, n, "weight")?;
    let mut tree = WeightedSegTree::new(&values, &weights)?;

    let m: usize = input.value("operation count")?;
    log::debug!("n = {}, m = {}", n, m);

    for i in 0..m {
        let query = Query::read(input, n)?;
        log::trace!("#{}: {:?}", i, query);
        match query {
            Query::Add { left, right } => tree.range_add(left, right)?,
            Query::Sum { left, right } => {
                writeln!(output, "{}", tree.range_sum(left, right)?)?;
            }
        }
    }
    Ok(())
}

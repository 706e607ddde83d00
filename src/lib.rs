// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! # knapdp
//! knapdp is an exact solver for the 0/1 knapsack problem. Given a set of
//! items, each of which has a strictly positive weight and value, and the
//! capacity of a sack, it finds the subset of items having the largest total
//! value among those whose total weight fits in the sack.
//!
//! The problem is solved with a bottom-up dynamic program (tabulation). The
//! table has one row per item and one column per capacity level ranging from
//! the lightest item weight up to the capacity of the sack. Each cell holds
//! the best value reachable with the items of the rows up to its own, given
//! the budget of its column:
//!
//! * on the first row, an item is taken whenever it fits;
//! * on any other row, the item is taken only if doing so is *strictly*
//!   better than keeping the best value of the previous row. Ties always
//!   favor the exclusion of the item.
//!
//! The best cell met along the way (the incumbent) is the optimum, and the
//! corresponding items are recovered by following the back-pointers stored
//! in the table. The items of a solution always appear in input order.
//!
//! ## Quick Example
//! ```
//! use knapdp::*;
//!
//! let solution = solve(
//!     vec!["a", "b", "c", "d"],
//!     vec![2, 3, 4, 5],
//!     vec![3, 4, 5, 6],
//!     5,
//! ).unwrap();
//!
//! assert_eq!(7, solution.value);
//! assert_eq!(vec![&"a", &"b"], solution.ids().collect::<Vec<_>>());
//!
//! // The three descriptions must have the same length
//! let error = solve(vec!["a"], vec![2, 3], vec![3], 5).unwrap_err();
//! assert!(matches!(error, Error::InvalidInput(Defect::LengthMismatch { .. })));
//! ```
//!
//! ## Going further
//! The `Solver` trait gives you access to the filled `DpTable`. Use the
//! `ParallelSolver` if you want to exploit all of your hardware on instances
//! with large capacities. The `ItemGenerator`, `TextReport`, `JsonReport`
//! and `io_utils` module provide the plumbing of the `knapdp` executable.

mod common;
mod abstraction;
mod implementation;
pub mod prelude;

#[cfg(test)]
mod test_utils;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;

/// Solves the knapsack instance where `ids[i]` has a weight of `weights[i]`
/// and a value of `values[i]`, using the `SequentialSolver`.
///
/// It fails with `Error::InvalidInput` when the three descriptions do not
/// have the same length, or when some weight or value is zero.
pub fn solve<T: Clone>(
    ids: Vec<T>,
    weights: Vec<usize>,
    values: Vec<usize>,
    capacity: usize,
) -> Result<Solution<T>, Error> {
    let problem = Knapsack::from_parts(ids, weights, values, capacity)?;
    Ok(SequentialSolver.solve(&problem))
}

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

//! This module provides the implementation of a parallel solver. That is
//! a solver that fills the table using as many threads as requested.
//! By default, it uses as many threads as the number of hardware threads
//! available on the machine.
//!
//! The rows of the table must be filled one after the other since each of
//! them is derived from the previous one. However, all the cells of a given
//! row are independent from one another. Hence, this solver splits every row
//! in contiguous chunks which are filled concurrently.

use parking_lot::Mutex;

use crate::{DpTable, Knapsack, Solver};
use crate::implementation::table::{Incumbent, RowFiller};

/// Rows narrower than this are not worth spawning threads for.
const MIN_CHUNK_WIDTH: usize = 256;

/// This is the structure implementing a multi-threaded solver. It yields
/// exactly the same tables (and hence solutions) as the `SequentialSolver`.
///
/// # Example Usage
/// ```
/// # use knapdp::*;
/// let problem = Knapsack::from_parts(
///     vec!["a", "b", "c"],
///     vec![10, 20, 30],
///     vec![60, 100, 120],
///     50,
/// ).unwrap();
///
/// let solver = ParallelSolver::custom(4);
/// let solution = solver.solve(&problem);
/// assert_eq!(220, solution.value);
/// assert_eq!(vec![&"b", &"c"], solution.ids().collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParallelSolver {
    /// The number of threads filling each row
    nb_threads: usize,
}
impl Default for ParallelSolver {
    fn default() -> Self {
        Self::new()
    }
}
impl ParallelSolver {
    /// Creates a solver using all the hardware threads of the machine
    pub fn new() -> Self {
        Self::custom(num_cpus::get())
    }
    /// Creates a solver using the given number of threads (at least one)
    pub fn custom(nb_threads: usize) -> Self {
        ParallelSolver { nb_threads: nb_threads.max(1) }
    }
    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }

    /// Fills one row of the table, returns the first cell of that row
    /// holding the best value.
    fn fill_row<T>(&self, table: &mut DpTable<'_, T>, row: usize) -> Option<Incumbent> {
        let filler = RowFiller::new(table, row);
        let width = table.width();
        let (prev, current) = table.rows_mut(row);

        let chunk_size = width.div_ceil(self.nb_threads).max(MIN_CHUNK_WIDTH);
        if self.nb_threads == 1 || chunk_size >= width {
            return filler.fill(prev, 0, current);
        }

        let row_best: Mutex<Option<Incumbent>> = Mutex::new(None);
        std::thread::scope(|s| {
            for (k, chunk) in current.chunks_mut(chunk_size).enumerate() {
                let row_best = &row_best;
                s.spawn(move || {
                    let local = filler.fill(prev, k * chunk_size, chunk);
                    let mut best = row_best.lock();
                    *best = leftmost_best(*best, local);
                });
            }
        });
        row_best.into_inner()
    }
}

impl Solver for ParallelSolver {
    fn tabulate<'a, T>(&self, problem: &'a Knapsack<T>) -> DpTable<'a, T> {
        let mut table = DpTable::new(problem);
        for row in 0..table.nb_rows() {
            let best = self.fill_row(&mut table, row);
            let incumbent = Incumbent::challenge(table.incumbent(), best);
            table.set_incumbent(incumbent);
        }
        table
    }
}

/// Merges the best cells of two chunks of the same row, regardless of the
/// order in which the chunks completed: the highest value wins, and the
/// leftmost column breaks ties.
fn leftmost_best(a: Option<Incumbent>, b: Option<Incumbent>) -> Option<Incumbent> {
    match (a, b) {
        (Some(x), Some(y)) => {
            if y.value > x.value || (y.value == x.value && y.col < x.col) {
                Some(y)
            } else {
                Some(x)
            }
        }
        (x, None) => x,
        (None, y) => y,
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_solver {
    use crate::*;
    use crate::test_utils::*;
    use crate::implementation::table::Incumbent;
    use super::leftmost_best;

    #[test]
    fn custom_never_uses_less_than_one_thread() {
        assert_eq!(1, ParallelSolver::custom(0).nb_threads());
        assert_eq!(3, ParallelSolver::custom(3).nb_threads());
        assert!(ParallelSolver::new().nb_threads() >= 1);
    }
    #[test]
    fn classic_instance_selects_the_two_first_items() {
        let sol = ParallelSolver::custom(4).solve(&classic());
        assert_eq!(7, sol.value);
        assert_eq!(vec!["Item 0", "Item 1"], ids(&sol));
    }
    #[test]
    fn edge_cases_behave_like_the_sequential_solver() {
        let solver = ParallelSolver::custom(4);
        let empty = Knapsack::<&str>::new(vec![], 5).unwrap();
        assert_eq!(Solution::empty(), solver.solve(&empty));
        let null = Knapsack::from_parts(vec!["a"], vec![2], vec![3], 0).unwrap();
        assert_eq!(Solution::empty(), solver.solve(&null));
        let one = Knapsack::from_parts(vec!["a"], vec![2], vec![3], 2).unwrap();
        assert_eq!(3, solver.solve(&one).value);
    }
    #[test]
    fn wide_tables_yield_the_same_cells_as_the_sequential_solver() {
        for seed in 0..5 {
            let pb = random_wide_instance(seed, 30, 5_000);
            let seq = SequentialSolver.tabulate(&pb);
            let par = ParallelSolver::custom(4).tabulate(&pb);
            assert_eq!(seq.width(), par.width());
            for row in 0..pb.nb_items() {
                assert_eq!(seq.row_values(row), par.row_values(row), "seed {} row {}", seed, row);
            }
            assert_eq!(seq.solution(), par.solution(), "seed {}", seed);
        }
    }
    #[test]
    fn ties_are_broken_as_in_the_sequential_solver() {
        // every item is identical: many subsets tie for the optimum
        let n = 40;
        let ids = (0..n).collect::<Vec<usize>>();
        let pb = Knapsack::from_parts(ids, vec![100; n], vec![7; n], 2_000).unwrap();
        let seq = SequentialSolver.solve(&pb);
        let par = ParallelSolver::custom(8).solve(&pb);
        assert_eq!(seq, par);
        assert_eq!((0..20).collect::<Vec<usize>>(), par.ids().copied().collect::<Vec<_>>());
    }
    #[test]
    fn solutions_are_optimal() {
        for seed in 0..20 {
            let pb = random_instance(seed, 10, 20);
            let sol = ParallelSolver::custom(2).solve(&pb);
            assert!(sol.total_weight() <= pb.capacity());
            assert_eq!(brute_force(&pb), sol.value, "seed {}", seed);
        }
    }
    #[test]
    fn leftmost_best_does_not_depend_on_the_order() {
        let a = Some(Incumbent { row: 2, col: 10, value: 9 });
        let b = Some(Incumbent { row: 2, col: 300, value: 9 });
        let c = Some(Incumbent { row: 2, col: 600, value: 12 });
        assert_eq!(a, leftmost_best(a, b));
        assert_eq!(a, leftmost_best(b, a));
        assert_eq!(c, leftmost_best(a, c));
        assert_eq!(c, leftmost_best(c, a));
        assert_eq!(b, leftmost_best(None, b));
        assert_eq!(None, leftmost_best(None, None));
    }
}

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

//! This module provides the implementation of a sequential solver. That is
//! a solver that fills the table using one single thread of execution.
//!
//! This is the implementation you will want to use for small to medium sized
//! instances, or whenever multithreading is not an option.

use crate::{DpTable, Knapsack, Solver};
use crate::implementation::table::{Incumbent, RowFiller};

/// The single threaded solver.
///
/// # Example Usage
/// ```
/// # use knapdp::*;
/// let problem = Knapsack::from_parts(
///     vec!["a", "b", "c", "d"],
///     vec![2, 3, 4, 5],
///     vec![3, 4, 5, 6],
///     5,
/// ).unwrap();
///
/// let solution = SequentialSolver.solve(&problem);
/// assert_eq!(7, solution.value);
/// assert_eq!(vec![&"a", &"b"], solution.ids().collect::<Vec<_>>());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialSolver;

impl Solver for SequentialSolver {
    fn tabulate<'a, T>(&self, problem: &'a Knapsack<T>) -> DpTable<'a, T> {
        let mut table = DpTable::new(problem);
        for row in 0..table.nb_rows() {
            let filler = RowFiller::new(&table, row);
            let (prev, current) = table.rows_mut(row);
            let best = filler.fill(prev, 0, current);

            let incumbent = Incumbent::challenge(table.incumbent(), best);
            table.set_incumbent(incumbent);
        }
        table
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_solver {
    use crate::*;
    use crate::test_utils::*;

    #[test]
    fn classic_instance_selects_the_two_first_items() {
        let pb = classic();
        let sol = SequentialSolver.solve(&pb);
        assert_eq!(7, sol.value);
        assert_eq!(vec!["Item 0", "Item 1"], ids(&sol));
        assert_eq!(5, sol.total_weight());
    }
    #[test]
    fn zero_capacity_yields_an_empty_solution() {
        let pb = Knapsack::from_parts(vec!["a", "b"], vec![1, 2], vec![3, 4], 0).unwrap();
        assert_eq!(Solution::empty(), SequentialSolver.solve(&pb));
    }
    #[test]
    fn single_item_too_heavy_is_not_selected() {
        let pb = Knapsack::from_parts(vec!["a"], vec![6], vec![3], 5).unwrap();
        assert_eq!(Solution::empty(), SequentialSolver.solve(&pb));
    }
    #[test]
    fn single_item_that_fits_is_selected() {
        let pb = Knapsack::from_parts(vec!["a"], vec![5], vec![3], 5).unwrap();
        let sol = SequentialSolver.solve(&pb);
        assert_eq!(3, sol.value);
        assert_eq!(vec![Item::new("a", 5, 3)], sol.items);
    }
    #[test]
    fn no_items_yields_an_empty_solution() {
        let pb = Knapsack::<&str>::new(vec![], 5).unwrap();
        assert_eq!(Solution::empty(), SequentialSolver.solve(&pb));
    }
    #[test]
    fn identical_items_prefer_the_first_one() {
        let pb = Knapsack::from_parts(vec!["a", "b"], vec![2, 2], vec![3, 3], 3).unwrap();
        let sol = SequentialSolver.solve(&pb);
        assert_eq!(3, sol.value);
        assert_eq!(vec![Item::new("a", 2, 3)], sol.items);
    }
    #[test]
    fn identical_items_are_both_selected_when_they_fit() {
        let pb = Knapsack::from_parts(vec!["a", "b"], vec![2, 2], vec![3, 3], 4).unwrap();
        let sol = SequentialSolver.solve(&pb);
        assert_eq!(6, sol.value);
        assert_eq!(vec![&"a", &"b"], sol.ids().collect::<Vec<_>>());
    }
    #[test]
    fn equally_valued_subsets_keep_the_first_found() {
        // {a} and {b, c} are both worth 5
        let pb = Knapsack::from_parts(vec!["a", "b", "c"], vec![4, 2, 2], vec![5, 2, 3], 4).unwrap();
        let sol = SequentialSolver.solve(&pb);
        assert_eq!(5, sol.value);
        assert_eq!(vec![&"a"], sol.ids().collect::<Vec<_>>());
    }
    #[test]
    fn the_whole_set_is_taken_when_capacity_allows() {
        let pb = classic_with_capacity(100);
        let sol = SequentialSolver.solve(&pb);
        assert_eq!(18, sol.value);
        assert_eq!(4, sol.items.len());
    }
    #[test]
    fn solutions_are_feasible_and_optimal() {
        for seed in 0..40 {
            let pb = random_instance(seed, 10, 20);
            let sol = SequentialSolver.solve(&pb);
            assert!(sol.total_weight() <= pb.capacity(), "seed {}", seed);
            assert_eq!(brute_force(&pb), sol.value, "seed {}", seed);
            assert_eq!(sol.value, sol.items.iter().map(|i| i.value).sum::<usize>());
        }
    }
    #[test]
    fn solutions_preserve_the_input_order() {
        for seed in 0..20 {
            let pb = random_instance(seed, 12, 30);
            let sol = SequentialSolver.solve(&pb);
            let positions = positions(&pb, &sol);
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "seed {}", seed);
        }
    }
    #[test]
    fn solving_twice_yields_the_same_solution() {
        let pb = random_instance(7, 12, 25);
        let first = SequentialSolver.solve(&pb);
        let second = SequentialSolver.solve(&pb);
        assert_eq!(first, second);
    }
}

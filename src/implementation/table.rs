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

//! This module defines the `DpTable`: the dense arena where the solvers store
//! the solutions to all the subproblems of a knapsack instance.
//!
//! The table comprises one row per item and one column per capacity level in
//! `[min_weight, capacity]`. Budgets below the lightest weight are never
//! stored since nothing at all can be selected with them. Rather than the
//! complete subset of items, each cell only remembers the best value reachable
//! with the items of the rows up to its own, and whether that best subset
//! comprises the item of its row. This back-pointer is enough to rebuild the
//! subset with a single backward traversal.

use std::ops::RangeInclusive;

use crate::{Knapsack, Solution};

/// One entry of the table
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The best value reachable with the items of rows `0..=row`
    pub value: usize,
    /// Whether the best subset selects the item of this row
    pub take: bool,
}

/// The position and value of the best cell found so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Incumbent {
    pub row: usize,
    pub col: usize,
    pub value: usize,
}
impl Incumbent {
    /// Keeps whichever of `current` and `candidate` must be preferred when
    /// `candidate` comes later in the row-major order. Ties keep `current`.
    pub fn challenge(current: Option<Incumbent>, candidate: Option<Incumbent>) -> Option<Incumbent> {
        match (current, candidate) {
            (Some(cur), Some(cand)) if cand.value > cur.value => Some(cand),
            (None, cand) => cand,
            (cur, _) => cur,
        }
    }
}

/// The filled dynamic programming table of some knapsack instance.
///
/// # Example
/// ```
/// # use knapdp::*;
/// let problem = Knapsack::from_parts(vec!["a", "b"], vec![2, 3], vec![3, 4], 5).unwrap();
/// let table = SequentialSolver.tabulate(&problem);
///
/// assert_eq!(2..=5, table.capacities());
/// assert_eq!(vec![3, 3, 3, 3], table.row_values(0));
/// assert_eq!(vec![3, 4, 4, 7], table.row_values(1));
/// assert_eq!(7, table.best_value());
/// ```
#[derive(Debug, Clone)]
pub struct DpTable<'a, T> {
    /// The instance whose subproblems are stored in this table
    problem: &'a Knapsack<T>,
    /// The capacity level of the first column
    min_weight: usize,
    /// The number of columns per row
    width: usize,
    /// The cells, stored row after row
    cells: Vec<Cell>,
    /// The first cell (row-major order) holding the best value
    incumbent: Option<Incumbent>,
}

impl<'a, T> DpTable<'a, T> {
    /// Allocates a table where all cells are still empty
    pub(crate) fn new(problem: &'a Knapsack<T>) -> Self {
        DpTable {
            problem,
            min_weight: problem.min_weight().unwrap_or(0),
            width: problem.table_width(),
            cells: vec![Cell::default(); problem.table_cells()],
            incumbent: None,
        }
    }

    pub fn problem(&self) -> &'a Knapsack<T> {
        self.problem
    }
    pub fn nb_rows(&self) -> usize {
        self.problem.nb_items()
    }
    /// The number of capacity levels stored per row
    pub fn width(&self) -> usize {
        self.width
    }
    /// The capacity level of the first column (the lightest item weight)
    pub fn min_weight(&self) -> usize {
        self.min_weight
    }
    /// The capacity levels of the columns. This range is empty when nothing
    /// fits in the sack.
    pub fn capacities(&self) -> RangeInclusive<usize> {
        if self.width == 0 {
            return RangeInclusive::new(1, 0);
        }
        self.min_weight..=self.min_weight + self.width - 1
    }
    /// The cell at the given row and column
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }
    /// The best value reachable with the items `0..=row` when the budget
    /// is `capacity`. Budgets below the lightest weight are worth 0.
    ///
    /// # Panics
    /// When `capacity` exceeds the capacity of the instance, or `row` is out
    /// of bounds.
    pub fn value(&self, row: usize, capacity: usize) -> usize {
        assert!(
            capacity <= self.problem.capacity(),
            "budget {} exceeds the capacity {} of the sack",
            capacity,
            self.problem.capacity()
        );
        assert!(row < self.nb_rows(), "row {} out of bounds", row);
        if capacity < self.min_weight || self.width == 0 {
            return 0;
        }
        self.cell(row, capacity - self.min_weight).value
    }
    /// The values of all the cells of some row, by increasing capacity
    pub fn row_values(&self, row: usize) -> Vec<usize> {
        self.row(row).iter().map(|c| c.value).collect()
    }
    /// The value of the optimal solution
    pub fn best_value(&self) -> usize {
        self.incumbent.map(|i| i.value).unwrap_or(0)
    }

    /// Rebuilds the optimal subset by following the back-pointers from the
    /// incumbent cell. The items are returned in input order.
    pub fn solution(&self) -> Solution<T>
    where
        T: Clone,
    {
        let items = self.problem.items();
        let mut picked = vec![];
        let mut cursor = self.incumbent.map(|i| (i.row, i.col));

        while let Some((row, col)) = cursor {
            let cell = self.cell(row, col);
            if !cell.take {
                cursor = row.checked_sub(1).map(|prev| (prev, col));
                continue;
            }
            picked.push(row);

            let remaining = self.min_weight + col - items[row].weight;
            cursor = match row.checked_sub(1) {
                Some(prev) if remaining >= self.min_weight => Some((prev, remaining - self.min_weight)),
                _ => None,
            };
        }
        picked.reverse();

        Solution {
            value: self.best_value(),
            items: picked.into_iter().map(|i| items[i].clone()).collect(),
        }
    }

    // ------------------------------------------------------------------------
    // --- FILLING ------------------------------------------------------------
    // ------------------------------------------------------------------------
    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }
    /// Splits the arena so that the previous row can be read while the given
    /// one is being written.
    pub(crate) fn rows_mut(&mut self, row: usize) -> (Option<&[Cell]>, &mut [Cell]) {
        let (done, todo) = self.cells.split_at_mut(row * self.width);
        let current = &mut todo[..self.width];
        if row == 0 {
            (None, current)
        } else {
            (Some(&done[(row - 1) * self.width..]), current)
        }
    }
    pub(crate) fn incumbent(&self) -> Option<Incumbent> {
        self.incumbent
    }
    pub(crate) fn set_incumbent(&mut self, incumbent: Option<Incumbent>) {
        self.incumbent = incumbent;
    }
}

/// Everything one needs to fill (part of) a row of the table. It does not
/// borrow the table itself so that disjoint chunks of a row may be filled
/// concurrently.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowFiller {
    pub row: usize,
    pub weight: usize,
    pub value: usize,
    pub min_weight: usize,
}
impl RowFiller {
    pub fn new<T>(table: &DpTable<'_, T>, row: usize) -> Self {
        let item = &table.problem.items()[row];
        RowFiller {
            row,
            weight: item.weight,
            value: item.value,
            min_weight: table.min_weight,
        }
    }

    /// Fills the cells of `chunk`, the first of which sits at column
    /// `first_col`. It returns the first cell of the chunk holding the best
    /// (non null) value.
    pub fn fill(&self, prev: Option<&[Cell]>, first_col: usize, chunk: &mut [Cell]) -> Option<Incumbent> {
        let mut best: Option<Incumbent> = None;
        for (k, cell) in chunk.iter_mut().enumerate() {
            let col = first_col + k;
            let capacity = self.min_weight + col;

            *cell = match prev {
                None if self.weight <= capacity => Cell { value: self.value, take: true },
                None => Cell::default(),
                Some(prev) => {
                    let exclude = prev[col].value;
                    let include = if self.weight <= capacity {
                        let remaining = capacity - self.weight;
                        if remaining >= self.min_weight {
                            Some(self.value + prev[remaining - self.min_weight].value)
                        } else {
                            Some(self.value)
                        }
                    } else {
                        None
                    };
                    match include {
                        Some(value) if value > exclude => Cell { value, take: true },
                        _ => Cell { value: exclude, take: false },
                    }
                }
            };

            if cell.value > 0 {
                let candidate = Incumbent { row: self.row, col, value: cell.value };
                best = Incumbent::challenge(best, Some(candidate));
            }
        }
        best
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

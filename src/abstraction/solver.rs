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

//! This module defines the `Solver` trait.

use crate::{DpTable, Knapsack, Solution};

/// This is the solver abstraction. It is implemented by the structures that
/// fill the dynamic programming table of a 0/1 knapsack instance (bottom-up
/// tabulation). All implementations must yield the very same table for a
/// given instance: they may only differ in the way they use the hardware.
///
/// A solver never prints nor logs anything, and it does not keep any state
/// from one call to the next. Hence, a solver can be shared among several
/// threads and used concurrently.
pub trait Solver {
    /// Builds and fills the table of all subproblems of the given instance.
    /// Row `i` of the table is derived from row `i-1`, and each cell keeps
    /// the exclusion of its item unless the inclusion is strictly better.
    fn tabulate<'a, T>(&self, problem: &'a Knapsack<T>) -> DpTable<'a, T>;

    /// Returns the optimal solution of the given instance. Whenever several
    /// subsets tie for the optimum, the one found first during tabulation
    /// (which tends to exclude the later items) is returned.
    fn solve<T: Clone>(&self, problem: &Knapsack<T>) -> Solution<T> {
        self.tabulate(problem).solution()
    }
}

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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.
//!
//! In particular, this module comprises the definition of the following types:
//! - `Item`
//! - `Knapsack` (the validated problem instance)
//! - `Solution`
//! - `Error` (+ associated `Defect`)

use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An item that may be put in the sack. The `id` is an opaque identifier which
/// the solver never looks at: it is simply handed back in the solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item<T> {
    /// The opaque identifier of this item
    pub id: T,
    /// The weight of the item (strictly positive)
    pub weight: usize,
    /// The value of the item (strictly positive)
    pub value: usize,
}
impl<T> Item<T> {
    pub fn new(id: T, weight: usize, value: usize) -> Self {
        Item { id, weight, value }
    }
}

// ----------------------------------------------------------------------------
// --- ERROR ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The reason why some input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Defect {
    /// The identifiers, weights and values do not describe the same number
    /// of items
    #[error("{ids} ids, {weights} weights and {values} values were given")]
    LengthMismatch { ids: usize, weights: usize, values: usize },
    /// Weights must be strictly positive
    #[error("item {index} has a zero weight")]
    ZeroWeight { index: usize },
    /// Values must be strictly positive
    #[error("item {index} has a zero value")]
    ZeroValue { index: usize },
    /// The table of this instance would not fit in the address space
    #[error("a table of {rows} rows by {columns} columns cannot be allocated")]
    TableTooLarge { rows: usize, columns: usize },
}

/// The only kind of error the solver may report. It is raised before any
/// table gets built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Defect),
}

// ----------------------------------------------------------------------------
// --- KNAPSACK ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A 0/1 knapsack instance: an ordered set of items along with the capacity
/// of the sack. Once built, an instance is guaranteed to only contain items
/// having a strictly positive weight and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack<T> {
    capacity: usize,
    items: Vec<Item<T>>,
}
impl<T> Knapsack<T> {
    /// Creates a new instance from a list of items and a capacity.
    ///
    /// # Example
    /// ```
    /// # use knapdp::*;
    /// let pb = Knapsack::new(vec![Item::new("a", 2, 3)], 5).unwrap();
    /// assert_eq!(1, pb.nb_items());
    ///
    /// let err = Knapsack::new(vec![Item::new("a", 0, 3)], 5).unwrap_err();
    /// assert_eq!(Error::InvalidInput(Defect::ZeroWeight { index: 0 }), err);
    /// ```
    pub fn new(items: Vec<Item<T>>, capacity: usize) -> Result<Self, Error> {
        for (index, item) in items.iter().enumerate() {
            if item.weight == 0 {
                return Err(Defect::ZeroWeight { index }.into());
            }
            if item.value == 0 {
                return Err(Defect::ZeroValue { index }.into());
            }
        }
        let knapsack = Knapsack { capacity, items };
        knapsack.table_len()?;
        Ok(knapsack)
    }
    /// Creates a new instance from three parallel descriptions: `ids[i]`
    /// has a weight of `weights[i]` and a value of `values[i]`. The three
    /// vectors must have the same length.
    pub fn from_parts(
        ids: Vec<T>,
        weights: Vec<usize>,
        values: Vec<usize>,
        capacity: usize,
    ) -> Result<Self, Error> {
        if ids.len() != weights.len() || ids.len() != values.len() {
            return Err(Defect::LengthMismatch {
                ids: ids.len(),
                weights: weights.len(),
                values: values.len(),
            }
            .into());
        }
        let items = ids
            .into_iter()
            .zip(weights.into_iter().zip(values))
            .map(|(id, (weight, value))| Item { id, weight, value })
            .collect();
        Self::new(items, capacity)
    }
    /// The maximum total weight of the selected items
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// The items of this instance, in input order
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    /// The lightest weight among all items (None when there are no items)
    pub fn min_weight(&self) -> Option<usize> {
        self.items.iter().map(|i| i.weight).min()
    }
    /// The number of capacity levels stored per row of the table: one per
    /// budget in `[min_weight, capacity]`.
    pub fn table_width(&self) -> usize {
        match self.min_weight() {
            Some(w) if w <= self.capacity => self.capacity - w + 1,
            _ => 0,
        }
    }
    /// The number of cells of the table. It fails when the table would
    /// exceed the address space.
    fn table_len(&self) -> Result<usize, Defect> {
        let rows = self.items.len();
        let columns = self.table_width();
        let bytes = |len: usize| len.checked_mul(std::mem::size_of::<crate::Cell>());
        rows.checked_mul(columns)
            .filter(|&len| bytes(len).map_or(false, |b| b <= isize::MAX as usize))
            .ok_or(Defect::TableTooLarge { rows, columns })
    }
    /// The number of cells of the table; never overflows since it was
    /// checked upon construction.
    pub(crate) fn table_cells(&self) -> usize {
        self.table_len().unwrap_or(0)
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a resolution: the selected items (in input order) and
/// the sum of their values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution<T> {
    pub value: usize,
    pub items: Vec<Item<T>>,
}
impl<T> Solution<T> {
    /// The solution which selects nothing at all
    pub fn empty() -> Self {
        Solution { value: 0, items: vec![] }
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// The cumulated weight of all selected items
    pub fn total_weight(&self) -> usize {
        self.items.iter().map(|i| i.weight).sum()
    }
    /// An iterator over the ids of the selected items
    pub fn ids(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|i| &i.id)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

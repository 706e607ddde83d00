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

//! This module provides some utilities to write unit tests: a handful of
//! fixture instances and a brute force oracle to check the optimality of the
//! solutions.
#![cfg(test)]

use crate::{GeneratorConfigBuilder, ItemGenerator, Knapsack, Solution};

/// The textbook instance: weights 2, 3, 4, 5 and values 3, 4, 5, 6
pub fn classic() -> Knapsack<String> {
    classic_with_capacity(5)
}
pub fn classic_with_capacity(capacity: usize) -> Knapsack<String> {
    let ids = (0..4).map(|i| format!("Item {}", i)).collect();
    Knapsack::from_parts(ids, vec![2, 3, 4, 5], vec![3, 4, 5, 6], capacity).unwrap()
}

/// A seeded random instance with weights and values in [1, 10]
pub fn random_instance(seed: u64, count: usize, capacity: usize) -> Knapsack<String> {
    let config = GeneratorConfigBuilder::default()
        .count(count)
        .seed(seed)
        .build()
        .unwrap();
    ItemGenerator::new(config).instance(capacity).unwrap()
}

/// A seeded random instance whose table is several thousand columns wide
pub fn random_wide_instance(seed: u64, count: usize, capacity: usize) -> Knapsack<String> {
    let config = GeneratorConfigBuilder::default()
        .count(count)
        .weight_bounds((50, 500))
        .value_bounds((1, 1_000))
        .seed(seed)
        .build()
        .unwrap();
    ItemGenerator::new(config).instance(capacity).unwrap()
}

/// The ids of the selected items
pub fn ids(solution: &Solution<String>) -> Vec<String> {
    solution.ids().cloned().collect()
}

/// The input positions of the selected items
pub fn positions<T: PartialEq>(problem: &Knapsack<T>, solution: &Solution<T>) -> Vec<usize> {
    solution
        .items
        .iter()
        .map(|s| problem.items().iter().position(|i| i == s).unwrap())
        .collect()
}

/// Enumerates all subsets of items and returns the best feasible value
pub fn brute_force<T>(problem: &Knapsack<T>) -> usize {
    let items = problem.items();
    assert!(items.len() <= 20, "too many items for a brute force enumeration");

    let mut best = 0;
    for subset in 0_u32..(1 << items.len()) {
        let (weight, value) = items
            .iter()
            .enumerate()
            .filter(|(i, _)| subset & (1 << i) != 0)
            .fold((0, 0), |(w, v), (_, item)| (w + item.weight, v + item.value));
        if weight <= problem.capacity() {
            best = best.max(value);
        }
    }
    best
}

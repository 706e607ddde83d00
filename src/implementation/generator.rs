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

//! This module provides the `ItemGenerator` which creates random knapsack
//! instances. It is chiefly meant to feed the command line demo and the tests
//! with sample data.

use derive_builder::Builder;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Error, Item, Knapsack};

/// This is how you configure the random instances e.g. if you want more
/// items, heavier items or a reproducible sequence of instances.
///
/// # Example
/// ```
/// # use knapdp::*;
/// let config = GeneratorConfigBuilder::default()
///     .count(5)
///     .weight_bounds((1, 3))
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(5, config.count());
/// assert_eq!((1, 10), config.value_bounds());
///
/// assert!(GeneratorConfigBuilder::default().weight_bounds((4, 3)).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct GeneratorConfig {
    /// The number of items to generate (10 by default)
    #[builder(default = "10")]
    count: usize,
    /// The inclusive range of the item weights ([1, 10] by default)
    #[builder(default = "(1, 10)")]
    weight_bounds: (usize, usize),
    /// The inclusive range of the item values ([1, 10] by default)
    #[builder(default = "(1, 10)")]
    value_bounds: (usize, usize),
    /// When set, the generator always produces the same items. Otherwise,
    /// the items are drawn from a generator seeded by the OS.
    #[builder(default, setter(strip_option))]
    seed: Option<u64>,
}

impl GeneratorConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(bounds) = self.weight_bounds {
            check_bounds("weight", bounds)?;
        }
        if let Some(bounds) = self.value_bounds {
            check_bounds("value", bounds)?;
        }
        Ok(())
    }
}

fn check_bounds(what: &str, (lo, hi): (usize, usize)) -> Result<(), String> {
    if lo == 0 {
        Err(format!("the {} lower bound must be strictly positive", what))
    } else if lo > hi {
        Err(format!("the {} bounds ({}, {}) are reversed", what, lo, hi))
    } else {
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 10,
            weight_bounds: (1, 10),
            value_bounds: (1, 10),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn weight_bounds(&self) -> (usize, usize) {
        self.weight_bounds
    }
    pub fn value_bounds(&self) -> (usize, usize) {
        self.value_bounds
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Draws items whose weights and values are uniformly distributed within the
/// configured bounds. The items are named `Item 0`, `Item 1`, ...
#[derive(Debug, Clone, Default)]
pub struct ItemGenerator {
    config: GeneratorConfig,
}

impl ItemGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        ItemGenerator { config }
    }
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a fresh list of items. When the configuration is seeded,
    /// every call returns the same items.
    pub fn items(&self) -> Vec<Item<String>> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (wlo, whi) = self.config.weight_bounds;
        let (vlo, vhi) = self.config.value_bounds;

        (0..self.config.count)
            .map(|i| {
                let item = Item {
                    id: format!("Item {}", i),
                    weight: rng.gen_range(wlo..=whi),
                    value: rng.gen_range(vlo..=vhi),
                };
                log::debug!("generated {}, weight {}, value {}", item.id, item.weight, item.value);
                item
            })
            .collect()
    }

    /// Generates a knapsack instance with the given capacity
    pub fn instance(&self, capacity: usize) -> Result<Knapsack<String>, Error> {
        Knapsack::new(self.items(), capacity)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

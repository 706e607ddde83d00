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

//! This module contains everything that is necessary to parse a knapsack
//! instance from file and turn it into a `Knapsack<String>`.
//!
//! Two formats are understood. The text format looks like this:
//! ```text
//! # lines starting with a '#' are comments
//! <capacity> <nb_items>
//! <id> <weight> <value>
//! ...
//! ```
//! Files having a `.json` extension are expected to look like
//! `{"capacity": 5, "items": [{"id": "a", "weight": 2, "value": 3}]}`.

use std::{fs::File, io::{BufRead, BufReader, Read}, num::ParseIntError, path::Path};

use serde::Deserialize;

use crate::{Item, Knapsack};

/// This enumeration simply groups the kind of errors that might occur when
/// reading an instance from file. There can be io errors (file unavailable ?),
/// format errors (e.g. the file is not an instance but contains the text of
/// your next paper), parse int errors (which are actually a variant of the
/// format error since it tells you that the parser expected an integer number
/// but got ... something else), json errors, or invalid items.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The json file could not be deserialized
    #[error("json {0}")]
    Json(#[from] serde_json::Error),
    /// The file does not follow the expected layout
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },
    /// The file describes items the solver does not accept
    #[error(transparent)]
    Invalid(#[from] crate::Error),
}

#[derive(Debug, Deserialize)]
struct JsonInstance {
    capacity: usize,
    items: Vec<Item<String>>,
}

/// Reads the instance stored in the given file. The format is chosen after
/// the file extension.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Knapsack<String>, Error> {
    let is_json = fname
        .as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let f = File::open(fname)?;
    if is_json {
        parse_json_instance(f)
    } else {
        parse_instance(BufReader::new(f))
    }
}

/// Parses a json instance
pub fn parse_json_instance<R: Read>(reader: R) -> Result<Knapsack<String>, Error> {
    let JsonInstance { capacity, items } = serde_json::from_reader(reader)?;
    Ok(Knapsack::new(items, capacity)?)
}

/// Parses an instance in the text format
pub fn parse_instance<R: BufRead>(reader: R) -> Result<Knapsack<String>, Error> {
    let mut header: Option<(usize, usize)> = None;
    let mut items = vec![];

    for (lc, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        // skip blank lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = line.split_whitespace().collect::<Vec<_>>();
        match header {
            None => {
                if fields.len() != 2 {
                    return Err(format_error(lc, "expected '<capacity> <nb_items>'"));
                }
                let capacity = fields[0].parse::<usize>()?;
                let nb_items = fields[1].parse::<usize>()?;
                header = Some((capacity, nb_items));
            }
            Some(_) => {
                if fields.len() != 3 {
                    return Err(format_error(lc, "expected '<id> <weight> <value>'"));
                }
                let weight = fields[1].parse::<usize>()?;
                let value = fields[2].parse::<usize>()?;
                items.push(Item { id: fields[0].to_string(), weight, value });
            }
        }
    }

    let (capacity, nb_items) = header.ok_or_else(|| format_error(0, "missing header"))?;
    if items.len() != nb_items {
        return Err(Error::Format {
            line: 0,
            reason: format!("announced {} items but found {}", nb_items, items.len()),
        });
    }
    Ok(Knapsack::new(items, capacity)?)
}

fn format_error(lc: usize, reason: &str) -> Error {
    Error::Format { line: lc + 1, reason: reason.to_string() }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

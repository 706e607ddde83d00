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

//! This module renders the outcome of a resolution in a human readable form
//! (`TextReport`) or as json (`JsonReport`). Both the filled table and the
//! final solution can be shown. None of this affects the solvers in any way.

use std::fmt::Display;
use std::io::{self, Write};

use derive_builder::Builder;
use serde::Serialize;
use serde_json::{json, Value};

use crate::{DpTable, Knapsack, Solution};

/// This is how you configure the text report e.g. if you only want to see
/// the solution without the (possibly huge) table.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ReportConfig {
    /// This flag must be true (default) if you want to see the items of the
    /// instance, one per line.
    #[builder(default = "true")]
    show_items: bool,
    /// This flag must be true (default) if you want to see the value of
    /// each cell of the table.
    #[builder(default = "true")]
    show_table: bool,
    /// This flag must be true (default) if you want to see the selected items
    /// and the value of the solution.
    #[builder(default = "true")]
    show_solution: bool,
}
impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { show_items: true, show_table: true, show_solution: true }
    }
}

/// A plain text report.
///
/// # Example
/// ```
/// # use knapdp::*;
/// let problem = Knapsack::from_parts(vec!["a", "b"], vec![2, 3], vec![3, 4], 5).unwrap();
/// let table = SequentialSolver.tabulate(&problem);
/// let solution = table.solution();
///
/// let config = ReportConfigBuilder::default().show_table(false).build().unwrap();
/// let mut out = vec![];
/// TextReport::new(&config).write_all(&mut out, &table, &solution).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!("a, weight 2, value 3\nb, weight 3, value 4\n\na, b\nValue = 7\n", text);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    config: &'a ReportConfig,
}

impl<'a> TextReport<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        TextReport { config }
    }

    /// Writes one line per item: `<id>, weight <w>, value <v>`
    pub fn write_items<T: Display, W: Write>(&self, out: &mut W, problem: &Knapsack<T>) -> io::Result<()> {
        for item in problem.items() {
            writeln!(out, "{}, weight {}, value {}", item.id, item.weight, item.value)?;
        }
        Ok(())
    }

    /// Writes a header line with the capacity of each column, then one line
    /// per row: the id of the row item followed by the values of its cells.
    /// All fields are tab separated.
    pub fn write_table<T: Display, W: Write>(&self, out: &mut W, table: &DpTable<'_, T>) -> io::Result<()> {
        write!(out, "capacity")?;
        for capacity in table.capacities() {
            write!(out, "\t{}", capacity)?;
        }
        writeln!(out)?;

        for (row, item) in table.problem().items().iter().enumerate() {
            write!(out, "{}", item.id)?;
            for value in table.row_values(row) {
                write!(out, "\t{}", value)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Writes the comma separated ids of the selected items, then the total
    /// value of the solution.
    pub fn write_solution<T: Display, W: Write>(&self, out: &mut W, solution: &Solution<T>) -> io::Result<()> {
        let ids = solution.ids().map(|id| id.to_string()).collect::<Vec<_>>();
        writeln!(out, "{}", ids.join(", "))?;
        writeln!(out, "Value = {}", solution.value)
    }

    /// Writes all the sections enabled in the configuration, separated by
    /// blank lines.
    pub fn write_all<T: Display, W: Write>(
        &self,
        out: &mut W,
        table: &DpTable<'_, T>,
        solution: &Solution<T>,
    ) -> io::Result<()> {
        let mut first = true;
        if self.config.show_items {
            separator(out, &mut first)?;
            self.write_items(out, table.problem())?;
        }
        if self.config.show_table {
            separator(out, &mut first)?;
            self.write_table(out, table)?;
        }
        if self.config.show_solution {
            separator(out, &mut first)?;
            self.write_solution(out, solution)?;
        }
        Ok(())
    }
}

/// Sections are separated by one blank line
fn separator<W: Write>(out: &mut W, first: &mut bool) -> io::Result<()> {
    if !*first {
        writeln!(out)?;
    }
    *first = false;
    Ok(())
}

/// A json report which comprises the capacity of the sack, the capacity of
/// each column, the values of each row of the table and the solution.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReport;

impl JsonReport {
    pub fn to_value<T: Serialize>(&self, table: &DpTable<'_, T>, solution: &Solution<T>) -> serde_json::Result<Value> {
        let rows = table
            .problem()
            .items()
            .iter()
            .enumerate()
            .map(|(row, item)| -> serde_json::Result<Value> {
                Ok(json!({ "id": serde_json::to_value(&item.id)?, "values": table.row_values(row) }))
            })
            .collect::<serde_json::Result<Vec<Value>>>()?;

        Ok(json!({
            "capacity": table.problem().capacity(),
            "min_weight": table.min_weight(),
            "capacities": table.capacities().collect::<Vec<_>>(),
            "rows": rows,
            "solution": serde_json::to_value(solution)?,
        }))
    }

    /// Pretty prints the report on the given output
    pub fn write<T: Serialize, W: Write>(
        &self,
        out: &mut W,
        table: &DpTable<'_, T>,
        solution: &Solution<T>,
    ) -> io::Result<()> {
        let value = self.to_value(table, solution)?;
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_report {
    use crate::*;
    use crate::test_utils::*;

    fn render(config: &ReportConfig, problem: &Knapsack<String>) -> String {
        let table = SequentialSolver.tabulate(problem);
        let solution = table.solution();
        let mut out = vec![];
        TextReport::new(config).write_all(&mut out, &table, &solution).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_text_report() {
        let text = render(&ReportConfig::default(), &classic());
        let expected = "\
Item 0, weight 2, value 3
Item 1, weight 3, value 4
Item 2, weight 4, value 5
Item 3, weight 5, value 6

capacity\t2\t3\t4\t5
Item 0\t3\t3\t3\t3
Item 1\t3\t4\t4\t7
Item 2\t3\t4\t5\t7
Item 3\t3\t4\t5\t7

Item 0, Item 1
Value = 7
";
        assert_eq!(expected, text);
    }
    #[test]
    fn solution_only() {
        let config = ReportConfigBuilder::default()
            .show_items(false)
            .show_table(false)
            .build()
            .unwrap();
        assert_eq!("Item 0, Item 1\nValue = 7\n", render(&config, &classic()));
    }
    #[test]
    fn empty_solutions_are_reported_as_such() {
        let config = ReportConfigBuilder::default().show_items(false).build().unwrap();
        let text = render(&config, &classic_with_capacity(1));
        assert_eq!("capacity\nItem 0\nItem 1\nItem 2\nItem 3\n\n\nValue = 0\n", text);
    }
    #[test]
    fn json_report_comprises_the_table_and_solution() {
        let pb = classic();
        let table = SequentialSolver.tabulate(&pb);
        let value = JsonReport.to_value(&table, &table.solution()).unwrap();

        assert_eq!(5, value["capacity"]);
        assert_eq!(2, value["min_weight"]);
        assert_eq!(serde_json::json!([2, 3, 4, 5]), value["capacities"]);
        assert_eq!("Item 1", value["rows"][1]["id"]);
        assert_eq!(serde_json::json!([3, 4, 4, 7]), value["rows"][1]["values"]);
        assert_eq!(7, value["solution"]["value"]);
        assert_eq!("Item 0", value["solution"]["items"][0]["id"]);
        assert_eq!(2, value["solution"]["items"].as_array().unwrap().len());
    }
    #[test]
    fn json_report_is_written_as_valid_json() {
        let pb = classic();
        let table = SequentialSolver.tabulate(&pb);
        let mut out = vec![];
        JsonReport.write(&mut out, &table, &table.solution()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(7, parsed["solution"]["value"]);
    }
}

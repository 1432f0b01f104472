//! Truth tables.
//!
//! A [`TruthTable`] is a list of column headers and a matrix of booleans, one row per
//! assignment of the variables. The first [`variable_count`][TruthTable::variable_count]
//! columns are the variables; the remaining columns are derived subexpressions, and the
//! last column is always the answer (the value of the whole expression).
//!
//! Rows are ordered as a binary counter over the variables: in row `i`, variable `j`
//! holds bit `j` of `i`, so the first variable is the least significant bit.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// Header of the single column of a constant table.
pub const VALUE_HEADER: &str = "Value";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    headers: Vec<String>,
    rows: Vec<Vec<bool>>,
    variable_count: usize,
}

impl TruthTable {
    /// Create a table, checking its shape.
    ///
    /// Fails with [`Error::MalformedTable`] unless there is at least one header, every row
    /// has one entry per header, the variable columns fit in the headers, and there are
    /// exactly `2^variable_count` rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<bool>>, variable_count: usize) -> Result<Self> {
        check_shape(&headers, &rows, variable_count).map_err(Error::MalformedTable)?;
        Ok(Self {
            headers,
            rows,
            variable_count,
        })
    }

    /// Create a table whose shape the caller has already established.
    pub(crate) fn from_parts(headers: Vec<String>, rows: Vec<Vec<bool>>, variable_count: usize) -> Self {
        debug_assert_eq!(check_shape(&headers, &rows, variable_count), Ok(()));
        Self {
            headers,
            rows,
            variable_count,
        }
    }

    /// The 1x1 table of a tautology (`true`) or a contradiction (`false`).
    pub fn constant(value: bool) -> Self {
        Self {
            headers: vec![VALUE_HEADER.to_string()],
            rows: vec![vec![value]],
            variable_count: 0,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of leading variable columns.
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Split into `(headers, rows, variable_count)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<bool>>, usize) {
        (self.headers, self.rows, self.variable_count)
    }

    /// Headers of the variable columns.
    pub fn variables(&self) -> &[String] {
        &self.headers[..self.variable_count]
    }

    /// Headers of the derived columns.
    pub fn derived(&self) -> &[String] {
        &self.headers[self.variable_count..]
    }

    /// Header of the answer column.
    pub fn answer_name(&self) -> &str {
        &self.headers[self.headers.len() - 1]
    }

    /// Answer column, row by row.
    pub fn answers(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row[row.len() - 1])
    }

    /// Row for the given assignment, listed in variable-column order.
    ///
    /// Returns `None` if the assignment does not have one value per variable.
    pub fn row_for(&self, assignment: &[bool]) -> Option<&[bool]> {
        if assignment.len() != self.variable_count {
            return None;
        }
        let index = assignment
            .iter()
            .enumerate()
            .fold(0, |acc, (j, &b)| acc | ((b as usize) << j));
        self.rows.get(index).map(|row| row.as_slice())
    }

    /// Number of rows whose answer is `true`.
    pub fn true_count(&self) -> usize {
        self.answers().filter(|&x| x).count()
    }

    pub fn is_tautology(&self) -> bool {
        self.answers().all(|x| x)
    }

    pub fn is_contradiction(&self) -> bool {
        self.answers().all(|x| !x)
    }
}

fn check_shape(headers: &[String], rows: &[Vec<bool>], variable_count: usize) -> Result<(), String> {
    if headers.is_empty() {
        return Err("no headers".to_string());
    }
    if variable_count > headers.len() {
        return Err(format!(
            "{} variable columns but only {} headers",
            variable_count,
            headers.len()
        ));
    }
    if variable_count >= usize::BITS as usize {
        return Err(format!("too many variables: {}", variable_count));
    }
    if rows.len() != 1 << variable_count {
        return Err(format!(
            "expected {} rows for {} variables, got {}",
            1usize << variable_count,
            variable_count,
            rows.len()
        ));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != headers.len()) {
        return Err(format!(
            "row {} has {} entries, expected {}",
            i,
            row.len(),
            headers.len()
        ));
    }
    Ok(())
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count().max(1)).collect();
        let sep = |j: usize| {
            if j == 0 {
                ""
            } else if j == self.variable_count {
                " | "
            } else {
                " "
            }
        };

        for (j, header) in self.headers.iter().enumerate() {
            write!(f, "{}{:<w$}", sep(j), header, w = widths[j])?;
        }
        writeln!(f)?;

        for (j, &w) in widths.iter().enumerate() {
            let rule = if j == 0 {
                ""
            } else if j == self.variable_count {
                "-+-"
            } else {
                "-"
            };
            write!(f, "{}{}", rule, "-".repeat(w))?;
        }
        writeln!(f)?;

        for row in &self.rows {
            for (j, &cell) in row.iter().enumerate() {
                let cell = if cell { "T" } else { "F" };
                write!(f, "{}{:<w$}", sep(j), cell, w = widths[j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn not_table() -> TruthTable {
        TruthTable::new(
            headers(&["a", "!(a)"]),
            vec![vec![false, true], vec![true, false]],
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_new_valid() {
        let table = not_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.variable_count(), 1);
        assert_eq!(table.variables(), &["a".to_string()]);
        assert_eq!(table.derived(), &["!(a)".to_string()]);
        assert_eq!(table.answer_name(), "!(a)");
        assert_eq!(table.answers().collect::<Vec<_>>(), vec![true, false]);
    }

    #[test]
    fn test_new_rejects_malformed() {
        let err = TruthTable::new(vec![], vec![vec![]], 0).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(_)));

        // Ragged row.
        let err = TruthTable::new(headers(&["a", "!(a)"]), vec![vec![false, true], vec![true]], 1);
        assert!(err.is_err());

        // Wrong row count.
        let err = TruthTable::new(headers(&["a"]), vec![vec![false]], 1);
        assert!(err.is_err());

        // More variables than headers.
        let err = TruthTable::new(headers(&["a"]), vec![vec![false]; 4], 2);
        assert!(err.is_err());

        // No rows.
        let err = TruthTable::new(headers(&["a"]), vec![], 0);
        assert!(err.is_err());
    }

    #[test]
    fn test_constant() {
        let table = TruthTable::constant(true);
        assert_eq!(table.headers(), &["Value".to_string()]);
        assert_eq!(table.rows(), &[vec![true]]);
        assert_eq!(table.variable_count(), 0);
        assert!(table.is_tautology());
        assert!(!table.is_contradiction());
        assert!(TruthTable::constant(false).is_contradiction());
    }

    #[test]
    fn test_row_for() {
        // (a && b) over [a, b]; row index bit 0 = a, bit 1 = b.
        let table = TruthTable::new(
            headers(&["a", "b", "(a && b)"]),
            vec![
                vec![false, false, false],
                vec![true, false, false],
                vec![false, true, false],
                vec![true, true, true],
            ],
            2,
        )
        .unwrap();
        assert_eq!(table.row_for(&[true, false]), Some(&[true, false, false][..]));
        assert_eq!(table.row_for(&[true, true]), Some(&[true, true, true][..]));
        assert_eq!(table.row_for(&[true]), None);
        assert_eq!(table.true_count(), 1);
    }

    #[test]
    fn test_into_parts() {
        let (h, rows, k) = not_table().into_parts();
        assert_eq!(h, headers(&["a", "!(a)"]));
        assert_eq!(rows, vec![vec![false, true], vec![true, false]]);
        assert_eq!(k, 1);
    }

    #[test]
    fn test_display() {
        let s = not_table().to_string();
        let expected = "a | !(a)\n--+-----\nF | T   \nT | F   \n";
        assert_eq!(s, expected);

        let s = TruthTable::constant(false).to_string();
        assert_eq!(s, "Value\n-----\nF    \n");
    }
}

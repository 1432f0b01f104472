//! Irrelevant-variable elimination.
//!
//! A variable is *irrelevant* if flipping it, with every other variable held fixed, never
//! changes the answer. In a table ordered as a binary counter, variable `i` is irrelevant iff
//! every row `j` with bit `i` clear has the same answer as row `j + 2^i`.
//!
//! Dropping a variable removes its column and keeps only the rows where it is false. The
//! remaining rows are again a binary counter over the remaining variables, so the variable
//! that shifts into the freed position is tested on the right bit. Once the last variable
//! goes, the answer is constant and the table collapses to a single `Value` cell.

use log::debug;

use crate::table::{TruthTable, VALUE_HEADER};

/// Drop every variable column that does not affect the answer (the last column).
///
/// Tautologies and contradictions reduce to the 1x1 table `["Value"]`, `[[answer]]`.
///
/// # Panics
///
/// Panics if the table is malformed: no headers, a row whose length differs from the
/// number of headers, more variables than headers, or a row count other than
/// `2^variable_count`.
pub fn remove_irrelevant_variables(
    headers: Vec<String>,
    rows: Vec<Vec<bool>>,
    variable_count: usize,
) -> (Vec<String>, Vec<Vec<bool>>) {
    assert!(!headers.is_empty(), "Table has no columns");
    assert!(
        variable_count <= headers.len(),
        "Table has {} variables but {} columns",
        variable_count,
        headers.len()
    );
    assert!(
        variable_count < usize::BITS as usize && rows.len() == 1 << variable_count,
        "Table with {} variables has {} rows",
        variable_count,
        rows.len()
    );
    assert!(
        rows.iter().all(|row| row.len() == headers.len()),
        "Row length does not match the number of columns"
    );

    let (headers, rows, _) = reduce(headers, rows, variable_count);
    (headers, rows)
}

impl TruthTable {
    /// Table with the irrelevant variables removed; see [`remove_irrelevant_variables`].
    pub fn simplify(&self) -> TruthTable {
        let (headers, rows, variable_count) =
            reduce(self.headers().to_vec(), self.rows().to_vec(), self.variable_count());
        TruthTable::from_parts(headers, rows, variable_count)
    }
}

fn reduce(
    mut headers: Vec<String>,
    mut rows: Vec<Vec<bool>>,
    variable_count: usize,
) -> (Vec<String>, Vec<Vec<bool>>, usize) {
    let mut variables = variable_count;
    let mut i = 0;
    while i < variables {
        if !is_irrelevant(&rows, i) {
            i += 1;
            continue;
        }

        if variables == 1 {
            let value = answer(&rows[0]);
            debug!("{} is constant: {}", headers[headers.len() - 1], value);
            return (vec![VALUE_HEADER.to_string()], vec![vec![value]], 0);
        }

        debug!("drop irrelevant variable {}", headers[i]);
        drop_variable(&mut headers, &mut rows, i);
        variables -= 1;
    }
    (headers, rows, variables)
}

/// Whether flipping variable `i` never changes the answer.
fn is_irrelevant(rows: &[Vec<bool>], i: usize) -> bool {
    let stride = 1 << i;
    rows.chunks(2 * stride).all(|block| {
        let (low, high) = block.split_at(stride);
        low.iter().zip(high).all(|(x, y)| answer(x) == answer(y))
    })
}

/// Remove column `i` and keep the rows where variable `i` is false.
fn drop_variable(headers: &mut Vec<String>, rows: &mut Vec<Vec<bool>>, i: usize) {
    let bit = 1 << i;
    let mut index = 0usize;
    rows.retain(|_| {
        let keep = index & bit == 0;
        index += 1;
        keep
    });
    for row in rows.iter_mut() {
        row.remove(i);
    }
    headers.remove(i);
}

fn answer(row: &[bool]) -> bool {
    row[row.len() - 1]
}

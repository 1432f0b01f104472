//! Truth-table construction.
//!
//! [`Expr::analyze`] enumerates every assignment of the distinct variables of a tree and,
//! for each one, evaluates every distinct subexpression exactly once. Subexpressions are
//! identified by canonical name: each name gets one column, allocated the first time the
//! name is solved, and within a row a name that already has a value is not recomputed.
//!
//! The solve never touches the leaves' bindings. Variable values come from the row index,
//! and derived values are read back from the row being built.

use std::collections::HashMap;

use log::{debug, trace};

use crate::expr::{Expr, UnaryOp};
use crate::table::TruthTable;

impl Expr {
    /// Build the full truth table of the expression.
    pub fn analyze(&self) -> TruthTable {
        match self {
            Expr::Leaf(leaf) => TruthTable::from_parts(
                vec![leaf.label().to_string()],
                vec![vec![false], vec![true]],
                1,
            ),
            Expr::Unary(op) => analyze_unary(op, self.name()),
            Expr::Binary(_) => analyze_tree(self),
        }
    }

    /// Same as [`analyze`][Expr::analyze], split into `(headers, rows, variable_count)`.
    pub fn analyze_parts(&self) -> (Vec<String>, Vec<Vec<bool>>, usize) {
        self.analyze().into_parts()
    }
}

/// Extend the child's table with one column for the unary node.
fn analyze_unary(op: &UnaryOp, name: &str) -> TruthTable {
    let (mut headers, mut rows, variable_count) = op.child().analyze().into_parts();
    debug_assert!(
        headers.iter().all(|h| h != name),
        "{} already has a column",
        name
    );

    for row in rows.iter_mut() {
        let value = op.operator().apply(row[row.len() - 1]);
        row.push(value);
    }
    headers.push(name.to_string());

    debug!("analyze {}: {} rows, {} columns", name, rows.len(), headers.len());
    TruthTable::from_parts(headers, rows, variable_count)
}

fn analyze_tree(root: &Expr) -> TruthTable {
    let components = root.children().deduplicate();

    // Variables take the leading columns, in first-seen order.
    let mut columns: HashMap<String, usize> = HashMap::with_capacity(components.len());
    for node in components.iter().filter(|node| node.is_variable()) {
        let index = columns.len();
        columns.insert(node.name().to_string(), index);
    }
    let variable_count = columns.len();
    assert!(
        variable_count < usize::BITS as usize,
        "Too many variables: {}",
        variable_count
    );

    debug!(
        "analyze {}: {} variables, {} components",
        root,
        variable_count,
        components.len()
    );

    let size = 1usize << variable_count;
    let mut rows = Vec::with_capacity(size);
    for i in 0..size {
        let mut row = Vec::with_capacity(components.len());
        row.extend((0..variable_count).map(|j| (i >> j) & 1 == 1));
        solve(root, &mut columns, &mut row);
        rows.push(row);
    }
    debug_assert_eq!(columns.len(), components.len());

    let mut headers = vec![String::new(); columns.len()];
    for (name, index) in columns {
        headers[index] = name;
    }

    TruthTable::from_parts(headers, rows, variable_count)
}

/// Value of `node` in the row being built.
///
/// A name that already has a value in `row` is returned as is. Otherwise the children are
/// solved first, the node's value is appended to `row`, and its name is given the next
/// column index if it has none yet. Every row solves names in the same order, so a column
/// index is the same across all rows.
fn solve(node: &Expr, columns: &mut HashMap<String, usize>, row: &mut Vec<bool>) -> bool {
    let known = columns.get(node.name()).copied();
    if let Some(&value) = known.and_then(|index| row.get(index)) {
        return value;
    }

    let value = match node {
        Expr::Leaf(leaf) => unreachable!("Variable {} has no column", leaf.label()),
        Expr::Unary(op) => op.operator().apply(solve(op.child(), columns, row)),
        Expr::Binary(op) => {
            let lhs = solve(op.left(), columns, row);
            let rhs = solve(op.right(), columns, row);
            op.operator().apply(lhs, rhs)
        }
    };

    let index = known.unwrap_or_else(|| {
        let index = columns.len();
        columns.insert(node.name().to_string(), index);
        index
    });
    assert_eq!(index, row.len(), "Column {} solved out of order", node.name());
    row.push(value);

    trace!("solve {} = {} (column {})", node.name(), value, index);
    value
}

//! # truth-tables: Truth tables for boolean expression trees
//!
//! **`truth-tables`** builds boolean expressions as trees of variables and operators,
//! derives their complete truth tables, and simplifies those tables by dropping the
//! variables that never affect the result.
//!
//! ## Key Features
//!
//! - **Name-Based Identity**: Every node has a canonical name such as `(a && !(b))`. Nodes with
//!   equal names are the same subexpression, even when built independently, and share one column.
//! - **Memoized Tables**: Each distinct subexpression is computed once per row, however often it
//!   occurs in the tree.
//! - **Pure Analysis**: Building a table never reads or writes the variables' bindings.
//! - **Simplification**: Irrelevant variables are pruned; tautologies and contradictions collapse
//!   to a single `Value` cell.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_tables::expr::{binding, Expr};
//! use truth_tables::simplify::remove_irrelevant_variables;
//!
//! // 1. Bind variables (leaves with the same label share a binding)
//! let a = binding(true);
//! let b = binding(false);
//!
//! // 2. Build a formula: f = !a || (a && b)
//! let f = Expr::or(
//!     Expr::not(Expr::leaf("a", &a)),
//!     Expr::and(Expr::leaf("a", &a), Expr::leaf("b", &b)),
//! );
//! assert_eq!(f.name(), "(!(a) || (a && b))");
//! assert!(!f.evaluate());
//!
//! // 3. Build the truth table: one row per assignment of (a, b)
//! let (headers, rows, variable_count) = f.analyze_parts();
//! assert_eq!(headers.len(), 5);
//! assert_eq!(rows.len(), 4);
//! assert_eq!(variable_count, 2);
//!
//! // 4. A tautology collapses to a single cell
//! let g = Expr::or(Expr::leaf("a", &a), Expr::not(Expr::leaf("a", &a)));
//! let (headers, rows, variable_count) = g.analyze_parts();
//! let (headers, rows) = remove_irrelevant_variables(headers, rows, variable_count);
//! assert_eq!(headers, vec!["Value".to_string()]);
//! assert_eq!(rows, vec![vec![true]]);
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: The [`Expr`][crate::expr::Expr] tree and its evaluation.
//! - **[`analyze`]**: Truth-table construction.
//! - **[`simplify`]**: Irrelevant-variable elimination.
//! - **[`table`]**: The [`TruthTable`][crate::table::TruthTable] value type.

pub mod analyze;
pub mod components;
pub mod error;
pub mod expr;
pub mod operator;
pub mod simplify;
pub mod table;

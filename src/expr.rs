//! Boolean expression trees.
//!
//! An [`Expr`] is one of three node kinds:
//!
//! - [`Leaf`]: a named variable bound to a shared boolean cell,
//! - [`UnaryOp`]: a [`UnaryOperator`] applied to one child,
//! - [`BinaryOp`]: a [`BinaryOperator`] applied to two children.
//!
//! Every node carries a *canonical name*, e.g. `!(a)` or `(a && b)`, computed once at
//! construction. Two nodes denote the same subexpression iff their names are equal, so
//! independently built copies of a subtree share one column in a truth table.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};
use std::rc::Rc;

use crate::components::ComponentList;
use crate::operator::{BinaryOperator, UnaryOperator};

/// Shared boolean cell a [`Leaf`] reads its value from.
pub type Binding = Rc<Cell<bool>>;

/// Create a fresh [`Binding`] holding `value`.
pub fn binding(value: bool) -> Binding {
    Rc::new(Cell::new(value))
}

#[derive(Debug, Clone)]
pub struct Leaf {
    label: String,
    value: Binding,
}

impl Leaf {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value of the bound cell.
    pub fn value(&self) -> bool {
        self.value.get()
    }

    pub fn binding(&self) -> &Binding {
        &self.value
    }
}

#[derive(Debug, Clone)]
pub struct UnaryOp {
    operator: UnaryOperator,
    child: Box<Expr>,
    name: String,
}

impl UnaryOp {
    pub fn operator(&self) -> UnaryOperator {
        self.operator
    }

    pub fn child(&self) -> &Expr {
        &self.child
    }
}

#[derive(Debug, Clone)]
pub struct BinaryOp {
    operator: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
    name: String,
}

impl BinaryOp {
    pub fn operator(&self) -> BinaryOperator {
        self.operator
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

#[derive(Debug, Clone)]
pub enum Expr {
    Leaf(Leaf),
    Unary(UnaryOp),
    Binary(BinaryOp),
}

// Constructors
impl Expr {
    /// Variable `label` reading its value from `value`.
    ///
    /// Leaves sharing a label are the same logical variable. When a binary node joins two
    /// subtrees, every leaf of the right subtree whose label already occurs on the left is
    /// rebound to the left's binding, so one label never holds two values in a tree.
    pub fn leaf(label: impl Into<String>, value: &Binding) -> Self {
        Expr::Leaf(Leaf {
            label: label.into(),
            value: Rc::clone(value),
        })
    }

    /// Variable `label` with its own fresh binding (until joined with an earlier `label`).
    pub fn var(label: impl Into<String>, value: bool) -> Self {
        Expr::leaf(label, &binding(value))
    }

    pub fn unary(operator: UnaryOperator, child: Expr) -> Self {
        let name = format!("{}({})", operator.symbol(), child.name());
        Expr::Unary(UnaryOp {
            operator,
            child: Box::new(child),
            name,
        })
    }

    pub fn binary(operator: BinaryOperator, left: Expr, mut right: Expr) -> Self {
        let mut bindings = HashMap::new();
        left.collect_bindings(&mut bindings);
        right.rebind(&bindings);

        let name = format!("({} {} {})", left.name(), operator.symbol(), right.name());
        Expr::Binary(BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            name,
        })
    }

    pub fn not(child: Expr) -> Self {
        Expr::unary(UnaryOperator::Not, child)
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOperator::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOperator::Or, left, right)
    }
}

impl Expr {
    /// Canonical name of the expression.
    pub fn name(&self) -> &str {
        match self {
            Expr::Leaf(leaf) => &leaf.label,
            Expr::Unary(op) => &op.name,
            Expr::Binary(op) => &op.name,
        }
    }

    /// Evaluate the expression under the current values of its bindings.
    pub fn evaluate(&self) -> bool {
        match self {
            Expr::Leaf(leaf) => leaf.value(),
            Expr::Unary(op) => op.operator.apply(op.child.evaluate()),
            Expr::Binary(op) => op.operator.apply(op.left.evaluate(), op.right.evaluate()),
        }
    }

    /// Whether this node is a variable (a [`Leaf`]).
    pub fn is_variable(&self) -> bool {
        matches!(self, Expr::Leaf(_))
    }

    /// All nodes of the tree in post-order: left subtree, right subtree, then the node itself.
    ///
    /// Repeated subexpressions appear once per occurrence; see [`ComponentList::deduplicate`].
    pub fn children(&self) -> ComponentList<'_> {
        let mut nodes = Vec::with_capacity(self.size());
        self.collect_children(&mut nodes);
        ComponentList::from(nodes)
    }

    fn collect_children<'a>(&'a self, nodes: &mut Vec<&'a Expr>) {
        match self {
            Expr::Leaf(_) => {}
            Expr::Unary(op) => op.child.collect_children(nodes),
            Expr::Binary(op) => {
                op.left.collect_children(nodes);
                op.right.collect_children(nodes);
            }
        }
        nodes.push(self);
    }

    /// First-seen binding of every label in the tree.
    fn collect_bindings(&self, bindings: &mut HashMap<String, Binding>) {
        match self {
            Expr::Leaf(leaf) => {
                bindings
                    .entry(leaf.label.clone())
                    .or_insert_with(|| Rc::clone(&leaf.value));
            }
            Expr::Unary(op) => op.child.collect_bindings(bindings),
            Expr::Binary(op) => {
                op.left.collect_bindings(bindings);
                op.right.collect_bindings(bindings);
            }
        }
    }

    /// Point every leaf whose label is in `bindings` at that binding.
    fn rebind(&mut self, bindings: &HashMap<String, Binding>) {
        match self {
            Expr::Leaf(leaf) => {
                if let Some(value) = bindings.get(&leaf.label) {
                    leaf.value = Rc::clone(value);
                }
            }
            Expr::Unary(op) => op.child.rebind(bindings),
            Expr::Binary(op) => {
                op.left.rebind(bindings);
                op.right.rebind(bindings);
            }
        }
    }

    /// Distinct variable labels, in first-seen depth-first order.
    pub fn variables(&self) -> Vec<&str> {
        self.children()
            .deduplicate()
            .into_iter()
            .filter(|node| node.is_variable())
            .map(|node| node.name())
            .collect()
    }

    /// Depth of the tree (0 for a leaf).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Leaf(_) => 0,
            Expr::Unary(op) => 1 + op.child.depth(),
            Expr::Binary(op) => 1 + op.left.depth().max(op.right.depth()),
        }
    }

    /// Number of nodes in the tree, counting repeated subexpressions every time.
    pub fn size(&self) -> usize {
        match self {
            Expr::Leaf(_) => 1,
            Expr::Unary(op) => 1 + op.child.size(),
            Expr::Binary(op) => 1 + op.left.size() + op.right.size(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

use std::collections::HashSet;

use crate::expr::Expr;

/// Ordered list of expression nodes, as produced by [`Expr::children`].
#[derive(Debug, Clone, Default)]
pub struct ComponentList<'a> {
    nodes: Vec<&'a Expr>,
}

impl<'a> ComponentList<'a> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Expr> + '_ {
        self.nodes.iter().copied()
    }

    /// Canonical names of the nodes, in list order.
    pub fn names(&self) -> Vec<&'a str> {
        self.iter().map(|node| node.name()).collect()
    }

    /// Keep only the first node of each canonical name, preserving order.
    pub fn deduplicate(self) -> Self {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.nodes.len());
        let nodes = self
            .nodes
            .into_iter()
            .filter(|&node| seen.insert(node.name()))
            .collect();
        Self { nodes }
    }

    /// Drop variable nodes, leaving only the derived (operator) nodes.
    pub fn remove_variable_nodes(self) -> Self {
        let nodes = self
            .nodes
            .into_iter()
            .filter(|node| !node.is_variable())
            .collect();
        Self { nodes }
    }
}

impl<'a> From<Vec<&'a Expr>> for ComponentList<'a> {
    fn from(nodes: Vec<&'a Expr>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for ComponentList<'a> {
    type Item = &'a Expr;
    type IntoIter = std::vec::IntoIter<&'a Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::expr::binding;

    #[test]
    fn test_deduplicate_by_name() {
        let a = binding(true);
        let f = Expr::or(Expr::not(Expr::leaf("a", &a)), Expr::leaf("a", &a));
        let list = f.children();
        assert_eq!(list.names(), vec!["a", "!(a)", "a", "(!(a) || a)"]);

        let list = list.deduplicate();
        assert_eq!(list.names(), vec!["a", "!(a)", "(!(a) || a)"]);
    }

    #[test]
    fn test_deduplicate_independent_subtrees() {
        // Structurally equal subtrees built separately are one component.
        let f = Expr::and(
            Expr::not(Expr::var("x", false)),
            Expr::or(Expr::not(Expr::var("x", false)), Expr::var("y", true)),
        );
        let list = f.children().deduplicate();
        assert_eq!(
            list.names(),
            vec!["x", "!(x)", "y", "(!(x) || y)", "(!(x) && (!(x) || y))"]
        );
    }

    #[test]
    fn test_deduplicate_idempotent() {
        let a = binding(false);
        let b = binding(true);
        let f = Expr::and(
            Expr::or(Expr::leaf("a", &a), Expr::leaf("b", &b)),
            Expr::or(Expr::leaf("a", &a), Expr::leaf("b", &b)),
        );
        let once = f.children().deduplicate();
        let names = once.names();
        let twice = once.deduplicate();
        assert_eq!(twice.names(), names);
        assert_eq!(twice.len(), 4);
    }

    #[test]
    fn test_remove_variable_nodes() {
        let f = Expr::and(Expr::var("a", true), Expr::not(Expr::var("b", true)));
        let list = f.children().deduplicate().remove_variable_nodes();
        assert_eq!(list.names(), vec!["!(b)", "(a && !(b))"]);
        assert!(list.iter().all(|node| !node.is_variable()));
    }

    #[test]
    fn test_empty() {
        let list = ComponentList::default();
        assert!(list.is_empty());
        assert!(list.deduplicate().is_empty());
    }

    #[test]
    fn test_from_vec() {
        let a = Expr::var("a", true);
        let list = ComponentList::from(vec![&a, &a]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.names(), vec!["a", "a"]);
        assert_eq!(list.deduplicate().len(), 1);
    }
}

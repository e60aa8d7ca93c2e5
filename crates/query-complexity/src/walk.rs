//! Post-order scoring of a query tree.
//!
//! The traversal engine owns the query document. It exposes its field
//! selections through [`QueryNode`] and gets the total complexity back.

use crate::{
    arguments::{Argument, ArgumentValue},
    calculator::FieldComplexityCalculator,
    context::RequestContext,
    settings::ComplexitySettings,
};

pub trait QueryNode {
    fn field_name(&self) -> &str;

    /// Name of the type the field is selected on.
    fn parent_type(&self) -> &str;

    fn arguments(&self) -> &[Argument];

    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// An owned field selection, for engines without a tree of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    field_name: String,
    parent_type: String,
    arguments: Vec<Argument>,
    children: Vec<FieldNode>,
}

impl FieldNode {
    pub fn new(parent_type: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            parent_type: parent_type.into(),
            arguments: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        self.arguments.push(Argument::new(name, value));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: FieldNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = FieldNode>) -> Self {
        self.children.extend(children);
        self
    }
}

impl QueryNode for FieldNode {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn parent_type(&self) -> &str {
        &self.parent_type
    }

    fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

struct Frame<'a, N> {
    node: &'a N,
    next_child: usize,
    child_complexity: u64,
}

impl<'a, N> Frame<'a, N> {
    fn new(node: &'a N) -> Self {
        Self {
            node,
            next_child: 0,
            child_complexity: 0,
        }
    }
}

/// Sum of the scores of `roots`, each including its descendants.
///
/// Children are always scored before their parent. The walk keeps its own
/// stack, so nesting depth is bounded by memory rather than the call stack.
pub fn total_complexity<N: QueryNode>(calculator: &FieldComplexityCalculator, roots: &[N]) -> u64 {
    let mut total: u64 = 0;
    let mut stack: Vec<Frame<'_, N>> = Vec::new();

    for root in roots {
        stack.push(Frame::new(root));

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.node.children().get(frame.next_child) {
                frame.next_child += 1;
                stack.push(Frame::new(child));
                continue;
            }

            let Some(frame) = stack.pop() else { break };
            let node = frame.node;
            let score = calculator.score(
                node.field_name(),
                node.parent_type(),
                node.arguments(),
                frame.child_complexity,
            );

            match stack.last_mut() {
                Some(parent) => parent.child_complexity = parent.child_complexity.saturating_add(score),
                None => total = total.saturating_add(score),
            }
        }
    }

    total
}

/// Scores a query for the request described by `ctx`.
///
/// Returns `None` when analysis is disabled or the request was rejected while
/// loading its policy. In the latter case the calculator is never invoked.
pub fn analyze<N: QueryNode>(ctx: &mut RequestContext, settings: &ComplexitySettings, roots: &[N]) -> Option<u64> {
    if !settings.enabled {
        return None;
    }

    let calculator = FieldComplexityCalculator::from_request(ctx, settings);
    if ctx.is_halted() {
        return None;
    }

    let complexity = total_complexity(&calculator, roots);
    tracing::debug!(complexity, "Computed query complexity");

    Some(complexity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query() {
        let roots: [FieldNode; 0] = [];

        assert_eq!(total_complexity(&FieldComplexityCalculator::default(), &roots), 0);
    }

    #[test]
    fn leaves_and_parents() {
        // { user { name email } } => user: 1 * (1 + 2)
        let query = [FieldNode::new("Query", "user")
            .with_children([FieldNode::new("User", "name"), FieldNode::new("User", "email")])];

        assert_eq!(total_complexity(&FieldComplexityCalculator::default(), &query), 3);
    }

    #[test]
    fn field_node_exposes_its_selection() {
        let node = FieldNode::new("Query", "users")
            .with_argument("first", 10)
            .with_argument("orderBy", ArgumentValue::Enum("NAME".into()))
            .with_child(FieldNode::new("User", "name"));

        assert_eq!(node.field_name(), "users");
        assert_eq!(node.parent_type(), "Query");

        let arguments: Vec<_> = node
            .arguments()
            .iter()
            .map(|argument| (argument.name(), argument.value().as_int()))
            .collect();
        assert_eq!(arguments, [("first", Some(10)), ("orderBy", None)]);

        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].field_name(), "name");
    }

    #[test]
    fn sibling_roots_are_summed() {
        let query = [
            FieldNode::new("Query", "a"),
            FieldNode::new("Query", "b").with_child(FieldNode::new("B", "c")),
        ];

        assert_eq!(total_complexity(&FieldComplexityCalculator::default(), &query), 3);
    }

    #[test]
    fn deep_nesting_does_not_overflow_the_stack() {
        let mut node = FieldNode::new("T", "leaf");
        for _ in 0..100_000 {
            node = FieldNode::new("T", "f").with_child(node);
        }

        assert_eq!(
            total_complexity(&FieldComplexityCalculator::default(), std::slice::from_ref(&node)),
            100_001
        );

        // Dropping a deeply nested tree recurses, unwind it by hand.
        let mut children = std::mem::take(&mut node.children);
        while let Some(mut child) = children.pop() {
            children.append(&mut child.children);
        }
    }
}

//! The contract a parse tree must satisfy to be summarized.

use crate::source::{Position, Span};

/// A node of an externally produced parse tree.
///
/// Implementors expose a kind tag, ordered children and the node's span in
/// the line-split source. Nothing else about the grammar is assumed.
pub trait SyntaxNode: Sized {
    fn kind(&self) -> &str;

    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<Self>;

    fn span(&self) -> Span;

    fn children(&self) -> impl Iterator<Item = Self> + '_ {
        (0..self.child_count()).filter_map(move |index| self.child(index))
    }
}

impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn child_count(&self) -> usize {
        tree_sitter::Node::child_count(self)
    }

    fn child(&self, index: usize) -> Option<Self> {
        let index = u32::try_from(index).ok()?;
        tree_sitter::Node::child(self, index)
    }

    fn span(&self) -> Span {
        Span::new(point(self.start_position()), point(self.end_position()))
    }
}

fn point(p: tree_sitter::Point) -> Position {
    Position::new(p.row, p.column)
}

/// Renders every node depth-first as `kind [row, col] - [row, col]`,
/// indenting two spaces per level.
pub fn dump_tree<N: SyntaxNode>(node: &N) -> String {
    let mut out = String::new();
    dump_node(node, 0, &mut out);
    out
}

fn dump_node<N: SyntaxNode>(node: &N, depth: usize, out: &mut String) {
    let Span { start, end } = node.span();
    out.push_str(&format!(
        "{:indent$}{} [{}, {}] - [{}, {}]\n",
        "",
        node.kind(),
        start.row,
        start.column,
        end.row,
        end.column,
        indent = depth * 2
    ));
    for child in node.children() {
        dump_node(&child, depth + 1, out);
    }
}

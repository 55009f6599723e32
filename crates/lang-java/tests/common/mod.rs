use structscope_core::{Position, Span, SyntaxNode};

/// Hand-built parse tree node for shapes a real grammar would not produce.
#[derive(Debug, Clone)]
pub struct MockNode {
    pub kind: &'static str,
    pub span: Span,
    pub children: Vec<MockNode>,
}

impl SyntaxNode for MockNode {
    fn kind(&self) -> &str {
        self.kind
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.children.get(index).cloned()
    }

    fn span(&self) -> Span {
        self.span
    }
}

/// A node on row 0 covering columns `start..end`.
#[allow(dead_code)]
pub fn node(kind: &'static str, start: usize, end: usize, children: Vec<MockNode>) -> MockNode {
    MockNode {
        kind,
        span: Span::new(Position::new(0, start), Position::new(0, end)),
        children,
    }
}

#[allow(dead_code)]
pub fn leaf(kind: &'static str, start: usize, end: usize) -> MockNode {
    node(kind, start, end, Vec::new())
}

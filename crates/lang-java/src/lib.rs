pub mod constants;
pub mod visitor;

use structscope_core::syntax::dump_tree;
use structscope_core::{ContextTree, Result, SummaryError, SyntaxNode};
use tree_sitter::{Language, Parser, Tree};

pub use visitor::StructureVisitor;

/// Parses Java source with tree-sitter and summarizes it.
pub struct JavaSummarizer {
    language: Language,
}

impl JavaSummarizer {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    pub fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| SummaryError::Parsing(e.to_string()))?;
        parser
            .parse(source, None)
            .ok_or_else(|| SummaryError::Parsing("parser returned no tree".to_string()))
    }

    pub fn summarize(&self, source: &str) -> Result<ContextTree> {
        let tree = self.parse(source)?;
        let root = tree.root_node();
        if root.has_error() {
            tracing::warn!("source contains syntax errors, summary may be partial");
        }
        summarize_tree(&root, source)
    }

    /// The indented text report for `source`.
    pub fn report(&self, source: &str) -> Result<String> {
        Ok(self.summarize(source)?.format())
    }

    /// One line per parse-tree node, for inspecting what the visitor sees.
    pub fn dump_tree(&self, source: &str) -> Result<String> {
        let tree = self.parse(source)?;
        Ok(dump_tree(&tree.root_node()))
    }
}

impl Default for JavaSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks any parse tree rooted at `root` whose spans index into `source`.
pub fn summarize_tree<N: SyntaxNode>(root: &N, source: &str) -> Result<ContextTree> {
    let mut contexts = ContextTree::from_source(source);
    let file = contexts.root();
    StructureVisitor::new(&mut contexts).visit(root, file)?;
    tracing::debug!(contexts = contexts.len(), "summarized source");
    Ok(contexts)
}

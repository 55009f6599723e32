//! Rendering of a finished [`ContextTree`].

use crate::context::{Context, ContextId, ContextKind, ContextTree, FieldDescriptor, Invocation};
use crate::error::Result;
use serde::Serialize;
use std::fmt::Write;

const INDENT_STEP: usize = 2;

impl ContextTree {
    /// The full report, starting at the root with no indentation.
    pub fn format(&self) -> String {
        // The root always exists.
        self.format_from(self.root(), 0).unwrap_or_default()
    }

    /// Renders `id` and its subtree with the header at `indent` spaces.
    pub fn format_from(&self, id: ContextId, indent: usize) -> Result<String> {
        let mut out = String::new();
        self.write_context(id, indent, &mut out)?;
        Ok(out)
    }

    fn write_context(&self, id: ContextId, indent: usize, out: &mut String) -> Result<()> {
        let context = self.context(id)?;
        let inner = indent + INDENT_STEP;

        push_line(out, indent, &context.kind().header());
        for import in context.imports() {
            push_line(out, inner, import);
        }
        for field in context.fields() {
            push_line(out, inner, &field.to_string());
        }
        for invocation in context.invocations() {
            push_line(out, inner, &format!("Invoke: {}", invocation));
        }
        for child in context.children() {
            self.write_context(*child, inner, out)?;
        }
        Ok(())
    }

    /// A nested, serializable copy of the tree.
    pub fn outline(&self) -> OutlineNode {
        self.outline_of(self.root_context())
    }

    fn outline_of(&self, context: &Context) -> OutlineNode {
        OutlineNode {
            header: context.kind().header(),
            kind: context.kind().clone(),
            imports: context.imports().to_vec(),
            fields: context.fields().to_vec(),
            invocations: context.invocations().to_vec(),
            children: context
                .children()
                .iter()
                .filter_map(|child| self.get(*child))
                .map(|child| self.outline_of(child))
                .collect(),
        }
    }
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    let _ = writeln!(out, "{:indent$}{}", "", text, indent = indent);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    pub header: String,
    #[serde(flatten)]
    pub kind: ContextKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invocations: Vec<Invocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

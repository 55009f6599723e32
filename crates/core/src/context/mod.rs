//! The structural summary model.
//!
//! Contexts live in an arena owned by [`ContextTree`]. Each context refers to
//! its parent by [`ContextId`], never by an owning pointer, so ownership runs
//! strictly from the root downwards and the tree cannot form a cycle.

mod builder;

pub use builder::ContextBuilder;

use crate::error::{Result, SummaryError};
use crate::source::{SourceLines, Span};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Index of a context inside its [`ContextTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ContextId(usize);

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContextKind {
    File,
    Package,
    Class {
        modifier: String,
        identifier: String,
    },
    Function {
        modifiers: String,
        identifier: String,
        parameters: String,
        return_type: String,
    },
}

impl ContextKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContextKind::File => "File",
            ContextKind::Package => "Package",
            ContextKind::Class { .. } => "Class",
            ContextKind::Function { .. } => "Function",
        }
    }

    /// The first line a context renders as.
    pub fn header(&self) -> String {
        match self {
            ContextKind::File | ContextKind::Package => self.label().to_string(),
            ContextKind::Class {
                modifier,
                identifier,
            } => format!("{} class {}", modifier, identifier),
            ContextKind::Function {
                modifiers,
                identifier,
                parameters,
                return_type,
            } => format!("{} {} {}: {}", modifiers, identifier, parameters, return_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub modifier: String,
    pub identifier: String,
    pub type_identifier: String,
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.modifier, self.identifier, self.type_identifier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub target: String,
    pub identifier: String,
    pub arguments: String,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.target, self.identifier, self.arguments)
    }
}

/// One node of the summary. Its lists only ever grow, in document order.
#[derive(Debug, Clone)]
pub struct Context {
    kind: ContextKind,
    parent: Option<ContextId>,
    lines: Arc<SourceLines>,
    children: Vec<ContextId>,
    imports: Vec<String>,
    fields: Vec<FieldDescriptor>,
    invocations: Vec<Invocation>,
}

impl Context {
    fn new(kind: ContextKind, parent: Option<ContextId>, lines: Arc<SourceLines>) -> Self {
        Self {
            kind,
            parent,
            lines,
            children: Vec::new(),
            imports: Vec::new(),
            fields: Vec::new(),
            invocations: Vec::new(),
        }
    }

    pub fn kind(&self) -> &ContextKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<ContextId> {
        self.parent
    }

    pub fn lines(&self) -> &Arc<SourceLines> {
        &self.lines
    }

    pub fn children(&self) -> &[ContextId] {
        &self.children
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Slices `span` out of the source this context was built over.
    pub fn text(&self, span: Span) -> Result<String> {
        self.lines.slice(span)
    }

    pub fn add_import(&mut self, text: impl Into<String>) {
        self.imports.push(text.into());
    }

    pub fn add_field(
        &mut self,
        modifier: impl Into<String>,
        identifier: impl Into<String>,
        type_identifier: impl Into<String>,
    ) {
        self.fields.push(FieldDescriptor {
            modifier: modifier.into(),
            identifier: identifier.into(),
            type_identifier: type_identifier.into(),
        });
    }

    pub fn add_invocation(
        &mut self,
        target: impl Into<String>,
        identifier: impl Into<String>,
        arguments: impl Into<String>,
    ) {
        self.invocations.push(Invocation {
            target: target.into(),
            identifier: identifier.into(),
            arguments: arguments.into(),
        });
    }
}

/// Arena of contexts rooted at a single `File` context.
#[derive(Debug, Clone)]
pub struct ContextTree {
    lines: Arc<SourceLines>,
    nodes: Vec<Context>,
}

impl ContextTree {
    pub fn new(lines: Arc<SourceLines>) -> Self {
        let root = Context::new(ContextKind::File, None, Arc::clone(&lines));
        Self {
            lines,
            nodes: vec![root],
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Arc::new(SourceLines::from_source(source)))
    }

    pub fn root(&self) -> ContextId {
        ContextId(0)
    }

    pub fn root_context(&self) -> &Context {
        &self.nodes[0]
    }

    pub fn lines(&self) -> &Arc<SourceLines> {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: ContextId) -> Option<&Context> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: ContextId) -> Option<&mut Context> {
        self.nodes.get_mut(id.0)
    }

    pub fn context(&self, id: ContextId) -> Result<&Context> {
        self.get(id).ok_or(SummaryError::UnknownContext(id))
    }

    pub fn context_mut(&mut self, id: ContextId) -> Result<&mut Context> {
        self.get_mut(id).ok_or(SummaryError::UnknownContext(id))
    }

    /// A builder whose contexts are parented to `id` and share this tree's lines.
    pub fn new_builder(&self, id: ContextId) -> Result<ContextBuilder> {
        let parent = self.context(id)?;
        Ok(ContextBuilder::new(id, Arc::clone(parent.lines())))
    }

    /// Attaches `child` under `parent` and returns the child's id.
    ///
    /// The child must have been built by a builder bound to `parent`.
    pub fn add_child(&mut self, parent: ContextId, child: Context) -> Result<ContextId> {
        self.context(parent)?;
        if child.parent != Some(parent) {
            return Err(SummaryError::ParentMismatch);
        }
        let id = ContextId(self.nodes.len());
        tracing::debug!(%parent, child = %id, kind = child.kind.label(), "attached context");
        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Ids from `id` up to the root, `id` first.
    pub fn ancestors(&self, id: ContextId) -> impl Iterator<Item = ContextId> + '_ {
        std::iter::successors(self.get(id).map(|_| id), move |current| {
            self.get(*current).and_then(Context::parent)
        })
    }

    /// Nesting depth of `id`, with the root at zero.
    pub fn depth(&self, id: ContextId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }
}

//! Structural summaries of parsed source files.
//!
//! A [`context::ContextTree`] is filled in while walking a parse tree exposed
//! through [`syntax::SyntaxNode`], then rendered with
//! [`context::ContextTree::format`].

pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod logging;
pub mod source;
pub mod syntax;

pub use context::{Context, ContextBuilder, ContextId, ContextKind, ContextTree};
pub use error::{Result, SummaryError};
pub use format::OutlineNode;
pub use source::{Position, SourceLines, Span};
pub use syntax::SyntaxNode;

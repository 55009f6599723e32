use super::{Context, ContextId, ContextKind};
use crate::source::SourceLines;
use std::sync::Arc;

/// Creates detached contexts already bound to a parent and its source lines.
///
/// Obtained from [`ContextTree::new_builder`](super::ContextTree::new_builder);
/// the result is attached with [`ContextTree::add_child`](super::ContextTree::add_child).
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    parent: ContextId,
    lines: Arc<SourceLines>,
}

impl ContextBuilder {
    pub(super) fn new(parent: ContextId, lines: Arc<SourceLines>) -> Self {
        Self { parent, lines }
    }

    pub fn build_package(&self) -> Context {
        self.build(ContextKind::Package)
    }

    pub fn build_class(
        &self,
        modifier: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Context {
        self.build(ContextKind::Class {
            modifier: modifier.into(),
            identifier: identifier.into(),
        })
    }

    pub fn build_function(
        &self,
        modifiers: impl Into<String>,
        identifier: impl Into<String>,
        parameters: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Context {
        self.build(ContextKind::Function {
            modifiers: modifiers.into(),
            identifier: identifier.into(),
            parameters: parameters.into(),
            return_type: return_type.into(),
        })
    }

    fn build(&self, kind: ContextKind) -> Context {
        Context::new(kind, Some(self.parent), Arc::clone(&self.lines))
    }
}

#[cfg(test)]
mod tests {
    use crate::context::{ContextKind, ContextTree};

    #[test]
    fn test_every_variant_starts_empty() {
        let tree = ContextTree::from_source("");
        let builder = tree.new_builder(tree.root()).unwrap();

        for context in [
            builder.build_package(),
            builder.build_class("default", "none"),
            builder.build_function("default", "none", "", ""),
        ] {
            assert_eq!(context.parent(), Some(tree.root()));
            assert!(context.children().is_empty());
            assert!(context.imports().is_empty());
            assert!(context.fields().is_empty());
            assert!(context.invocations().is_empty());
        }
        assert_eq!(builder.build_package().kind(), &ContextKind::Package);
    }
}

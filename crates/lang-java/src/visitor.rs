//! Depth-first walk that turns a Java parse tree into a [`ContextTree`].

use crate::constants::*;
use structscope_core::{ContextId, ContextTree, Result, SyntaxNode};

/// Interprets import, class, field, method and invocation nodes; every other
/// kind is walked through without effect.
pub struct StructureVisitor<'t> {
    tree: &'t mut ContextTree,
}

impl<'t> StructureVisitor<'t> {
    pub fn new(tree: &'t mut ContextTree) -> Self {
        Self { tree }
    }

    pub fn visit<N: SyntaxNode>(&mut self, node: &N, current: ContextId) -> Result<()> {
        match node.kind() {
            KIND_IMPORT_DECL => {
                self.trace(node);
                let import = self.text(node, current)?;
                self.tree.context_mut(current)?.add_import(import);
                Ok(())
            }
            KIND_CLASS_DECL => {
                self.trace(node);
                let (next, body_index) = self.class_header(node, current)?;
                self.visit_children(node, body_index, next)
            }
            KIND_FIELD_DECL => {
                self.trace(node);
                self.field(node, current)
            }
            KIND_METHOD_INVOCATION => {
                self.trace(node);
                self.invocation(node, current)?;
                // Arguments may hold further invocations.
                self.visit_children(node, 0, current)
            }
            KIND_METHOD_DECL => {
                self.trace(node);
                let next = self.method_header(node, current)?;
                self.visit_children(node, 0, next)
            }
            _ => self.visit_children(node, 0, current),
        }
    }

    fn visit_children<N: SyntaxNode>(
        &mut self,
        node: &N,
        from: usize,
        current: ContextId,
    ) -> Result<()> {
        for child in node.children().skip(from) {
            self.visit(&child, current)?;
        }
        Ok(())
    }

    /// Returns the new class context and the index of the class body.
    fn class_header<N: SyntaxNode>(
        &mut self,
        node: &N,
        current: ContextId,
    ) -> Result<(ContextId, usize)> {
        let mut modifier = None;
        let mut identifier = None;
        let mut body_index = 0;

        for (index, child) in node.children().enumerate() {
            match child.kind() {
                KIND_MODIFIERS => modifier = Some(self.text(&child, current)?),
                KIND_IDENTIFIER => identifier = Some(self.text(&child, current)?),
                KIND_CLASS_BODY => body_index = index,
                _ => {}
            }
        }

        let class = self.tree.new_builder(current)?.build_class(
            modifier.unwrap_or_else(|| DEFAULT_MODIFIER.to_string()),
            identifier.unwrap_or_else(|| MISSING_IDENTIFIER.to_string()),
        );
        let id = self.tree.add_child(current, class)?;
        Ok((id, body_index))
    }

    fn method_header<N: SyntaxNode>(&mut self, node: &N, current: ContextId) -> Result<ContextId> {
        let mut modifiers = None;
        let mut identifier = None;
        let mut parameters = None;
        let mut return_type = None;

        for child in node.children() {
            let kind = child.kind();
            if kind == KIND_MODIFIERS && modifiers.is_none() {
                modifiers = Some(self.text(&child, current)?);
            } else if kind == KIND_IDENTIFIER && identifier.is_none() {
                identifier = Some(self.text(&child, current)?);
            } else if kind == KIND_FORMAL_PARAMETERS && parameters.is_none() {
                parameters = Some(self.text(&child, current)?);
            } else if TYPE_KINDS.contains(&kind) && return_type.is_none() {
                return_type = Some(self.text(&child, current)?);
            }
        }

        let function = self.tree.new_builder(current)?.build_function(
            modifiers.unwrap_or_else(|| DEFAULT_MODIFIER.to_string()),
            identifier.unwrap_or_else(|| MISSING_IDENTIFIER.to_string()),
            parameters.unwrap_or_default(),
            return_type.unwrap_or_default(),
        );
        self.tree.add_child(current, function)
    }

    /// Records one field per declarator, all sharing the declaration's
    /// modifiers and type.
    fn field<N: SyntaxNode>(&mut self, node: &N, current: ContextId) -> Result<()> {
        let mut modifier = None;
        let mut type_identifier = None;
        let mut identifiers = Vec::new();

        for child in node.children() {
            let kind = child.kind();
            if kind == KIND_MODIFIERS {
                modifier = Some(self.text(&child, current)?);
            } else if kind == KIND_VARIABLE_DECLARATOR {
                identifiers.push(self.declarator_name(&child, current)?);
            } else if TYPE_KINDS.contains(&kind) && type_identifier.is_none() {
                type_identifier = Some(self.text(&child, current)?);
            }
        }

        if identifiers.is_empty() {
            identifiers.push(MISSING_IDENTIFIER.to_string());
        }
        let modifier = modifier.unwrap_or_else(|| DEFAULT_MODIFIER.to_string());
        let type_identifier = type_identifier.unwrap_or_default();

        let context = self.tree.context_mut(current)?;
        for identifier in identifiers {
            context.add_field(modifier.as_str(), identifier, type_identifier.as_str());
        }
        Ok(())
    }

    fn declarator_name<N: SyntaxNode>(
        &self,
        declarator: &N,
        current: ContextId,
    ) -> Result<String> {
        match declarator
            .children()
            .find(|child| child.kind() == KIND_IDENTIFIER)
        {
            Some(name) => self.text(&name, current),
            None => self.text(declarator, current),
        }
    }

    fn invocation<N: SyntaxNode>(&mut self, node: &N, current: ContextId) -> Result<()> {
        let mut target: Option<String> = None;
        let mut object: Option<String> = None;
        let mut identifiers: Vec<String> = Vec::new();
        let mut arguments = String::new();

        for child in node.children() {
            match child.kind() {
                KIND_FIELD_ACCESS => target = Some(self.text(&child, current)?),
                KIND_IDENTIFIER => identifiers.push(self.text(&child, current)?),
                KIND_ARGUMENT_LIST => arguments = self.text(&child, current)?,
                KIND_TYPE_ARGUMENTS => {}
                KIND_DOT => {
                    // Whatever came before the dot is the receiver.
                    if target.is_none() {
                        target = object.take().or_else(|| {
                            (!identifiers.is_empty())
                                .then(|| std::mem::take(&mut identifiers).join("."))
                        });
                    }
                }
                _ => {
                    if target.is_none() {
                        object = Some(self.text(&child, current)?);
                    }
                }
            }
        }

        let identifier = if identifiers.is_empty() {
            MISSING_IDENTIFIER.to_string()
        } else {
            identifiers.concat()
        };
        self.tree.context_mut(current)?.add_invocation(
            target.unwrap_or_default(),
            identifier,
            arguments,
        );
        Ok(())
    }

    /// Slices `node` out of the source `current` was built over.
    fn text<N: SyntaxNode>(&self, node: &N, current: ContextId) -> Result<String> {
        self.tree.context(current)?.text(node.span())
    }

    fn trace<N: SyntaxNode>(&self, node: &N) {
        let span = node.span();
        tracing::trace!(
            kind = node.kind(),
            row = span.start.row,
            column = span.start.column,
            "interpreting node"
        );
    }
}

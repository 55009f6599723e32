// --- Tree-sitter Node Kind Constants ---
pub const KIND_IMPORT_DECL: &str = "import_declaration";
pub const KIND_CLASS_DECL: &str = "class_declaration";
pub const KIND_FIELD_DECL: &str = "field_declaration";
pub const KIND_METHOD_DECL: &str = "method_declaration";
pub const KIND_METHOD_INVOCATION: &str = "method_invocation";

pub const KIND_MODIFIERS: &str = "modifiers";
pub const KIND_IDENTIFIER: &str = "identifier";
pub const KIND_CLASS_BODY: &str = "class_body";
pub const KIND_VARIABLE_DECLARATOR: &str = "variable_declarator";
pub const KIND_FORMAL_PARAMETERS: &str = "formal_parameters";
pub const KIND_FIELD_ACCESS: &str = "field_access";
pub const KIND_ARGUMENT_LIST: &str = "argument_list";
pub const KIND_TYPE_ARGUMENTS: &str = "type_arguments";
pub const KIND_DOT: &str = ".";

/// Kinds that can stand in a field's type or a method's return type position.
pub const TYPE_KINDS: &[&str] = &[
    "type_identifier",
    "integral_type",
    "floating_point_type",
    "boolean_type",
    "void_type",
    "generic_type",
    "array_type",
    "scoped_type_identifier",
];

// --- Sentinels for absent children ---
pub const DEFAULT_MODIFIER: &str = "default";
pub const MISSING_IDENTIFIER: &str = "none";

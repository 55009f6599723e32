mod common;

use common::{MockNode, leaf, node};
use structscope_core::{Position, Span, SummaryError};
use structscope_java::summarize_tree;

#[test]
fn test_class_without_identifier_still_descends_into_body() {
    let source = "class { void m(){ run(); } }";
    let tree = node(
        "program",
        0,
        28,
        vec![node(
            "class_declaration",
            0,
            28,
            vec![
                leaf("class", 0, 5),
                node(
                    "class_body",
                    6,
                    28,
                    vec![
                        leaf("{", 6, 7),
                        node(
                            "method_declaration",
                            8,
                            26,
                            vec![
                                leaf("void_type", 8, 12),
                                leaf("identifier", 13, 14),
                                leaf("formal_parameters", 14, 16),
                                node(
                                    "block",
                                    16,
                                    26,
                                    vec![
                                        leaf("{", 16, 17),
                                        node(
                                            "expression_statement",
                                            18,
                                            24,
                                            vec![
                                                node(
                                                    "method_invocation",
                                                    18,
                                                    23,
                                                    vec![
                                                        leaf("identifier", 18, 21),
                                                        leaf("argument_list", 21, 23),
                                                    ],
                                                ),
                                                leaf(";", 23, 24),
                                            ],
                                        ),
                                        leaf("}", 25, 26),
                                    ],
                                ),
                            ],
                        ),
                        leaf("}", 27, 28),
                    ],
                ),
            ],
        )],
    );

    let contexts = summarize_tree(&tree, source).unwrap();
    let expected = "\
File
  default class none
    default m (): void
      Invoke: .run()
";
    assert_eq!(contexts.format(), expected);
}

#[test]
fn test_class_without_body_visits_header_children() {
    let source = "public class A";
    let tree = node(
        "program",
        0,
        14,
        vec![node(
            "class_declaration",
            0,
            14,
            vec![
                leaf("modifiers", 0, 6),
                leaf("class", 7, 12),
                leaf("identifier", 13, 14),
            ],
        )],
    );

    let contexts = summarize_tree(&tree, source).unwrap();
    assert_eq!(contexts.format(), "File\n  public class A\n");
}

#[test]
fn test_field_and_method_sentinels() {
    // Neither the field nor the method carries modifiers, a type or a name.
    let source = "x; y";
    let tree = node(
        "class_body",
        0,
        4,
        vec![
            node("field_declaration", 0, 2, vec![leaf(";", 1, 2)]),
            node("method_declaration", 3, 4, vec![]),
        ],
    );

    let contexts = summarize_tree(&tree, source).unwrap();
    assert_eq!(contexts.format(), "File\n  default none: \n  default none : \n");
}

#[test]
fn test_invocation_without_identifier() {
    let source = "(1)";
    let tree = node(
        "method_invocation",
        0,
        3,
        vec![leaf("argument_list", 0, 3)],
    );

    let contexts = summarize_tree(&tree, source).unwrap();
    assert_eq!(contexts.format(), "File\n  Invoke: .none(1)\n");
}

#[test]
fn test_unknown_kinds_pass_through() {
    let source = "import a;";
    let tree = node(
        "something_new",
        0,
        9,
        vec![node(
            "wrapper",
            0,
            9,
            vec![leaf("import_declaration", 0, 9)],
        )],
    );

    let contexts = summarize_tree(&tree, source).unwrap();
    assert_eq!(contexts.root_context().imports(), &["import a;"]);
}

#[test]
fn test_span_outside_source_fails() {
    let source = "import a;";
    let tree = MockNode {
        kind: "import_declaration",
        span: Span::new(Position::new(0, 0), Position::new(3, 2)),
        children: Vec::new(),
    };

    let err = summarize_tree(&tree, source).unwrap_err();
    assert!(
        matches!(err, SummaryError::OutOfBounds { row: 1, .. }),
        "unexpected error: {}",
        err
    );
}

use super::{
    ast::{deserialize_ast, serialize_ast, MAX_AST_DEPTH},
    tokens::{deserialize_tokens, serialize_token, serialize_tokens},
};
use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryOp, UnaryOp},
    },
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::{lexer::tokenize, tokens::{Token, TokenKind}},
    parser::parser::parse,
    Position, MK_TOKEN,
};

fn ident(name: &str) -> Node {
    Node::Ident(name.to_string())
}

fn int(value: &str) -> Node {
    Node::Integer(value.to_string())
}

#[test]
fn test_token_line_layout() {
    let token = MK_TOKEN!(TokenKind::Identifier, "count".to_string(), Position::new(1, 1));
    assert_eq!(serialize_token(&token), "    1      1 Identifier      count");

    let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Position::new(12, 9));
    assert_eq!(serialize_token(&token), "   12      9 Integer         42");

    let token = MK_TOKEN!(TokenKind::Assign, String::new(), Position::new(1, 7));
    assert_eq!(serialize_token(&token), "    1      7 Op_assign      ");
}

#[test]
fn test_serialize_tokens_for_program() {
    let tokens = tokenize("x = 1;").unwrap();
    let dump = serialize_tokens(&tokens);
    let lines: Vec<&str> = dump.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "    1      1 Identifier      x");
    assert_eq!(lines[2], "    1      5 Integer         1");
    assert!(lines[3].starts_with("    1      6 Semicolon"));
    assert_eq!(lines[4].trim_end(), "    1      7 End_of_input");
}

#[test]
fn test_deserialize_string_keeps_spaces() {
    let tokens = vec![
        MK_TOKEN!(TokenKind::Print, String::new(), Position::new(1, 1)),
        MK_TOKEN!(TokenKind::String, "  two  spaces ".to_string(), Position::new(1, 7)),
        MK_TOKEN!(TokenKind::String, String::new(), Position::new(2, 1)),
        MK_TOKEN!(TokenKind::EndOfInput, String::new(), Position::new(3, 1)),
    ];

    let dump = serialize_tokens(&tokens);
    assert_eq!(deserialize_tokens(&dump).unwrap(), tokens);
}

#[test]
fn test_deserialize_tokens_is_lenient_about_spacing() {
    let dump = "\n  3 4 Identifier name\n\n 3\t9 Op_add\n";
    let tokens = deserialize_tokens(dump).unwrap();

    assert_eq!(
        tokens,
        vec![
            MK_TOKEN!(TokenKind::Identifier, "name".to_string(), Position::new(3, 4)),
            MK_TOKEN!(TokenKind::Add, String::new(), Position::new(3, 9)),
        ]
    );
}

#[test]
fn test_deserialize_unknown_token_kind() {
    let error = deserialize_tokens("    1      1 Identifier      x\n    1      3 Op_power\n").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnknownTokenKind {
            name: "Op_power".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position::new(2, 0));
    assert_eq!(error.kind(), ErrorKind::Format);
}

#[test]
fn test_deserialize_malformed_token_line() {
    for line in ["Identifier x", "1 Identifier x", "    1      1 Identifier", "    1      1 Semicolon  extra"] {
        let error = deserialize_tokens(line).unwrap_err();
        assert_eq!(error.get_error_name(), "MalformedTokenLine", "line {:?}", line);
    }
}

#[test]
fn test_ast_dump_of_assignment() {
    let tree = parse(tokenize("x = 1 + 2;").unwrap()).unwrap();

    assert_eq!(
        serialize_ast(&tree),
        "Sequence\n;\nAssign\nIdentifier x\nAdd\nInteger 1\nInteger 2\n"
    );
}

#[test]
fn test_ast_dump_of_empty_program() {
    assert_eq!(serialize_ast(&Node::Sequence(vec![])), ";\n");
    assert_eq!(deserialize_ast(";\n").unwrap(), Node::Sequence(vec![]));
}

#[test]
fn test_ast_dump_sequence_is_left_leaning() {
    let tree = Node::Sequence(vec![
        Node::Prtc(Box::new(int("65"))),
        Node::Prtc(Box::new(int("66"))),
    ]);

    assert_eq!(
        serialize_ast(&tree),
        "Sequence\nSequence\n;\nPrtc\nInteger 65\n;\nPrtc\nInteger 66\n;\n"
    );
}

#[test]
fn test_ast_dump_of_if_always_has_pair() {
    let tree = Node::if_stmt(ident("c"), Node::Prts(Box::new(Node::String("yes".to_string()))), None);

    assert_eq!(
        serialize_ast(&tree),
        "If\nIdentifier c\nIf\nPrts\nString yes\n;\n;\n"
    );
}

#[test]
fn test_ast_dump_of_unary_and_while() {
    let tree = Node::while_stmt(
        Node::unary(UnaryOp::Not, ident("done")),
        Node::Sequence(vec![]),
    );

    assert_eq!(serialize_ast(&tree), "While\nNot\nIdentifier done\n;\n;\n");
    assert_eq!(deserialize_ast(&serialize_ast(&tree)).unwrap(), tree);
}

#[test]
fn test_ast_round_trip_for_program() {
    let source = r#"
        count = 1;
        while (count < 10) {
            if count % 2 == 0 {
                print("even ");
            } else if count == 7 {
                putc('!');
            } else {
                x = -count;
                y = !x || count >= 3 && 1;
            }
            count = count + 1;
        }
        print("done with spaces");
    "#;

    let tree = parse(tokenize(source).unwrap()).unwrap();
    let dump = serialize_ast(&tree);

    assert_eq!(deserialize_ast(&dump).unwrap(), tree);
}

#[test]
fn test_deserialize_ast_handwritten() {
    let dump = "Sequence\n;\nAssign\nIdentifier x\nSubtract\nInteger 5\nNegate\nInteger 3\n;\n";

    assert_eq!(
        deserialize_ast(dump).unwrap(),
        Node::Sequence(vec![Node::assign(
            ident("x"),
            Node::binary(
                BinaryOp::Subtract,
                int("5"),
                Node::unary(UnaryOp::Negate, int("3"))
            )
        )])
    );
}

#[test]
fn test_deserialize_ast_errors() {
    let error = deserialize_ast("Loop\n;\n;\n").unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnknownNodeKind {
            name: "Loop".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position::new(1, 0));

    // missing right operand
    let error = deserialize_ast("Add\nInteger 1\n").unwrap_err();
    assert_eq!(error.get_error_name(), "MalformedAst");
    assert_eq!(error.get_position(), &Position::new(3, 0));

    // required slot filled with the absent marker
    assert!(deserialize_ast("Assign\n;\nInteger 1\n").is_err());

    // unary node with a right child
    assert!(deserialize_ast("Negate\nInteger 1\nInteger 2\n").is_err());

    // If without its branch pair
    assert!(deserialize_ast("If\nIdentifier c\nPrtc\nInteger 1\n;\n;\n").is_err());

    // identifier without a name
    assert!(deserialize_ast("Identifier\n").is_err());

    let error = deserialize_ast("Integer 1\nInteger 2\n").unwrap_err();
    assert_eq!(error.get_error_name(), "MalformedAst");
    assert_eq!(error.get_position(), &Position::new(2, 0));
}

#[test]
fn test_empty_else_block_is_dropped() {
    let tree = parse(tokenize("if a { x = 1; } else { }").unwrap()).unwrap();
    let round_tripped = deserialize_ast(&serialize_ast(&tree)).unwrap();

    assert_eq!(
        round_tripped,
        Node::Sequence(vec![Node::if_stmt(
            ident("a"),
            Node::assign(ident("x"), int("1")),
            None
        )])
    );
}

#[test]
fn test_token_dump_feeds_parser() {
    let source = "a = 3; b = a * (a - 1);\nprint(\"b is \");\nputc(b + 48);\n";
    let tokens = tokenize(source).unwrap();

    let reread = deserialize_tokens(&serialize_tokens(&tokens)).unwrap();
    assert_eq!(reread, tokens);
    assert_eq!(parse(reread).unwrap(), parse(tokens).unwrap());
}

#[test]
fn test_carriage_return_in_string_round_trips() {
    let tokens = tokenize("print(\"abc\r\");").unwrap();
    assert_eq!(tokens[2].value, "abc\r");

    let reread = deserialize_tokens(&serialize_tokens(&tokens)).unwrap();
    assert_eq!(reread, tokens);

    let tree = parse(tokens).unwrap();
    assert_eq!(
        tree,
        Node::Sequence(vec![Node::Prts(Box::new(Node::String("abc\r".to_string())))])
    );
    assert_eq!(deserialize_ast(&serialize_ast(&tree)).unwrap(), tree);
}

#[test]
fn test_crlf_dumps_are_read() {
    let tokens = tokenize("x = 1 + 2;").unwrap();
    let dump = serialize_tokens(&tokens).replace('\n', "\r\n");
    assert_eq!(deserialize_tokens(&dump).unwrap(), tokens);

    let tree = parse(tokens).unwrap();
    let dump = serialize_ast(&tree).replace('\n', "\r\n");
    assert_eq!(deserialize_ast(&dump).unwrap(), tree);
}

#[test]
fn test_deserialize_ast_rejects_deep_nesting() {
    let dump = format!("{}Integer 1\n", "Negate\n".repeat(20_000));
    let error = deserialize_ast(&dump).unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedAst");
    assert_eq!(error.kind(), ErrorKind::Format);
    assert!(error.to_string().contains("nesting deeper than"));
    assert_eq!(
        error.get_position(),
        &Position::new(MAX_AST_DEPTH as u32 + 1, 0)
    );
}

#[test]
fn test_deserialize_ast_accepts_nesting_below_the_limit() {
    let depth = 500;
    let dump = format!("{}Integer 1\n", "Negate\n".repeat(depth));

    let mut node = deserialize_ast(&dump).unwrap();
    let mut negations = 0;
    while let Node::Unary { op: UnaryOp::Negate, operand } = node {
        negations += 1;
        node = *operand;
    }
    assert_eq!(negations, depth);
    assert_eq!(node, int("1"));
}

#[test]
fn test_deeply_nested_program_round_trips() {
    let source = format!(
        "{}x = {}1;{}",
        "while 1 { if 1 { ".repeat(12),
        "-".repeat(90),
        "} }".repeat(12)
    );
    let tree = parse(tokenize(&source).unwrap()).unwrap();

    assert_eq!(deserialize_ast(&serialize_ast(&tree)).unwrap(), tree);
}

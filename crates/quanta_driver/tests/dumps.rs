use quanta_driver::{analyze, analyze_recovering, FrontendConfig, FrontendError};
use quanta_diagnostics::{DiagnosticSink, Emitter};

#[test]
fn dumps_for_let_declaration() {
    let output = analyze("let x = 5 + 3;", &FrontendConfig::default()).unwrap();

    assert_eq!(
        output.token_dump(),
        "\
<KEYWORD, let, [Ln: 1, Col: 1]>
<IDENTIFIER, x, [Ln: 1, Col: 5]>
<OPERATOR, =, [Ln: 1, Col: 7]>
<NUMBER, 5, [Ln: 1, Col: 9]>
<OPERATOR, +, [Ln: 1, Col: 11]>
<NUMBER, 3, [Ln: 1, Col: 13]>
<SEMICOLON, ;, [Ln: 1, Col: 14]>
<EOF, None, [Ln: 1, Col: 15]>
"
    );

    assert_eq!(
        output.ast_dump(),
        "\
Program
  VariableDeclaration
    name: x
    BinaryOperation
      op: +
      NumberLiteral
        value: 5
      NumberLiteral
        value: 3
"
    );
}

#[test]
fn syntax_errors_become_positioned_diagnostics() {
    let source = "let = 1;\nprint 2;\nconvert (3m) to";
    let output = analyze_recovering(source, &FrontendConfig::default()).unwrap();
    assert_eq!(output.program.statements.len(), 1);

    let err = FrontendError::Syntax(output.syntax_errors);
    let mut sink = DiagnosticSink::new();
    err.collect_to_sink(&mut sink, Some("trip.qt"));

    assert_eq!(sink.error_count(), 2);
    let positions: Vec<String> = sink
        .diagnostics()
        .iter()
        .filter_map(|d| d.position())
        .collect();
    assert_eq!(positions, vec!["trip.qt:1:5", "trip.qt:3:16"]);

    let mut out = Vec::new();
    Emitter::without_colors()
        .render_all(sink.diagnostics(), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("syntax error: Expected identifier, but found '=' (OPERATOR)"));
    assert!(text.contains("syntax error: Expected identifier, but found end of input"));
}

use quanta_syntax::ast::{BinaryOp, Expr, Stmt};
use quanta_syntax::{
    ast_dump, parse, render_source, token_dump, tokenize, Number, TokenKind, Vocabulary,
};

const MANUAL_SAMPLE: &str = "\
let distance = 10miles;
convert (5m + 6km) to miles;
print distance;
let dis_in_km = miles_to_km(100);
let speed = calculate_speed(100miles, 2hours);
print speed;
";

fn reparse_dump(source: &str) -> String {
    let vocab = Vocabulary::standard();
    let tokens = tokenize(source, &vocab).unwrap();
    let output = parse(&tokens);
    assert!(output.errors.is_empty(), "{:?}", output.errors);
    ast_dump(&output.program)
}

#[test]
fn manual_sample_parses_cleanly() {
    let tokens = tokenize(MANUAL_SAMPLE, &Vocabulary::standard()).unwrap();
    let output = parse(&tokens);

    assert!(output.errors.is_empty(), "{:?}", output.errors);
    assert_eq!(output.program.len(), 6);
    assert!(matches!(
        &output.program.statements[3],
        Stmt::VarDecl { value: Expr::Call { name, .. }, .. } if name == "miles_to_km"
    ));
}

#[test]
fn precedence_never_groups_left() {
    let tokens = tokenize("1 + 2 * 3;", &Vocabulary::standard()).unwrap();
    let program = parse(&tokens).program;
    let one = Expr::Literal(Number::Int(1));
    let two = Expr::Literal(Number::Int(2));
    let three = Expr::Literal(Number::Int(3));

    assert_eq!(
        program.statements,
        vec![Stmt::Expression(Expr::binary(
            one,
            BinaryOp::Add,
            Expr::binary(two, BinaryOp::Mul, three),
        ))]
    );
}

#[test]
fn token_dump_ends_with_eof_line() {
    let tokens = tokenize("print 1;", &Vocabulary::standard()).unwrap();
    let dump = token_dump(&tokens);
    assert_eq!(dump.lines().count(), tokens.len());
    assert_eq!(dump.lines().last(), Some("<EOF, None, [Ln: 1, Col: 9]>"));
}

#[test]
fn punctuation_and_keywords_survive_respelling() {
    let vocab = Vocabulary::standard();
    let source = "convert((a+b)*c, 2)to x;print f();";
    let tokens = tokenize(source, &vocab).unwrap();
    let again = tokenize(&render_source(&tokens), &vocab).unwrap();

    let kinds: Vec<&TokenKind> = tokens.iter().map(|t| &t.kind).collect();
    let kinds_again: Vec<&TokenKind> = again.iter().map(|t| &t.kind).collect();
    assert_eq!(kinds, kinds_again);
}

#[test]
fn respelled_source_reproduces_ast() {
    let vocab = Vocabulary::standard();
    for source in [
        MANUAL_SAMPLE,
        "let x = 5 + 3;",
        "convert (5m + 6km) to miles;",
        "print (1 + 2) * 3 / 4.25 - 10m/s;",
        "let v = calc_div(10km, 2.0hours) * 3;",
    ] {
        let tokens = tokenize(source, &vocab).unwrap();
        let respelled = render_source(&tokens);
        assert_eq!(reparse_dump(source), reparse_dump(&respelled), "{}", respelled);
    }
}

#[test]
fn ast_dump_shape() {
    let dump = reparse_dump("convert (5m + 6km) to miles;");
    let expected = "\
Program
  UnitConversionStatement
    target_unit: miles
    BinaryOperation
      op: +
      UnitValue
        value: 5.0, unit: m
      UnitValue
        value: 6.0, unit: km
";
    assert_eq!(dump, expected);
}

#[test]
fn lexical_errors_abort_whole_pass() {
    let vocab = Vocabulary::standard();
    let err = tokenize("let a = 1;\nlet b = 2.;", &vocab).unwrap_err();
    assert!(err.message.contains("invalid number format"));
    assert_eq!((err.line, err.column), (2, 9));
    assert_eq!(
        err.to_string(),
        "Lexical error at line 2, column 9: invalid number format: 2."
    );
}

//! End-to-end tests: text to tokens, tree, enumeration and report.

use std::collections::HashSet;

use boolsat::assignment::{assignment_count, enumerate_assignments};
use boolsat::ast::Node;
use boolsat::error::{Error, SyntaxError};
use boolsat::eval::Eval;
use boolsat::lexer::tokenize;
use boolsat::parser::parse;
use boolsat::report::{Report, ReportConfig};
use boolsat::sat::{collect_identifiers, solve};
use boolsat::token::Token;
use num_bigint::BigUint;

fn id(name: &str) -> Node {
    Node::identifier(name)
}

// ─── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn or_scenario() {
    let input = "isDone || failed";

    let tokens = tokenize(input).unwrap();
    assert_eq!(tokens, vec![Token::identifier("isDone"), Token::Or, Token::identifier("failed")]);

    let root = parse(input).unwrap().unwrap();
    assert_eq!(root, Node::or(id("isDone"), id("failed")));

    let identifiers = collect_identifiers(&root);
    assert_eq!(identifiers.len(), 2);
    assert_eq!(enumerate_assignments(&identifiers).count(), 4);

    let results = solve(Some(&root));
    assert!(results.is_satisfiable());
    assert_eq!(results.sat_count(), BigUint::from(3u32));
    let falsifying: Vec<String> = results
        .iter()
        .filter(|o| !o.value)
        .map(|o| o.assignment.canonical_key())
        .collect();
    assert_eq!(falsifying, vec!["failed: false, isDone: false"]);
}

#[test]
fn empty_scenario() {
    assert!(tokenize("").unwrap().is_empty());
    let root = parse("").unwrap();
    assert_eq!(root, None);
    let results = solve(root.as_ref());
    assert_eq!(results.len(), 1);
}

#[test]
fn unclosed_paren_scenario() {
    let err = parse("(a && b").unwrap_err();
    assert_eq!(err, Error::Syntax(SyntaxError::UnclosedParen { found: None }));
    assert!(err.to_string().contains("PAREN_RIGHT"));
}

#[test]
fn lexical_error_reports_position() {
    match parse("a && b | c").unwrap_err() {
        Error::Lex(e) => {
            assert_eq!(e.character, ' ');
            assert_eq!(e.position, 8);
        }
        other => panic!("expected lexical error, got {:?}", other),
    }
}

// ─── Deep input ────────────────────────────────────────────────────────────────

#[test]
fn long_chain_of_one_identifier() {
    let input = vec!["a"; 10_000].join(" && ");
    let root = parse(&input).unwrap();
    let results = solve(root.as_ref());
    assert_eq!(results.len(), 2);
    assert_eq!(results.sat_count(), BigUint::from(1u32));

    let report = Report::new(&input, &results, &ReportConfig::default());
    assert_eq!(report.lines, vec!["a: true"]);
}

#[test]
fn deep_negation_and_nesting() {
    let root = parse(&format!("{}x", "!".repeat(100_000))).unwrap();
    let results = solve(root.as_ref());
    assert_eq!(results.get("x: false"), Some(true));
    assert_eq!(results.get("x: true"), Some(false));

    let err = parse(&format!("{}x{}", "(".repeat(200_000), ")".repeat(200_000))).unwrap_err();
    assert!(matches!(err, Error::Syntax(SyntaxError::NestingTooDeep { .. })));
}

// ─── Properties ────────────────────────────────────────────────────────────────

#[test]
fn grouping_is_transparent() {
    assert_eq!(parse("((((a))))").unwrap(), parse("a").unwrap());
    assert_eq!(parse("(a) && ((b))").unwrap(), parse("a && b").unwrap());
}

#[test]
fn enumeration_is_complete() {
    let inputs = [
        "a",
        "a && b",
        "(x1 || x2) && !x3",
        "p && q || r && s || !t",
        "a && b && c && d || e || f || g && h || i && j",
    ];
    for input in inputs {
        let root = parse(input).unwrap().unwrap();
        let k = collect_identifiers(&root).len();
        let results = solve(Some(&root));
        assert_eq!(BigUint::from(results.len()), assignment_count(k), "input: {}", input);

        let keys: HashSet<String> = results.iter().map(|o| o.assignment.canonical_key()).collect();
        assert_eq!(keys.len(), results.len());

        for outcome in results.iter() {
            assert_eq!(root.eval(&outcome.assignment), outcome.value);
        }
    }
}

#[test]
fn de_morgan_agrees() {
    let lhs = parse("!(a && b)").unwrap().unwrap();
    let rhs = parse("!a || !b").unwrap().unwrap();
    for assignment in enumerate_assignments(&collect_identifiers(&lhs)) {
        assert_eq!(lhs.eval(&assignment), rhs.eval(&assignment));
    }
}

#[test]
fn verbose_report_lists_everything() {
    let input = "a && b";
    let root = parse(input).unwrap();
    let results = solve(root.as_ref());
    let report = Report::new(input, &results, &ReportConfig { verbose: true });
    assert!(report.satisfiable);
    assert_eq!(
        report.lines,
        vec![
            "a: false, b: false, false",
            "a: false, b: true, false",
            "a: true, b: false, false",
            "a: true, b: true, true",
        ]
    );

    let report = Report::new(input, &results, &ReportConfig::default());
    assert_eq!(report.lines, vec!["a: true, b: true"]);
}

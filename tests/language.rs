use std::collections::VecDeque;

use truthline::{
    config::Variant,
    error::{Error, ParseError, RuntimeError},
    evaluate_formula,
    interpreter::{
        evaluator::apply_operator,
        operator::OperatorKind,
        resolver::{check_balance, resolve_parentheses},
    },
};

fn eval(src: &str) -> bool {
    evaluate_formula(src, Variant::Minimal).unwrap_or_else(|e| panic!("Formula failed: {e}"))
}

fn eval_extended(src: &str) -> bool {
    evaluate_formula(src, Variant::Extended).unwrap_or_else(|e| panic!("Formula failed: {e}"))
}

fn assert_true(src: &str) {
    assert!(eval(src), "expected '{src}' to be true");
}

fn assert_false(src: &str) {
    assert!(!eval(src), "expected '{src}' to be false");
}

fn assert_failure(src: &str) -> Error {
    match evaluate_formula(src, Variant::Minimal) {
        Ok(value) => panic!("Formula '{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn conjunction_and_disjunction_truth_tables() {
    for left in [true, false] {
        for right in [true, false] {
            assert_eq!(eval(&format!("{left} and {right}")), left && right);
            assert_eq!(eval(&format!("{left} or {right}")), left || right);
        }
    }
}

#[test]
fn extended_operator_truth_tables() {
    for left in [true, false] {
        for right in [true, false] {
            assert_eq!(eval_extended(&format!("{left} xor {right}")), left ^ right);
            assert_eq!(eval_extended(&format!("{left} implies {right}")), !left || right);
            assert_eq!(eval_extended(&format!("{left} equals {right}")), left == right);
            assert_eq!(eval_extended(&format!("{left} notequals {right}")), left != right);
        }
    }
}

#[test]
fn literals_alone() {
    assert_true("true");
    assert_false("false");
    assert_false("");
    assert_false("   ");
    // The last operand wins when nothing combines them.
    assert_false("true false");
    assert_true("false true");
}

#[test]
fn keywords_ignore_case() {
    assert_true("TRUE AND True");
    assert_false("tRuE And FALSE");
    assert_true("false OR true");
    assert_true("NOT false");
}

#[test]
fn unknown_words_are_false() {
    assert_false("true and banana");
    assert_false("1");
    assert_true("banana or true");
    assert_false("true and tru");
}

#[test]
fn extended_keywords_are_literals_in_minimal_variant() {
    // `xor` becomes a false literal and no operator is left:
    // operands [true, false, true].
    assert_true("true xor true");
    assert_false("true implies false");
    assert!(!evaluate_formula("true xor true", Variant::Extended).unwrap());
}

#[test]
fn operators_apply_in_written_order() {
    // `and` first on the two newest operands: false and true -> false, then
    // true or false -> true.
    assert_true("true and false or true");
    // `or` first: false or false -> false, then false and false -> false.
    assert_false("false or false and false");
    // Precedence would make this true: `or` pairs false with false first.
    assert_false("true or false and false");
}

#[test]
fn binary_operators_take_the_newest_operands() {
    // Operators are collected separately: `and` combines the last two
    // literals and its result becomes the last operand.
    assert_false("true false false and");
    assert_true("false true true and");
    assert_true(" true  or   false ");
}

#[test]
fn not_negates_the_front_operand() {
    assert_false("not true");
    assert_true("not false");
    // The front literal is negated, not the one next to `not`.
    assert_false("true false not");
    assert_true("true true not");
    // `not` is dequeued first and flips the first literal: (not false) and true.
    assert_true("not false and true");
    // `and` combines the two literals, then `not` flips the result.
    assert_false("true and true not");
}

#[test]
fn parentheses_collapse_innermost_first() {
    assert_true("( true )");
    assert_false("( true and false )");
    assert_true("not ( false and true )");
    assert_true("( ( false or true ) and ( true or false ) )");
    assert_false("true and ( false or ( true and false ) )");
    assert_true("(true or false)");
}

#[test]
fn wrapping_a_group_does_not_change_it() {
    for group in ["( true and false )", "( true or false )", "( not true )", "( true )"] {
        assert_eq!(eval(group), eval(&format!("( {group} )")), "{group}");
    }
}

#[test]
fn collapsed_groups_are_plain_text() {
    // The collapsed group is glued to its neighbour and the result is an unknown word.
    assert_false("not(true)");
    assert_false("true or(false)");
}

#[test]
fn resolving_without_parentheses_is_a_no_op() {
    for formula in ["", "true", "true and  false", "not TRUE or banana"] {
        assert_eq!(resolve_parentheses(formula, Variant::Minimal).unwrap(), formula);
    }
}

#[test]
fn resolved_formulas_have_no_parentheses() {
    let flat = resolve_parentheses("( true ) or ( ( false ) and ( not true ) )",
                                   Variant::Minimal).unwrap();
    assert!(!flat.contains(['(', ')']));
    assert_eq!(flat, "true or false");
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_eq!(assert_failure("( true"),
               Error::Parse(ParseError::UnmatchedOpeningParen { count: 1 }));
    assert_eq!(assert_failure("true )"),
               Error::Parse(ParseError::UnmatchedClosingParen { count: 1 }));
    assert_eq!(assert_failure("( ( ( true )"),
               Error::Parse(ParseError::UnmatchedOpeningParen { count: 2 }));
    assert_eq!(assert_failure(") true ("),
               Error::Parse(ParseError::UnmatchedClosingParen { count: 1 }));
    assert!(check_balance("( true )").is_ok());
}

#[test]
fn operand_starvation_is_an_error() {
    assert_eq!(assert_failure("true and"),
               Error::Runtime(RuntimeError::OperandStarvation { operator: OperatorKind::And,
                                                                needed:   2,
                                                                found:    1, }));
    assert_eq!(assert_failure("not"),
               Error::Runtime(RuntimeError::OperandStarvation { operator: OperatorKind::Not,
                                                                needed:   1,
                                                                found:    0, }));
    assert!(matches!(assert_failure("true and false or"),
                     Error::Runtime(RuntimeError::OperandStarvation { operator: OperatorKind::Or,
                                                                      .. })));
}

#[test]
fn starvation_inside_a_group_fails_the_whole_formula() {
    assert!(matches!(assert_failure("true or ( and )"), Error::Runtime(_)));
}

#[test]
fn error_messages_name_the_violation() {
    let message = assert_failure("( true").to_string();
    assert!(message.contains("opening parenthesis"), "{message}");

    let message = assert_failure("or").to_string();
    assert!(message.contains("'or' needs 2 operand(s) but only 0 remain"), "{message}");
}

#[test]
fn binary_operators_keep_the_queue_consistent() {
    let kinds = [OperatorKind::And,
                 OperatorKind::Or,
                 OperatorKind::Xor,
                 OperatorKind::Implies,
                 OperatorKind::Equals,
                 OperatorKind::NotEquals];
    for operator in kinds {
        let mut operands = VecDeque::from([true, false, true]);
        apply_operator(&mut operands, operator).unwrap();
        assert_eq!(operands, VecDeque::from([true, operator.combine(false, true)]), "{operator}");

        let mut single = VecDeque::from([true]);
        assert!(apply_operator(&mut single, operator).is_err());
        assert_eq!(single, VecDeque::from([true]), "{operator}");
    }
}

#[test]
fn not_flips_only_the_front_operand() {
    let mut operands = VecDeque::from([false, false, true]);
    apply_operator(&mut operands, OperatorKind::Not).unwrap();
    assert_eq!(operands, VecDeque::from([true, false, true]));

    let mut empty = VecDeque::new();
    assert!(apply_operator(&mut empty, OperatorKind::Not).is_err());
}

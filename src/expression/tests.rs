//! Tests for the expression module

use super::*;
use crate::expr;

fn xor() -> Expr {
    expr!(("x" | "y") & !("x" & "y"))
}

#[test]
fn test_collect_variables() {
    let vars = expr!("b" & ("a" | "c") & !"a").collect_variables();
    let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    assert!(Expr::literal(true).collect_variables().is_empty());
}

#[test]
fn test_builders_do_not_simplify() {
    let e = Expr::literal(false).and(&Expr::variable("x"));
    assert!(matches!(e.kind(), ExprKind::And(_, _)));
    assert_eq!(e.as_literal(), None);
}

#[test]
fn test_macro_matches_method_api() {
    let x = Expr::variable("x");
    let y = Expr::variable("y");
    assert_eq!(xor(), x.or(&y).and(&x.and(&y).not()));
    assert_eq!(expr!(x & true), x.and(&Expr::literal(true)));
}

#[test]
fn test_node_count_and_depth() {
    let e = xor();
    assert_eq!(e.node_count(), 8);
    assert_eq!(e.depth(), 4);
    assert_eq!(Expr::variable("x").depth(), 1);
}

#[test]
fn test_depth_takes_longer_branch() {
    let lopsided = expr!("a" & !(!("b" | "c")));
    assert_eq!(lopsided.depth(), 5);
    assert_eq!(expr!(!(!(!"a")) | "b").depth(), 5);
    assert_eq!(lopsided.node_count(), 7);
}

// ========== Display ==========

#[test]
fn test_display_literals_and_variables() {
    assert_eq!(Expr::literal(true).to_string(), "True");
    assert_eq!(Expr::literal(false).to_string(), "False");
    assert_eq!(Expr::variable("abc_1").to_string(), "abc_1");
}

#[test]
fn test_display_left_chains_without_parens() {
    assert_eq!(expr!("a" & "b" & "c").to_string(), "a and b and c");
    assert_eq!(expr!("a" | "b" | "c").to_string(), "a or b or c");
}

#[test]
fn test_display_right_nesting_keeps_parens() {
    let a = Expr::variable("a");
    let bc = expr!("b" & "c");
    assert_eq!(a.and(&bc).to_string(), "a and (b and c)");
}

#[test]
fn test_display_mixed_operators_parenthesised() {
    assert_eq!(expr!("a" & "b" | "c").to_string(), "(a and b) or c");
    assert_eq!(expr!("a" & ("b" | "c")).to_string(), "a and (b or c)");
}

#[test]
fn test_display_negation() {
    assert_eq!(expr!(!"x").to_string(), "not x");
    assert_eq!(expr!(!!"x").to_string(), "not (not x)");
    assert_eq!(expr!(!("x" | "y")).to_string(), "not (x or y)");
    assert_eq!(expr!(!"x" & "y").to_string(), "(not x) and y");
    assert_eq!(xor().to_string(), "(x or y) and (not (x and y))");
}

// ========== Reduction ==========

#[test]
fn test_reduce_substitutes_matching_variable_only() {
    let x = Expr::variable("x");
    assert_eq!(x.reduce("x", true), Expr::literal(true));
    assert_eq!(x.reduce("x", false), Expr::literal(false));
    assert_eq!(x.reduce("y", true), x);
}

#[test]
fn test_reduce_literal_is_idempotent() {
    for literal in [true, false] {
        let e = Expr::literal(literal);
        for value in [true, false] {
            assert_eq!(e.reduce("x", value), e);
            assert_eq!(e.reduce("anything", value), e);
        }
    }
}

#[test]
fn test_reduce_and_identities() {
    let x = Expr::variable("x");
    let other = expr!("y" | !"z");

    // False absorbs, regardless of the other side
    let e = Expr::literal(false).and(&other);
    for value in [true, false] {
        assert_eq!(e.reduce("v", value), Expr::literal(false));
    }
    assert_eq!(other.and(&Expr::literal(false)).reduce("v", true), Expr::literal(false));

    // True is the identity
    assert_eq!(expr!(x & "y").reduce("x", true), Expr::variable("y"));
    assert_eq!(expr!("y" & x).reduce("x", true), Expr::variable("y"));

    // x and x folds completely
    assert_eq!(expr!(x & x).reduce("x", true), Expr::literal(true));
}

#[test]
fn test_reduce_or_identities() {
    let other = expr!("y" & !"z");

    let e = Expr::literal(true).or(&other);
    for value in [true, false] {
        assert_eq!(e.reduce("v", value), Expr::literal(true));
    }
    assert_eq!(other.or(&Expr::literal(true)).reduce("v", false), Expr::literal(true));

    assert_eq!(expr!("x" | "y").reduce("x", false), Expr::variable("y"));
    assert_eq!(expr!("y" | "x").reduce("x", false), Expr::variable("y"));
}

#[test]
fn test_reduce_not_folds_literal() {
    for b in [true, false] {
        let e = Expr::literal(b).not();
        for value in [true, false] {
            assert_eq!(e.reduce("v", value), Expr::literal(!b));
        }
    }
    assert_eq!(expr!(!"x").reduce("x", true), Expr::literal(false));
    assert_eq!(expr!(!"x").reduce("y", true), expr!(!"x"));
}

#[test]
fn test_reduce_rebuilds_partially_reduced_nodes() {
    let e = expr!(("x" | "y") & ("y" | "z"));
    // x = False leaves y on the left; the right side is untouched
    assert_eq!(e.reduce("x", false), expr!("y" & ("y" | "z")));
}

#[test]
fn test_reduce_shares_untouched_subtrees() {
    let e = xor();
    let reduced = e.reduce("unrelated", true);
    assert!(reduced.ptr_eq(&e));
}

#[test]
fn test_reduce_does_not_modify_input() {
    let e = xor();
    let before = e.to_string();
    let _ = e.reduce("x", true);
    let _ = e.reduce("y", false);
    assert_eq!(e.to_string(), before);
}

#[test]
fn test_reduce_all_reaches_literal_in_any_order() {
    let e = expr!(("a" & !"b") | ("c" & ("a" | "b")));
    let names = ["a", "b", "c"];

    for bits in 0u8..8 {
        let values: Vec<bool> = (0..3).map(|i| bits & (1 << i) != 0).collect();
        let forward = e.reduce_all(names.iter().copied().zip(values.iter().copied()));
        let backward = e.reduce_all(names.iter().copied().zip(values.iter().copied()).rev());

        let (a, b, c) = (values[0], values[1], values[2]);
        let expected = (a && !b) || (c && (a || b));
        assert_eq!(forward, Expr::literal(expected));
        assert_eq!(backward, Expr::literal(expected));
    }
}

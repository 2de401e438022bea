//! Integration tests for the `eval` command.

mod common;

use common::{check_output, check_stderr, check_stdout, seqkit};
use expect_test::expect;
use predicates::prelude::*;

// ============================================================================
// Results
// ============================================================================

#[test]
fn eval_map_with_callback() {
    check_stdout(&["eval", "map", "[1, 2, 3]", "@double"], expect!["[2, 4, 6]\n"]);
}

#[test]
fn eval_qualified_operation_name() {
    check_stdout(
        &["eval", "Array.findIndex", "[5, 12, 8, 130, 44]", "@gt10"],
        expect!["1\n"],
    );
}

#[test]
fn eval_find_without_match_is_undefined() {
    check_stdout(&["eval", "find", "[1, 3, 5]", "@is_even"], expect!["undefined\n"]);
}

#[test]
fn eval_reduce_with_seed() {
    check_stdout(&["eval", "reduce", "[1, 2, 3, 4]", "@sum", "10"], expect!["20\n"]);
}

#[test]
fn eval_includes_nan_but_index_of_does_not() {
    check_stdout(&["eval", "includes", "[1, 2, NaN]", "NaN"], expect!["true\n"]);
    check_stdout(&["eval", "indexOf", "[1, 2, NaN]", "NaN"], expect!["-1\n"]);
}

#[test]
fn eval_negative_arguments() {
    check_stdout(&["eval", "slice", "[1, 2, 3, 4, 5]", "-2"], expect!["[4, 5]\n"]);
    check_stdout(&["eval", "includes", "[1, 2, 3]", "1", "-2"], expect!["false\n"]);
}

#[test]
fn eval_join_renders_string() {
    check_stdout(
        &["eval", "join", r#"[1, null, "a"]"#, "'-'"],
        expect![[r#"
            "1--a"
        "#]],
    );
}

#[test]
fn eval_sort_orders() {
    check_stdout(&["eval", "sort", "[10, 9, 1, 2]"], expect!["[1, 10, 2, 9]\n"]);
    check_stdout(
        &["eval", "sort", "[10, 9, 1, 2]", "@ascending"],
        expect!["[1, 2, 9, 10]\n"],
    );
}

#[test]
fn eval_for_each_prints_visits() {
    check_stdout(
        &["eval", "forEach", r#"["a", "b"]"#, "@log"],
        expect![[r#"
            0: "a"
            1: "b"
            undefined
        "#]],
    );
}

#[test]
fn eval_flat_map_spreads_pairs() {
    check_stdout(&["eval", "flatMap", "[1, 2]", "@pair"], expect!["[1, 2, 2, 4]\n"]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn eval_empty_reduce_without_seed() {
    check_output(
        &["eval", "reduce", "[]", "@sum"],
        expect![""],
        expect![[r#"
            [E003] Error: Reduce of empty array with no initial value
              help: supply an initial value as the third argument
        "#]],
    );
}

#[test]
fn eval_null_receiver() {
    check_stderr(
        &["eval", "map", "null", "@double"],
        expect![[r#"
            [E001] Error: Array.map called on null
              help: pass an array as the first argument
        "#]],
    );
}

#[test]
fn eval_callback_not_a_function() {
    seqkit()
        .args(["eval", "filter", "[1, 2]", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[E002]"))
        .stderr(predicate::str::contains("number is not a function"));
}

#[test]
fn eval_callback_error_propagates() {
    check_stderr(
        &["eval", "map", r#"[1, "a"]"#, "@double"],
        expect![[r#"
            [E009] Error: uncaught error: @double: expected number, found string
        "#]],
    );
}

#[test]
fn eval_unknown_callback() {
    seqkit()
        .args(["eval", "map", "[1]", "@triple"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown function '@triple'"));
}

#[test]
fn eval_unknown_operation() {
    seqkit()
        .args(["eval", "shuffle", "[1]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown function 'Array.shuffle'"));
}

#[test]
fn eval_parse_error_points_at_literal() {
    seqkit()
        .args(["--no-color", "eval", "map", "[1, $]", "@double"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("[E008] Error: unexpected character '$'"))
        .stderr(predicate::str::contains("<input>:1:5"));
}

#[test]
fn eval_deeply_nested_literal_is_rejected() {
    let nested = format!("{}{}", "[".repeat(10_000), "]".repeat(10_000));
    seqkit()
        .args(["--no-color", "eval", "flat", nested.as_str()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "array nesting exceeds maximum of 500 levels",
        ));
}

#[test]
fn eval_too_many_arguments() {
    seqkit()
        .args(["eval", "map", "[1]", "@double", "null"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Array.map expects 1 to 2 argument(s), got 3"));
}

use std::path::Path;

use gumlang::Output;

fn run(source: &str) -> String {
    let mut output = Output::buffer();
    gumlang::run_source(source, &mut output).expect("program should run");
    output.captured().to_string()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(run("print 2 + 3 * 4"), "14\n");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(run("print (2 + 3) * 4"), "20\n");
}

#[test]
fn string_concatenation_through_compound_assignment() {
    let source = "a = \"foo\"\na += \"bar\"\nprint a";
    assert_eq!(run(source), "foobar\n");
}

#[test]
fn mixed_addition_renders_the_number() {
    assert_eq!(run("print \"a\" + 1"), "a1\n");
    assert_eq!(run("print 1.5 + \"x\""), "1.50x\n");
}

#[test]
fn whole_results_print_without_decimals() {
    assert_eq!(run("print 4 / 2"), "2\n");
    assert_eq!(run("print 5 / 2"), "2.50\n");
}

#[test]
fn if_runs_the_true_branch() {
    let source = "x = 1\nif x == 1 {\nprint \"yes\"\n} else {\nprint \"no\"\n}";
    assert_eq!(run(source), "yes\n");
}

#[test]
fn if_runs_the_else_branch() {
    let source = "x = 2\nif x == 1 {\nprint \"yes\"\n} else {\nprint \"no\"\n}";
    assert_eq!(run(source), "no\n");
}

#[test]
fn single_line_branches() {
    assert_eq!(run("if 1 < 2 print \"taken\""), "taken\n");
    assert_eq!(run("if 2 < 1 print \"skipped\""), "");
}

#[test]
fn single_line_if_else_with_blocks() {
    let source = "if 1 < 2 then { print \"yes\" } else { print \"no\" }";
    assert_eq!(run(source), "yes\n");

    let swapped = "if 2 < 1 then { print \"yes\" } else { print \"no\" }";
    assert_eq!(run(swapped), "no\n");
}

#[test]
fn then_keyword_is_optional() {
    assert_eq!(run("if 1 == 1 then print \"with then\""), "with then\n");
    assert_eq!(run("if 1 == 1 print \"without\""), "without\n");
}

#[test]
fn elseif_chain_takes_the_first_true_branch() {
    let source = "\
x = 3
if x == 1 {
print \"one\"
} else if x == 2 {
print \"two\"
} else if x == 3 {
print \"three\"
} else {
print \"other\"
}";
    assert_eq!(run(source), "three\n");
}

#[test]
fn later_true_branches_are_not_taken() {
    let source = "\
x = 1
if x == 1 {
print \"first\"
} else if x >= 0 {
print \"second\"
} else {
print \"third\"
}";
    assert_eq!(run(source), "first\n");
}

#[test]
fn blank_lines_before_else_are_allowed() {
    let source = "if 1 == 2 {\nprint \"a\"\n}\n\nelse {\nprint \"b\"\n}";
    assert_eq!(run(source), "b\n");
}

#[test]
fn string_equality_comparison() {
    let source = "name = \"gum\"\nif name == \"gum\" print \"match\"";
    assert_eq!(run(source), "match\n");
}

#[test]
fn for_repeats_a_block() {
    assert_eq!(run("for 3 i {\nprint \"hi\"\n}"), "hi\nhi\nhi\n");
}

#[test]
fn for_repeats_a_single_statement() {
    assert_eq!(run("for 2 print \"x\""), "x\nx\n");
}

#[test]
fn loops_nest() {
    assert_eq!(run("for 2 {\nfor 2 {\nprint \"*\"\n}\n}"), "*\n*\n*\n*\n");
}

#[test]
fn loop_variable_reads_as_zero() {
    assert_eq!(run("for 2 i { print i }"), "0\n0\n");
}

#[test]
fn loop_body_sees_updated_variables() {
    let source = "total = 0\nfor 4 {\ntotal += 2\n}\nprint total";
    assert_eq!(run(source), "8\n");
}

#[test]
fn undefined_variable_prints_zero_and_continues() {
    assert_eq!(run("print missing\nprint \"still here\""), "0\nstill here\n");
}

#[test]
fn division_by_zero_leaves_the_target_alone() {
    assert_eq!(run("x = 5\nx /= 0\nprint x"), "5\n");
}

#[test]
fn type_errors_do_not_stop_the_program() {
    let source = "x = \"a\" * 2\nprint x\nprint \"done\"";
    assert_eq!(run(source), "0\ndone\n");
}

#[test]
fn bare_declarations_assign() {
    assert_eq!(run("count 5\nprint count"), "5\n");
    assert_eq!(run("name \"gum\"\nprint name"), "gum\n");
}

#[test]
fn increment_and_decrement() {
    assert_eq!(run("n = 1\nn ++\nn ++\nn --\nprint n"), "2\n");
}

#[test]
fn comments_are_ignored() {
    let source = "\
// a whole line of commentary
x = 1 // and a trailing note
/* a block
spanning lines */ print x";
    assert_eq!(run(source), "1\n");
}

#[test]
fn unknown_characters_do_not_stop_the_program() {
    assert_eq!(run("@\nprint \"ok\""), "ok\n");
}

#[test]
fn random_statement_with_equal_bounds() {
    assert_eq!(run("random 3 3"), "3\n");
}

#[test]
fn random_draw_stays_in_range() {
    let printed = run("print random 1 6");
    let drawn: i64 = printed.trim().parse().expect("a whole number");
    assert!((1..=6).contains(&drawn), "drew {}", drawn);
}

#[test]
fn random_composes_with_arithmetic() {
    assert_eq!(run("print random 2 2 + 10"), "12\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(run(""), "");
    assert_eq!(run("\n\n\n"), "");
}

#[test]
fn example_script_runs_end_to_end() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/example.gum");
    let mut output = Output::buffer();
    gumlang::run_file(&path, &mut output).expect("example should run");
    assert_eq!(
        output.captured(),
        "hello from gum\n10\nbig\n2.50\n3\n"
    );
}

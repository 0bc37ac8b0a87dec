//! # Campus CLI Calc Integration Tests
//!
//! File: cli/tests/calc.rs
//!
//! ## Overview
//!
//! One-shot `campus calc` subcommands and a short scripted menu session.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_calc_add() {
    Sandbox::new()
        .cmd()
        .args(["calc", "add", "2", "3.5"])
        .assert()
        .success()
        .stdout("Result: 2.0 + 3.5 = 5.5\n");
}

#[test]
fn test_calc_negative_operand() {
    Sandbox::new()
        .cmd()
        .args(["calc", "div", "10", "-4"])
        .assert()
        .success()
        .stdout("Result: 10.0 ÷ -4.0 = -2.5\n");
}

#[test]
fn test_calc_division_by_zero_fails() {
    Sandbox::new()
        .cmd()
        .args(["calc", "div", "1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Math error: Cannot divide by zero!"));
}

#[test]
fn test_calc_list_operations() {
    Sandbox::new()
        .cmd()
        .args(["calc", "avg", "1", "2", "3", "4"])
        .assert()
        .success()
        .stdout("Numbers: [1.0, 2.0, 3.0, 4.0]\nAverage: 2.5\n");
}

#[test]
fn test_calc_factorial_and_prime() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["calc", "factorial", "10"])
        .assert()
        .success()
        .stdout("Result: 10! = 3628800\n");
    sandbox
        .cmd()
        .args(["calc", "prime", "7919"])
        .assert()
        .success()
        .stdout("7919 is a prime number!\n");
}

#[test]
fn test_calc_menu_session() {
    Sandbox::new()
        .cmd()
        .arg("calc")
        .write_stdin("6\n81\n\n13\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("BASIC MATH OPERATIONS CALCULATOR")
                .and(predicate::str::contains("Result: √81.0 = 9.0"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn test_calc_menu_eof_fails() {
    Sandbox::new()
        .cmd()
        .args(["calc", "menu"])
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input ended unexpectedly"));
}

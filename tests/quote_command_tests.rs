//! Quote command integration tests
//!
//! Exercise the pricing pipeline end to end on the real binary: selection
//! arguments, headcount scaling, the details table, and name lookup errors.

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_quote_end_to_end_scenario() {
    let ws = TestWorkspace::new();
    ws.write_sample_catalog("party.yaml");
    ws.confplan()
        .args([
            "quote",
            "--catalog",
            "party.yaml",
            "--venue",
            "Main Hall=2",
            "--av",
            "Projector",
            "--meal",
            "Lunch",
            "--people",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("attendees: 4"))
        .stdout(predicate::str::contains("$600"))
        .stdout(predicate::str::contains("$100"))
        .stdout(predicate::str::contains("$800"));
}

#[test]
fn test_quote_details_table() {
    let ws = TestWorkspace::new();
    ws.write_sample_catalog("party.yaml");
    ws.confplan()
        .args([
            "quote",
            "--catalog",
            "party.yaml",
            "--venue",
            "Main Hall=2",
            "--meal",
            "Lunch",
            "--people",
            "4",
            "--details",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unit Cost"))
        .stdout(predicate::str::contains("Subtotal"))
        .stdout(predicate::str::contains("Main Hall"))
        .stdout(predicate::str::contains("For 4 people"))
        .stdout(predicate::str::contains("$25"));
}

#[test]
fn test_quote_empty_selection_prints_empty_message() {
    let ws = TestWorkspace::new();
    ws.confplan()
        .args(["quote", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items selected yet."))
        .stdout(predicate::str::contains("$0"));
}

#[test]
fn test_quote_bare_venue_name_means_one_unit() {
    let ws = TestWorkspace::new();
    ws.write_sample_catalog("party.yaml");
    ws.confplan()
        .args(["quote", "--catalog", "party.yaml", "--venue", "Main Hall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$300"));
}

#[test]
fn test_quote_names_fall_back_to_case_insensitive() {
    let ws = TestWorkspace::new();
    ws.write_sample_catalog("party.yaml");
    ws.confplan()
        .args(["quote", "--catalog", "party.yaml", "--av", "projector"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$100"));
}

#[test]
fn test_quote_zero_people_is_treated_as_one() {
    let ws = TestWorkspace::new();
    ws.write_sample_catalog("party.yaml");
    ws.confplan()
        .args([
            "quote",
            "--catalog",
            "party.yaml",
            "--meal",
            "Lunch",
            "--people",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("attendees: 1"))
        .stdout(predicate::str::contains("$25"));
}

#[test]
fn test_quote_seed_catalog_by_default() {
    let ws = TestWorkspace::new();
    ws.confplan()
        .args(["quote", "--venue", "Auditorium Hall (Capacity:200)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5,500"));
}

#[test]
fn test_quote_verbose_names_catalog_source() {
    let ws = TestWorkspace::new();
    ws.confplan()
        .args(["quote", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using built-in catalog"));
}

#[test]
fn test_quote_unknown_item_fails() {
    let ws = TestWorkspace::new();
    ws.write_sample_catalog("party.yaml");
    ws.confplan()
        .args(["quote", "--catalog", "party.yaml", "--venue", "Ballroom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No venue item named 'Ballroom'"));
}

#[test]
fn test_quote_unknown_meal_names_its_category() {
    let ws = TestWorkspace::new();
    ws.confplan()
        .args(["quote", "--meal", "Brunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No meals item named 'Brunch'"));
}

#[test]
fn test_quote_malformed_selection_spec_fails() {
    let ws = TestWorkspace::new();
    ws.confplan()
        .args(["quote", "--venue", "Hall=two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid selection 'Hall=two'"));
}

#[test]
fn test_quote_maximum_venue_quantity() {
    let ws = TestWorkspace::new();
    ws.write_sample_catalog("party.yaml");
    ws.confplan()
        .args([
            "quote",
            "--catalog",
            "party.yaml",
            "--venue",
            "Main Hall=4294967295",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,288,490,188,500"));
}

#[test]
fn test_quote_repeated_venue_quantities_add_up() {
    let ws = TestWorkspace::new();
    ws.write_sample_catalog("party.yaml");
    ws.confplan()
        .args([
            "quote",
            "--catalog",
            "party.yaml",
            "--venue",
            "Main Hall=2",
            "--venue",
            "Main Hall",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$900"));
}

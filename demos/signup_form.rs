//! Signup form example - one validator, many submissions
//!
//! Run with `cargo run --example signup_form --features tracing` to see the
//! engine's debug events.

use fieldcheck::prelude::*;
use serde_json::{json, Value};

fn signup_validator() -> Result<Validator, RuleError> {
    let min_password = from_fn(
        |v| v.as_str().is_some_and(|s| s.chars().count() >= 8),
        "Password must be at least 8 characters",
    );

    let mut validator = Validator::new();
    validator
        .add("id", true, predicates![is_uuid()])?
        .add("email", true, predicates![is_string(), is_not_empty_string()])?
        .add("password", true, predicates![is_string(), min_password])?
        .add("homepage", false, predicates![is_url()])?
        .add(
            "birthday",
            false,
            predicates![
                is_date_with_format("%Y-%m-%d"),
                is_date_before("2010-01-01").with_message("Too young to sign up"),
            ],
        )?
        .add("interests", false, predicates![all(is_not_empty_string())])?;
    Ok(validator)
}

fn report(label: &str, validator: &Validator, form: &Value) {
    match validator.validate(form) {
        ValidationOutcome::Valid => println!("{label}: ok"),
        ValidationOutcome::Invalid(failure) => println!("{label}: rejected ({failure})"),
    }

    let every = validator.validate_all(form);
    if every.len() > 1 {
        for failure in every {
            println!("    - {failure}");
        }
    }
}

fn main() -> Result<(), RuleError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let validator = signup_validator()?;

    println!("Signup form validation");
    println!("======================\n");

    report(
        "complete form",
        &validator,
        &json!({
            "id": "3f6c1d2e-8a4b-4c5d-9e6f-7a8b9c0d1e2f",
            "email": "dexter@example.com",
            "password": "correct horse",
            "homepage": "https://example.com",
            "birthday": "1985-04-12",
            "interests": ["boats", "forensics"],
        }),
    );

    report(
        "missing id",
        &validator,
        &json!({"email": "dexter@example.com", "password": "correct horse"}),
    );

    report(
        "several problems",
        &validator,
        &json!({
            "id": "not-a-uuid",
            "email": "",
            "password": "short",
            "birthday": "2015-10-26",
            "interests": ["boats", ""],
        }),
    );

    Ok(())
}

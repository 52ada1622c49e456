//! Validation schema for create-item requests
//!
//! Every rule is checked independently and all violations are collected,
//! so a single response tells the caller everything that is wrong.

use catalog_core::{FieldPath, Location, ValidationFailure};
use serde_json::{Map, Value};

use crate::types::NewItem;

/// Upper bound on `name`, counted in characters
pub const MAX_NAME_CHARS: usize = 50;

const NAME: &str = "name";
const PRICE: &str = "price";

/// Validate a raw JSON body into a typed [`NewItem`]
///
/// Violations are reported as `name`, then `price`, then each unexpected
/// field in key order.
pub fn validate_new_item(raw: &Value) -> Result<NewItem, ValidationFailure> {
    let Value::Object(fields) = raw else {
        return Err(ValidationFailure::single(
            FieldPath::request(Location::Body),
            "must be a JSON object",
        ));
    };

    let mut failure = ValidationFailure::new();

    let name = record(&mut failure, NAME, name_field(fields));
    let price = record(&mut failure, PRICE, price_field(fields));

    for key in fields.keys().filter(|key| *key != NAME && *key != PRICE) {
        failure.push(FieldPath::body(key.as_str()), "unexpected field");
    }

    match (name, price) {
        (Some(name), Some(price)) => failure.finish(|| NewItem { name, price }),
        _ => Err(failure),
    }
}

/// Validate already-typed values, e.g. seed items from configuration
pub fn new_item(name: &str, price: f64) -> Result<NewItem, ValidationFailure> {
    let mut failure = ValidationFailure::new();

    let name = record(&mut failure, NAME, check_name(name).map(|()| name.to_owned()));
    let price = record(&mut failure, PRICE, check_price(price).map(|()| price));

    match (name, price) {
        (Some(name), Some(price)) => failure.finish(|| NewItem { name, price }),
        _ => Err(failure),
    }
}

fn record<T>(failure: &mut ValidationFailure, field: &str, result: Result<T, String>) -> Option<T> {
    result.map_err(|reason| failure.push(FieldPath::body(field), reason)).ok()
}

fn name_field(fields: &Map<String, Value>) -> Result<String, String> {
    match fields.get(NAME) {
        None => Err("required".to_owned()),
        Some(Value::String(name)) => check_name(name).map(|()| name.clone()),
        Some(_) => Err("must be a string".to_owned()),
    }
}

fn check_name(name: &str) -> Result<(), String> {
    let chars = name.chars().count();
    if chars == 0 {
        Err("must not be empty".to_owned())
    } else if chars > MAX_NAME_CHARS {
        Err(format!("must be at most {MAX_NAME_CHARS} characters"))
    } else {
        Ok(())
    }
}

fn price_field(fields: &Map<String, Value>) -> Result<f64, String> {
    let price = match fields.get(PRICE) {
        None => return Err("required".to_owned()),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let price = price
        .filter(|p| p.is_finite())
        .ok_or_else(|| "must be a number".to_owned())?;

    check_price(price).map(|()| price)
}

fn check_price(price: f64) -> Result<(), String> {
    if !price.is_finite() {
        Err("must be a number".to_owned())
    } else if price <= 0.0 {
        Err("must be greater than 0".to_owned())
    } else {
        Ok(())
    }
}

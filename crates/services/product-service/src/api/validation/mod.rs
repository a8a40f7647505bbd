//! Declarative request validation.
//!
//! Each route carries a static table of [`FieldRules`]: a field name, where
//! to read it from, and an ordered list of checks with their messages. The
//! table is evaluated in full so that every violation is reported together.

mod rules;

use std::collections::HashMap;

use serde_json::Value;

use common::FieldError;
use domain::parse_price;

pub use rules::{CREATE_PRODUCT, PRODUCT_ID, UPDATE_PRODUCT};

/// Where a field value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Body,
    Path,
}

/// A single predicate applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Present, not null, and not a blank string
    NotEmpty,
    /// A JSON string
    Text,
    /// A JSON number or numeric text
    Numeric,
    /// Numeric and strictly greater than zero
    Positive,
    /// A JSON boolean
    Boolean,
    /// A 32-bit integer, either as a JSON number or as path text
    Integer,
}

/// A check paired with the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// Ordered rules for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub source: Source,
    pub rules: &'static [Rule],
}

/// The full rule table attached to a route.
#[derive(Debug, Clone, Copy)]
pub struct RouteRules(pub &'static [FieldRules]);

/// A field value as seen by the checks.
#[derive(Debug, Clone, Copy)]
enum Input<'a> {
    Missing,
    Json(&'a Value),
    Text(&'a str),
}

impl Input<'_> {
    fn as_number(self) -> Option<f64> {
        match self {
            Input::Json(Value::String(s)) => parse_price(s),
            Input::Text(s) => parse_price(s),
            Input::Json(value) => value.as_f64(),
            Input::Missing => None,
        }
    }
}

impl Check {
    fn passes(self, input: Input<'_>) -> bool {
        match (self, input) {
            (_, Input::Missing) => false,
            (Check::NotEmpty, Input::Json(Value::Null)) => false,
            (Check::NotEmpty, Input::Json(Value::String(s))) => !s.trim().is_empty(),
            (Check::NotEmpty, Input::Json(_)) => true,
            (Check::NotEmpty, Input::Text(s)) => !s.trim().is_empty(),
            (Check::Text, Input::Json(value)) => value.is_string(),
            (Check::Text, Input::Text(_)) => true,
            (Check::Numeric, input) => input.as_number().is_some(),
            (Check::Positive, input) => input.as_number().is_some_and(|n| n > 0.0),
            (Check::Boolean, Input::Json(value)) => value.is_boolean(),
            (Check::Boolean, Input::Text(s)) => matches!(s, "true" | "false"),
            (Check::Integer, Input::Json(value)) => value
                .as_i64()
                .is_some_and(|n| i32::try_from(n).is_ok()),
            (Check::Integer, Input::Text(s)) => s.parse::<i32>().is_ok(),
        }
    }
}

impl RouteRules {
    /// Whether any rule reads the request body.
    pub fn reads_body(&self) -> bool {
        self.0.iter().any(|field| field.source == Source::Body)
    }

    /// Evaluate every rule and collect all failures in declaration order.
    pub fn evaluate(&self, params: &HashMap<String, String>, body: &Value) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for field in self.0 {
            let input = match field.source {
                Source::Path => params
                    .get(field.field)
                    .map_or(Input::Missing, |value| Input::Text(value)),
                Source::Body => body.get(field.field).map_or(Input::Missing, Input::Json),
            };

            errors.extend(
                field
                    .rules
                    .iter()
                    .filter(|rule| !rule.check.passes(input))
                    .map(|rule| FieldError::new(field.field, rule.message)),
            );
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(id: &str) -> HashMap<String, String> {
        HashMap::from([("id".to_string(), id.to_string())])
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_create_body_passes() {
        let errors = CREATE_PRODUCT.evaluate(&HashMap::new(), &json!({"name": "Monitor", "price": 500}));
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_name_is_reported() {
        let errors = CREATE_PRODUCT.evaluate(&HashMap::new(), &json!({"price": 500}));
        assert!(fields(&errors).contains(&"name"));
        assert!(!fields(&errors).contains(&"price"));
    }

    #[test]
    fn non_positive_price_is_reported() {
        for price in [json!(0), json!(-10), json!(-0.5)] {
            let errors =
                CREATE_PRODUCT.evaluate(&HashMap::new(), &json!({"name": "Monitor", "price": price}));
            assert_eq!(fields(&errors), vec!["price"]);
            assert_eq!(errors[0].message, domain::MSG_PRICE_NOT_POSITIVE);
        }
    }

    #[test]
    fn numeric_string_price_passes() {
        let errors =
            CREATE_PRODUCT.evaluate(&HashMap::new(), &json!({"name": "Monitor", "price": "500"}));
        assert!(errors.is_empty());

        let errors =
            CREATE_PRODUCT.evaluate(&HashMap::new(), &json!({"name": "Monitor", "price": "-2"}));
        assert_eq!(errors[0].message, domain::MSG_PRICE_NOT_POSITIVE);
    }

    #[test]
    fn non_numeric_price_reports_each_failed_rule() {
        let errors =
            CREATE_PRODUCT.evaluate(&HashMap::new(), &json!({"name": "Monitor", "price": "cheap"}));
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![domain::MSG_PRICE_NOT_NUMERIC, domain::MSG_PRICE_NOT_POSITIVE]
        );
    }

    #[test]
    fn all_violations_are_collected() {
        let errors = UPDATE_PRODUCT.evaluate(&path("abc"), &json!({"name": "", "price": -1}));
        let reported = fields(&errors);
        assert!(reported.contains(&"id"));
        assert!(reported.contains(&"name"));
        assert!(reported.contains(&"price"));
        assert!(reported.contains(&"availability"));
    }

    #[test]
    fn blank_name_is_empty() {
        let errors = UPDATE_PRODUCT.evaluate(
            &path("1"),
            &json!({"name": "   ", "price": 10, "availability": true}),
        );
        assert_eq!(fields(&errors), vec!["name"]);
        assert_eq!(errors[0].message, domain::MSG_NAME_EMPTY);
    }

    #[test]
    fn non_string_name_is_rejected() {
        let errors = CREATE_PRODUCT.evaluate(&HashMap::new(), &json!({"name": 42, "price": 1}));
        assert_eq!(fields(&errors), vec!["name"]);
        assert_eq!(errors[0].message, domain::MSG_NAME_NOT_TEXT);
    }

    #[test]
    fn availability_must_be_boolean() {
        let errors = UPDATE_PRODUCT.evaluate(
            &path("1"),
            &json!({"name": "Monitor", "price": 10, "availability": "yes"}),
        );
        assert_eq!(fields(&errors), vec!["availability"]);
    }

    #[test]
    fn id_must_be_an_integer() {
        for bad in ["abc", "1.5", "", "99999999999"] {
            let errors = PRODUCT_ID.evaluate(&path(bad), &Value::Null);
            assert_eq!(fields(&errors), vec!["id"], "id {bad:?} should be rejected");
        }
        assert!(PRODUCT_ID.evaluate(&path("42"), &Value::Null).is_empty());
    }

    #[test]
    fn only_body_rules_read_the_body() {
        assert!(CREATE_PRODUCT.reads_body());
        assert!(UPDATE_PRODUCT.reads_body());
        assert!(!PRODUCT_ID.reads_body());
    }
}

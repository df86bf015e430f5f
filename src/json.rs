//! Typed field accessors over decoded push messages.
//!
//! [`JsonWrapper`] borrows a `serde_json::Value` object and exposes the
//! `get_*` accessors the model parsers are written against. Required
//! accessors fail with [`HuobiError::MissingField`]; the `_or_default`
//! variants treat an absent or `null` field as the default.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::Result;
use crate::error::HuobiError;

/// Parses message text into a JSON value suitable for [`JsonWrapper::new`].
///
/// # Errors
///
/// Returns [`HuobiError::MalformedMessage`] if the text is not valid JSON.
pub fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| HuobiError::MalformedMessage(e.to_string()))
}

/// Borrowed view over a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct JsonWrapper<'a> {
    value: &'a Value,
}

impl<'a> JsonWrapper<'a> {
    /// Wraps a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`HuobiError::MalformedMessage`] if the value is not an object.
    pub fn new(value: &'a Value) -> Result<Self> {
        if value.is_object() {
            Ok(Self { value })
        } else {
            Err(HuobiError::MalformedMessage(format!(
                "expected a json object, got {value}"
            )))
        }
    }

    /// Returns `true` if the field exists and is not `null`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Reads a required integer field.
    ///
    /// # Errors
    ///
    /// Fails if the field is missing or not an integer.
    pub fn get_int(&self, name: &str) -> Result<i64> {
        let value = self.required(name)?;
        value
            .as_i64()
            .ok_or_else(|| invalid(name, format!("expected an integer, got {value}")))
    }

    /// Reads an optional integer field.
    ///
    /// # Errors
    ///
    /// Fails if the field is present but not an integer.
    pub fn get_int_or_default(&self, name: &str, default: i64) -> Result<i64> {
        match self.field(name) {
            Some(_) => self.get_int(name),
            None => Ok(default),
        }
    }

    /// Reads a required field as text.
    ///
    /// Numbers and booleans are rendered as their JSON text.
    ///
    /// # Errors
    ///
    /// Fails if the field is missing or is an object/array.
    pub fn get_string(&self, name: &str) -> Result<String> {
        match self.required(name)? {
            Value::String(s) => Ok(s.clone()),
            scalar @ (Value::Number(_) | Value::Bool(_)) => Ok(scalar.to_string()),
            other => Err(invalid(name, format!("expected a string, got {other}"))),
        }
    }

    /// Reads an optional text field.
    ///
    /// # Errors
    ///
    /// Fails if the field is present but is an object/array.
    pub fn get_string_or_default(&self, name: &str, default: &str) -> Result<String> {
        match self.field(name) {
            Some(_) => self.get_string(name),
            None => Ok(default.to_string()),
        }
    }

    /// Reads a required decimal field sent either as a string or a number.
    ///
    /// # Errors
    ///
    /// Fails if the field is missing or cannot be parsed as a decimal.
    pub fn get_decimal(&self, name: &str) -> Result<Decimal> {
        let value = self.required(name)?;
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => return Err(invalid(name, format!("expected a decimal, got {other}"))),
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|e| invalid(name, e.to_string()))
    }

    /// Reads an optional decimal field.
    ///
    /// # Errors
    ///
    /// Fails if the field is present but cannot be parsed as a decimal.
    pub fn get_decimal_or_default(&self, name: &str, default: Decimal) -> Result<Decimal> {
        match self.field(name) {
            Some(_) => self.get_decimal(name),
            None => Ok(default),
        }
    }

    /// Reads a required nested object.
    ///
    /// # Errors
    ///
    /// Fails if the field is missing or not an object.
    pub fn get_object(&self, name: &str) -> Result<JsonWrapper<'a>> {
        let value = self.required(name)?;
        if value.is_object() {
            Ok(JsonWrapper { value })
        } else {
            Err(invalid(name, format!("expected an object, got {value}")))
        }
    }

    /// Reads a required array of objects, preserving element order.
    ///
    /// # Errors
    ///
    /// Fails if the field is missing, not an array, or holds a non-object.
    pub fn get_array(&self, name: &str) -> Result<Vec<JsonWrapper<'a>>> {
        let value = self.required(name)?;
        let items = value
            .as_array()
            .ok_or_else(|| invalid(name, format!("expected an array, got {value}")))?;

        items
            .iter()
            .map(|item| {
                if item.is_object() {
                    Ok(JsonWrapper { value: item })
                } else {
                    Err(invalid(name, format!("expected array of objects, got {item}")))
                }
            })
            .collect()
    }

    fn field(&self, name: &str) -> Option<&'a Value> {
        self.value.get(name).filter(|v| !v.is_null())
    }

    fn required(&self, name: &str) -> Result<&'a Value> {
        self.field(name)
            .ok_or_else(|| HuobiError::MissingField(name.to_string()))
    }
}

fn invalid(field: &str, reason: String) -> HuobiError {
    HuobiError::InvalidField {
        field: field.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn rejects_non_object_root() {
        let value = json!([1, 2, 3]);
        assert!(matches!(
            JsonWrapper::new(&value),
            Err(HuobiError::MalformedMessage(_))
        ));
    }

    #[test]
    fn parse_json_reports_malformed_text() {
        assert!(matches!(
            parse_json("{not json"),
            Err(HuobiError::MalformedMessage(_))
        ));
    }

    #[test]
    fn get_int_reads_and_reports_missing() {
        let value = json!({"ts": 1569307523736_i64, "name": "x"});
        let json = JsonWrapper::new(&value).unwrap();

        assert_eq!(json.get_int("ts").unwrap(), 1569307523736);
        assert!(matches!(
            json.get_int("err-code"),
            Err(HuobiError::MissingField(f)) if f == "err-code"
        ));
        assert!(matches!(
            json.get_int("name"),
            Err(HuobiError::InvalidField { .. })
        ));
    }

    #[test]
    fn defaults_apply_to_absent_and_null_fields() {
        let value = json!({"finished-at": null});
        let json = JsonWrapper::new(&value).unwrap();

        assert_eq!(json.get_int_or_default("finished-at", 0).unwrap(), 0);
        assert_eq!(json.get_int_or_default("canceled-at", 7).unwrap(), 7);
        assert_eq!(json.get_string_or_default("symbol", "").unwrap(), "");
        assert!(!json.contains("finished-at"));
    }

    #[test]
    fn get_string_renders_scalars() {
        let value = json!({"cid": true, "n": 42, "s": "abc", "o": {}});
        let json = JsonWrapper::new(&value).unwrap();

        assert_eq!(json.get_string("cid").unwrap(), "true");
        assert_eq!(json.get_string("n").unwrap(), "42");
        assert_eq!(json.get_string("s").unwrap(), "abc");
        assert!(json.get_string("o").is_err());
    }

    #[test]
    fn get_decimal_accepts_strings_and_numbers() {
        let value = json!({
            "amount": "10.000000000000000000",
            "price": 4.0176,
            "bad": "ten",
        });
        let json = JsonWrapper::new(&value).unwrap();

        assert_eq!(json.get_decimal("amount").unwrap(), dec!(10));
        assert_eq!(json.get_decimal("price").unwrap(), dec!(4.0176));
        assert!(json.get_decimal("bad").is_err());
        assert_eq!(
            json.get_decimal_or_default("stop-price", Decimal::ZERO).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn get_array_preserves_order_and_rejects_scalars() {
        let value = json!({
            "data": [{"id": 1}, {"id": 2}, {"id": 3}],
            "nums": [1, 2],
        });
        let json = JsonWrapper::new(&value).unwrap();

        let ids: Vec<i64> = json
            .get_array("data")
            .unwrap()
            .iter()
            .map(|item| item.get_int("id").unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(json.get_array("nums").is_err());
    }

    #[test]
    fn get_object_requires_object() {
        let value = json!({"data": {"id": 5}, "topic": "orders.detail"});
        let json = JsonWrapper::new(&value).unwrap();

        assert_eq!(json.get_object("data").unwrap().get_int("id").unwrap(), 5);
        assert!(json.get_object("topic").is_err());
    }
}

// src/models/price.rs
use rust_decimal::Decimal;
use serde_json::Value;

use super::error::DataValidationError;
use super::json_type_name;

/// Largest magnitude a `NUMERIC(14, 2)` column can hold, exclusive.
const PRICE_LIMIT: i64 = 1_000_000_000_000;
const PRICE_MAX_SCALE: u32 = 2;
/// Most fractional digits a `Decimal` can carry.
const DECIMAL_MAX_SCALE: u32 = 28;

/// Anything a caller may hand in as a price: a decimal, its string form, or a JSON value.
///
/// `12.50`, `"12.50"` and `"12.5"` all resolve to the same `Decimal`, so
/// lookups never depend on the representation the caller happened to use.
pub trait IntoPrice {
    fn into_price(self) -> Result<Decimal, DataValidationError>;
}

impl IntoPrice for Decimal {
    fn into_price(self) -> Result<Decimal, DataValidationError> {
        Ok(self)
    }
}

impl IntoPrice for &Decimal {
    fn into_price(self) -> Result<Decimal, DataValidationError> {
        Ok(*self)
    }
}

impl IntoPrice for &str {
    fn into_price(self) -> Result<Decimal, DataValidationError> {
        let text = self.trim();
        parse_exact(text).map_err(|reason| {
            DataValidationError::invalid_value("price", format!("'{text}' is not a decimal number ({reason})"))
        })
    }
}

/// Parses plain or scientific notation without rounding; digits that do not
/// fit a `Decimal` are an error.
fn parse_exact(text: &str) -> Result<Decimal, String> {
    let Some((base, exponent)) = text.split_once(['e', 'E']) else {
        return Decimal::from_str_exact(text).map_err(|e| e.to_string());
    };

    let mut value = Decimal::from_str_exact(base).map_err(|e| e.to_string())?;
    let exponent: i32 = exponent
        .parse()
        .map_err(|_| format!("bad exponent '{exponent}'"))?;

    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if exponent > DECIMAL_MAX_SCALE as i32 {
        return Err("value overflows".to_string());
    }
    if exponent >= 0 {
        for _ in 0..exponent {
            value = value
                .checked_mul(Decimal::TEN)
                .ok_or_else(|| "value overflows".to_string())?;
        }
    } else {
        let scale = value.scale().saturating_add(exponent.unsigned_abs());
        if scale > DECIMAL_MAX_SCALE {
            return Err("too many decimal places".to_string());
        }
        value.set_scale(scale).map_err(|e| e.to_string())?;
    }
    Ok(value)
}

impl IntoPrice for &String {
    fn into_price(self) -> Result<Decimal, DataValidationError> {
        self.as_str().into_price()
    }
}

impl IntoPrice for String {
    fn into_price(self) -> Result<Decimal, DataValidationError> {
        self.as_str().into_price()
    }
}

impl IntoPrice for &Value {
    fn into_price(self) -> Result<Decimal, DataValidationError> {
        match self {
            // With `arbitrary_precision` a Number keeps the digits the client sent.
            Value::Number(n) => n.to_string().into_price(),
            Value::String(s) => s.as_str().into_price(),
            Value::Null => Err(DataValidationError::MissingField("price")),
            other => Err(DataValidationError::InvalidType {
                field: "price",
                expected: "number or numeric string",
                found: json_type_name(other),
            }),
        }
    }
}

/// Checks a price fits the storage column without rounding.
pub fn check_price(price: Decimal) -> Result<Decimal, DataValidationError> {
    if price.normalize().scale() > PRICE_MAX_SCALE {
        return Err(DataValidationError::invalid_value(
            "price",
            format!("{price} has more than {PRICE_MAX_SCALE} decimal places"),
        ));
    }
    if price.abs() >= Decimal::from(PRICE_LIMIT) {
        return Err(DataValidationError::invalid_value(
            "price",
            format!("{price} is out of range"),
        ));
    }
    Ok(price)
}

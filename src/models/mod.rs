pub mod category;
pub mod error;
pub mod price;
pub mod product;

pub use category::Category;
pub use error::{DataValidationError, ModelError};
pub use price::IntoPrice;
pub use product::Product;

use serde_json::Value;

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Single-attempt type conversion with fallback
//!
//! [`FromValue`] performs exactly one conversion attempt from a [`Value`];
//! [`safe_cast`] turns recognized failures into the caller's default.

use tracing::{debug, trace};

use crate::error::{CastError, Fault};
use crate::key::Key;
use crate::kind::ValueKind;
use crate::value::{Object, Value};

/// Conversion target for [`safe_cast`]
pub trait FromValue: Sized {
    /// Attempt the conversion once.
    ///
    /// Return [`CastError::Conversion`] or [`CastError::Incompatible`] for
    /// ordinary failures; [`CastError::Fault`] is reserved for defects and
    /// is propagated by [`safe_cast`].
    fn from_value(value: &Value) -> Result<Self, CastError>;
}

/// Convert `value` to `T`, falling back to `default`.
///
/// An absent value or a [`Value::Null`] always yields `default`, whatever
/// the target.
///
/// ```
/// use ferrule_value::{safe_cast, Value};
///
/// assert_eq!(safe_cast::<i64>(Some(&Value::from("123")), None)?, Some(123));
/// assert_eq!(safe_cast::<i64>(Some(&Value::from("abc")), None)?, None);
/// assert_eq!(safe_cast(Some(&Value::from("abc")), Some(0_i64))?, Some(0));
/// assert_eq!(safe_cast::<i64>(None, None)?, None);
/// assert_eq!(safe_cast::<f64>(Some(&Value::from("3.14")), None)?, Some(3.14));
/// # Ok::<(), ferrule_value::Fault>(())
/// ```
pub fn safe_cast<T: FromValue>(
    value: Option<&Value>,
    default: Option<T>,
) -> Result<Option<T>, Fault> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(default);
    };
    match T::from_value(value) {
        Ok(converted) => Ok(Some(converted)),
        Err(CastError::Fault(fault)) => {
            debug!(from = %value.kind(), error = %fault, "conversion fault");
            Err(fault)
        }
        Err(error) => {
            trace!(reason = %error, "conversion fell back to default");
            Ok(default)
        }
    }
}

impl Value {
    /// Method form of [`safe_cast`] on a present value
    pub fn cast<T: FromValue>(&self, default: Option<T>) -> Result<Option<T>, Fault> {
        safe_cast(Some(self), default)
    }
}

// ==================== Numbers ====================

fn parse_integer(value: &Value, target: &'static str) -> Result<i64, CastError> {
    match value {
        Value::Integer(i) => Ok(*i),
        Value::Boolean(b) => Ok(i64::from(*b)),
        Value::Float(f) => {
            if !f.is_finite() {
                return Err(CastError::conversion(ValueKind::Float, target, "not a finite number"));
            }
            let truncated = f.trunc();
            if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
                return Err(CastError::conversion(ValueKind::Float, target, "out of range"));
            }
            Ok(truncated as i64)
        }
        Value::Text(t) => t
            .trim()
            .parse::<i64>()
            .map_err(|e| CastError::conversion(ValueKind::Text, target, e.to_string())),
        other => Err(CastError::incompatible(other.kind(), target)),
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        parse_integer(value, "i64")
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self, CastError> {
                    let wide = parse_integer(value, stringify!($ty))?;
                    <$ty>::try_from(wide).map_err(|_| {
                        CastError::conversion(value.kind(), stringify!($ty), "out of range")
                    })
                }
            }
        )*
    };
}

impl_from_value_int!(i32, u32, u64, usize);

fn parse_float(value: &Value, target: &'static str) -> Result<f64, CastError> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Text(t) => t
            .trim()
            .parse::<f64>()
            .map_err(|e| CastError::conversion(ValueKind::Text, target, e.to_string())),
        other => Err(CastError::incompatible(other.kind(), target)),
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        parse_float(value, "f64")
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        parse_float(value, "f32").map(|f| f as f32)
    }
}

// ==================== Text, booleans, keys ====================

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Text(t) => Ok(t.clone()),
            Value::Null | Value::Custom(_) => Err(CastError::incompatible(value.kind(), "String")),
            other => Ok(other.to_string()),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        Ok(value.is_truthy())
    }
}

impl FromValue for Key {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Text(t) => Ok(Key::Text(t.clone())),
            Value::Integer(i) => Ok(Key::Integer(*i)),
            other => Err(CastError::incompatible(other.kind(), "Key")),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        Ok(value.clone())
    }
}

// ==================== Collections ====================

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Array(items) => Ok(items.clone()),
            Value::Object(entries) => Ok(entries.keys().cloned().map(Value::from).collect()),
            Value::Text(t) => Ok(t.chars().map(|c| Value::Text(c.to_string())).collect()),
            other => Err(CastError::incompatible(other.kind(), "Vec<Value>")),
        }
    }
}

impl FromValue for Object {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Object(entries) => Ok(entries.clone()),
            Value::Array(pairs) => pairs
                .iter()
                .enumerate()
                .map(|(position, pair)| match pair.as_array() {
                    Some([key, item]) => Key::from_value(key)
                        .map(|key| (key, item.clone()))
                        .map_err(|_| {
                            CastError::conversion(
                                ValueKind::Array,
                                "Object",
                                format!("element {position} has an unusable key"),
                            )
                        }),
                    _ => Err(CastError::conversion(
                        ValueKind::Array,
                        "Object",
                        format!("element {position} is not a key-value pair"),
                    )),
                })
                .collect(),
            other => Err(CastError::incompatible(other.kind(), "Object")),
        }
    }
}

//! Value types for field snapshots.
//!
//! Values are point-in-time views of a field taken during a walk.
//! Vet supports scalar types (Bool, Int, Float, Str) and borrowed
//! reference types (Handle into host-managed storage, Object for
//! nested inspectable structs).

use crate::Inspect;
use std::fmt;

/// Liveness predicate for host-managed handles.
///
/// A handle can be non-null at the language level while its referent
/// has already been destroyed by the host. Types implementing this
/// trait can answer whether the referent is still alive.
pub trait Liveness {
    /// Returns true if the referent is still alive.
    fn is_live(&self) -> bool;
}

impl<T: ?Sized> Liveness for std::rc::Weak<T> {
    fn is_live(&self) -> bool {
        self.strong_count() > 0
    }
}

impl<T: ?Sized> Liveness for std::sync::Weak<T> {
    fn is_live(&self) -> bool {
        self.strong_count() > 0
    }
}

/// A snapshot of a field's value at walk time.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string slice.
    Str(&'a str),
    /// Handle into host-managed storage, queryable for liveness.
    Handle(&'a dyn Liveness),
    /// Nested inspectable object.
    Object(&'a dyn Inspect),
}

impl<'a> Value<'a> {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns true if this is a handle value.
    pub fn is_handle(&self) -> bool {
        matches!(self, Value::Handle(_))
    }

    /// Returns true if this is a nested object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string slice if this is a Str value.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as liveness handle if this is a Handle value.
    pub fn as_handle(&self) -> Option<&'a dyn Liveness> {
        match self {
            Value::Handle(h) => Some(*h),
            _ => None,
        }
    }

    /// Get as inspectable object if this is an Object value.
    pub fn as_object(&self) -> Option<&'a dyn Inspect> {
        match self {
            Value::Object(o) => Some(*o),
            _ => None,
        }
    }

    /// Numeric view of this value. Int and Float convert; everything
    /// else is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Handle(_) => "Handle",
            Value::Object(_) => "Object",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Handle(h) => write!(f, "Handle(live: {})", h.is_live()),
            Value::Object(o) => write!(f, "Object({})", o.type_name()),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Handle(h) => {
                if h.is_live() {
                    write!(f, "handle:live")
                } else {
                    write!(f, "handle:dead")
                }
            }
            Value::Object(o) => write!(f, "object:{}", o.type_name()),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value<'_> {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value<'_> {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value<'_> {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Str(s)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

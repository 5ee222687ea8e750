//! Scalar serializers.
//!
//! Each scalar serializer accepts its own wire kind, passes `Null` through
//! (fields are nullable in the target grammar) and performs lossless widening
//! where the grammar allows it. Everything else is an
//! [`UnserializableValue`](crate::ModelError::UnserializableValue) failure.

use crate::error::{ModelError, ModelResult};
use crate::serializer::{Serializer, SerializerHandle};
use crate::value::Value;

macro_rules! scalar_serializer {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            /// Create a new serializer.
            pub fn new() -> Self {
                Self
            }

            /// Create a shared handle.
            pub fn shared() -> SerializerHandle {
                std::sync::Arc::new(Self)
            }
        }
    };
}

scalar_serializer! {
    /// Serializer for string-typed fields.
    StringSerializer
}

scalar_serializer! {
    /// Serializer for boolean-typed fields.
    BoolSerializer
}

scalar_serializer! {
    /// Serializer for 32-bit integer fields.
    Int32Serializer
}

scalar_serializer! {
    /// Serializer for 64-bit integer fields. Accepts 32-bit constants and
    /// widens them.
    Int64Serializer
}

scalar_serializer! {
    /// Serializer for double-precision fields. Accepts integer constants and
    /// widens them.
    DoubleSerializer
}

impl Serializer for StringSerializer {
    fn name(&self) -> &str {
        "StringSerializer"
    }

    fn serialize(&self, value: &Value) -> ModelResult<Value> {
        match value {
            Value::Null | Value::String(_) => Ok(value.clone()),
            other => Err(ModelError::unserializable(self.name(), other.kind())),
        }
    }
}

impl Serializer for BoolSerializer {
    fn name(&self) -> &str {
        "BoolSerializer"
    }

    fn serialize(&self, value: &Value) -> ModelResult<Value> {
        match value {
            Value::Null | Value::Bool(_) => Ok(value.clone()),
            other => Err(ModelError::unserializable(self.name(), other.kind())),
        }
    }
}

impl Serializer for Int32Serializer {
    fn name(&self) -> &str {
        "Int32Serializer"
    }

    fn serialize(&self, value: &Value) -> ModelResult<Value> {
        match value {
            Value::Null | Value::Int32(_) => Ok(value.clone()),
            other => Err(ModelError::unserializable(self.name(), other.kind())),
        }
    }
}

impl Serializer for Int64Serializer {
    fn name(&self) -> &str {
        "Int64Serializer"
    }

    fn serialize(&self, value: &Value) -> ModelResult<Value> {
        match value {
            Value::Null | Value::Int64(_) => Ok(value.clone()),
            Value::Int32(v) => Ok(Value::Int64(i64::from(*v))),
            other => Err(ModelError::unserializable(self.name(), other.kind())),
        }
    }
}

impl Serializer for DoubleSerializer {
    fn name(&self) -> &str {
        "DoubleSerializer"
    }

    fn serialize(&self, value: &Value) -> ModelResult<Value> {
        match value {
            Value::Null | Value::Double(_) => Ok(value.clone()),
            Value::Int32(v) => Ok(Value::Double(f64::from(*v))),
            Value::Int64(v) => Ok(Value::Double(*v as f64)),
            other => Err(ModelError::unserializable(self.name(), other.kind())),
        }
    }
}

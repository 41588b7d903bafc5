//! `Encode`/`Decode` for the scalar and container shapes entity fields use.

use super::{expect_object, Decode, Encode};
use crate::error::{SpecError, SpecResult};
use indexmap::IndexMap;
use serde_json::{Number, Value};

impl Encode for String {
    fn encode(&self) -> SpecResult<Value> {
        Ok(Value::String(self.clone()))
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl Decode for String {
    fn decode(value: Value) -> SpecResult<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(SpecError::mismatch("string", &other)),
        }
    }
}

impl Encode for bool {
    fn encode(&self) -> SpecResult<Value> {
        Ok(Value::Bool(*self))
    }

    fn is_empty(&self) -> bool {
        !*self
    }
}

impl Decode for bool {
    fn decode(value: Value) -> SpecResult<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(SpecError::mismatch("boolean", &other)),
        }
    }
}

impl Encode for i64 {
    fn encode(&self) -> SpecResult<Value> {
        Ok(Value::from(*self))
    }
}

impl Decode for i64 {
    fn decode(value: Value) -> SpecResult<Self> {
        match value.as_i64() {
            Some(n) => Ok(n),
            None => Err(SpecError::mismatch("integer", &value)),
        }
    }
}

// Numbers keep their literal kind: `100` stays an integer, `100.0` a float.
impl Encode for Number {
    fn encode(&self) -> SpecResult<Value> {
        Ok(Value::Number(self.clone()))
    }
}

impl Decode for Number {
    fn decode(value: Value) -> SpecResult<Self> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(SpecError::mismatch("number", &other)),
        }
    }
}

impl Encode for Value {
    fn encode(&self) -> SpecResult<Value> {
        Ok(self.clone())
    }
}

impl Decode for Value {
    fn decode(value: Value) -> SpecResult<Self> {
        Ok(value)
    }
}

impl<T: Encode> Encode for Box<T> {
    fn encode(&self) -> SpecResult<Value> {
        (**self).encode()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(value: Value) -> SpecResult<Self> {
        T::decode(value).map(Box::new)
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> SpecResult<Value> {
        match self {
            Some(inner) => inner.encode(),
            None => Ok(Value::Null),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn is_empty(&self) -> bool {
        self.as_ref().map_or(true, Encode::is_empty)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> SpecResult<Value> {
        let mut items = Vec::with_capacity(self.len());
        for (index, item) in self.iter().enumerate() {
            items.push(item.encode().map_err(|e| e.at(&index.to_string()))?);
        }
        Ok(Value::Array(items))
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: Value) -> SpecResult<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| T::decode(item).map_err(|e| e.at(&index.to_string())))
                .collect(),
            other => Err(SpecError::mismatch("array", &other)),
        }
    }
}

impl<T: Encode> Encode for IndexMap<String, T> {
    fn encode(&self) -> SpecResult<Value> {
        let mut object = serde_json::Map::new();
        for (key, item) in self {
            object.insert(key.clone(), item.encode().map_err(|e| e.at(key))?);
        }
        Ok(Value::Object(object))
    }

    fn is_empty(&self) -> bool {
        IndexMap::is_empty(self)
    }
}

impl<T: Decode> Decode for IndexMap<String, T> {
    fn decode(value: Value) -> SpecResult<Self> {
        let object = expect_object(value)?;
        let mut out = IndexMap::with_capacity(object.len());
        for (key, item) in object {
            let decoded = T::decode(item).map_err(|e| e.at(&key))?;
            out.insert(key, decoded);
        }
        Ok(out)
    }
}

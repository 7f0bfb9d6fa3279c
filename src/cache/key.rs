//! Cache Key Module
//!
//! Structured lookup keys and their canonical string form.
//!
//! A top-level string is used verbatim. Anything else is flattened two levels,
//! the fields of each top-level record are sorted by name, and the result is
//! serialized as compact JSON. Reordering the fields of a record therefore
//! never changes the generated key.

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// Largest integer every f64 represents exactly.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

// == Scalar ==
/// A leaf value inside a [`CacheKey`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    /// A missing value: written as `null` in sequences and left out of records
    Absent,
    Bool(bool),
    Number(Number),
    String(String),
}

// == Cache Key ==
/// A structured cache key: a scalar, a nested sequence, or a record.
///
/// Records keep their insertion order; only the canonical form sorts them.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheKey {
    Scalar(Scalar),
    Sequence(Vec<CacheKey>),
    Record(Vec<(String, CacheKey)>),
}

impl CacheKey {
    /// The `null` key.
    pub fn null() -> Self {
        CacheKey::Scalar(Scalar::Null)
    }

    /// The missing-value key, produced by `None`.
    pub fn absent() -> Self {
        CacheKey::Scalar(Scalar::Absent)
    }

    /// Builds a record from `(name, value)` pairs.
    ///
    /// A repeated name overwrites the earlier value but keeps its position.
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CacheKey>,
    {
        let mut out: Vec<(String, CacheKey)> = Vec::new();
        for (name, value) in fields {
            let name = name.into();
            let value = value.into();
            match out.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => out.push((name, value)),
            }
        }
        CacheKey::Record(out)
    }

    /// Builds a sequence from anything convertible into keys.
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CacheKey>,
    {
        CacheKey::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Returns the canonical string used for map lookups.
    pub fn canonical(&self) -> String {
        canonical_key(self)
    }

    /// The JSON form of the key. Record fields keep their order and absent
    /// fields are dropped.
    pub fn to_json(&self) -> Value {
        match self {
            CacheKey::Scalar(Scalar::Null | Scalar::Absent) => Value::Null,
            CacheKey::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            CacheKey::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            CacheKey::Scalar(Scalar::String(s)) => Value::String(s.clone()),
            CacheKey::Sequence(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            CacheKey::Record(fields) => Value::Object(
                fields
                    .iter()
                    .filter(|(_, value)| !matches!(value, CacheKey::Scalar(Scalar::Absent)))
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

// == Key Generation ==
/// Generates the canonical string for a key.
pub fn canonical_key(key: &CacheKey) -> String {
    if let CacheKey::Scalar(Scalar::String(s)) = key {
        return s.clone();
    }

    let normalized: Vec<Value> = flatten(key)
        .into_iter()
        .map(|item| match item {
            CacheKey::Record(fields) => CacheKey::Record(sort_fields(fields)).to_json(),
            other => other.to_json(),
        })
        .collect();

    Value::Array(normalized).to_string()
}

/// Wraps the key in a sequence and collapses two levels of nesting.
fn flatten(key: &CacheKey) -> Vec<&CacheKey> {
    match key {
        CacheKey::Sequence(items) => items
            .iter()
            .flat_map(|item| match item {
                CacheKey::Sequence(inner) => inner.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .collect(),
        other => vec![other],
    }
}

/// Returns a copy of the fields sorted by name. Values are left as they are.
pub fn sort_fields(fields: &[(String, CacheKey)]) -> Vec<(String, CacheKey)> {
    let mut sorted = fields.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
}

/// Writes integral floats as integers, so `1.0` and `1` give the same key.
fn integral(number: Number) -> Number {
    match number.as_f64() {
        Some(f) if number.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_F64 => {
            Number::from(f as i64)
        }
        _ => number,
    }
}

// == Serialization ==
impl Serialize for CacheKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

// == Conversions ==
impl From<Scalar> for CacheKey {
    fn from(scalar: Scalar) -> Self {
        CacheKey::Scalar(scalar)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        CacheKey::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        CacheKey::Scalar(Scalar::String(s))
    }
}

impl From<&String> for CacheKey {
    fn from(s: &String) -> Self {
        CacheKey::Scalar(Scalar::String(s.clone()))
    }
}

impl From<bool> for CacheKey {
    fn from(b: bool) -> Self {
        CacheKey::Scalar(Scalar::Bool(b))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CacheKey {
                fn from(n: $t) -> Self {
                    CacheKey::Scalar(Scalar::Number(Number::from(n)))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for CacheKey {
    /// Non-finite values become `null`, the same as in JSON.
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(number) => CacheKey::Scalar(Scalar::Number(integral(number))),
            None => CacheKey::null(),
        }
    }
}

impl<T: Into<CacheKey>> From<Option<T>> for CacheKey {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(CacheKey::absent)
    }
}

impl<T: Into<CacheKey>> From<Vec<T>> for CacheKey {
    fn from(items: Vec<T>) -> Self {
        CacheKey::sequence(items)
    }
}

impl<T: Into<CacheKey>, const N: usize> From<[T; N]> for CacheKey {
    fn from(items: [T; N]) -> Self {
        CacheKey::sequence(items)
    }
}

impl From<Value> for CacheKey {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CacheKey::null(),
            Value::Bool(b) => CacheKey::Scalar(Scalar::Bool(b)),
            Value::Number(n) => CacheKey::Scalar(Scalar::Number(integral(n))),
            Value::String(s) => CacheKey::Scalar(Scalar::String(s)),
            Value::Array(items) => CacheKey::sequence(items),
            Value::Object(map) => CacheKey::Record(
                map.into_iter().map(|(name, value)| (name, value.into())).collect(),
            ),
        }
    }
}

impl From<&Value> for CacheKey {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

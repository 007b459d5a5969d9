//! Three-state fields for partial-update payloads.
//!
//! An update request must distinguish "key absent" (leave the attribute
//! alone) from "key explicitly null" (clear the attribute) from "key set
//! to a value". A plain `Option` collapses the first two, which breaks
//! the transition rules that hang off cleared dates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Key absent from the payload; the stored value is untouched.
    #[default]
    Omitted,
    /// Key present as an explicit `null`; the stored value is cleared.
    Cleared,
    /// Key present with a value; the stored value is replaced.
    Set(T),
}

impl<T> Field<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, Field::Omitted)
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, Field::Cleared)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    /// Resolve against the currently stored value.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            Field::Omitted => current,
            Field::Cleared => None,
            Field::Set(value) => Some(value),
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Omitted => Field::Omitted,
            Field::Cleared => Field::Cleared,
            Field::Set(value) => Field::Set(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Omitted => Field::Omitted,
            Field::Cleared => Field::Cleared,
            Field::Set(value) => Field::Set(f(value)),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `Some` becomes `Set`, `None` becomes `Cleared`. Use `default()`
    /// for `Omitted`.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Set(v),
            None => Field::Cleared,
        }
    }
}

// Deserialization relies on `#[serde(default)]` at the struct member:
// a missing key never reaches this impl and stays `Omitted`, while a
// present key lands here as `null` (Cleared) or a value (Set).
impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

impl<T> Serialize for Field<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Pair with `#[serde(skip_serializing_if = "Field::is_omitted")]`
            // so Omitted never reaches the wire; emitted as null otherwise.
            Field::Omitted | Field::Cleared => serializer.serialize_none(),
            Field::Set(value) => serializer.serialize_some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        #[serde(default)]
        note: Field<String>,
    }

    #[test]
    fn missing_key_is_omitted() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p.note, Field::Omitted);
        assert_eq!(p.note.apply_to(Some("kept".to_string())), Some("kept".to_string()));
    }

    #[test]
    fn explicit_null_clears() {
        let p: Payload = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(p.note, Field::Cleared);
        assert_eq!(p.note.apply_to(Some("gone".to_string())), None);
    }

    #[test]
    fn value_replaces() {
        let p: Payload = serde_json::from_str(r#"{"note": "new"}"#).unwrap();
        assert_eq!(p.note, Field::Set("new".to_string()));
        assert_eq!(
            p.note.apply_to(Some("old".to_string())),
            Some("new".to_string())
        );
    }
}

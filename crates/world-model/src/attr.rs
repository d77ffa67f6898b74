//! Three-state attribute container
//!
//! The host hands the core optional attributes that may be unset, carry a
//! schema default, or be explicitly declared. [`Attr`] makes the three
//! states first-class so controllers can distinguish "the operator said
//! nothing" (skip the command) from "the operator declared a value"
//! (issue it), and resolve defaults exactly once per lifecycle call.

use serde::{Deserialize, Deserializer};

/// An optional attribute value with default tracking.
///
/// Deserialization maps a missing or `null` field to [`Attr::Unset`] and
/// any concrete value to [`Attr::Explicit`]; [`Attr::Default`] only ever
/// appears after [`Attr::or_default`] fills a schema default in.
#[derive(Debug, Clone, PartialEq)]
pub enum Attr<T> {
    /// Not declared by the operator.
    Unset,
    /// Filled from the kind's schema default.
    Default(T),
    /// Explicitly declared by the operator.
    Explicit(T),
}

impl<T> Attr<T> {
    /// Fill the schema default when the attribute is unset.
    pub fn or_default(self, fallback: T) -> Self {
        match self {
            Self::Unset => Self::Default(fallback),
            other => other,
        }
    }

    /// The concrete value, if one is present.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Default(v) | Self::Explicit(v) => Some(v),
        }
    }

    /// Resolve to a concrete value, falling back when unset.
    pub fn resolve(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self {
            Self::Unset => fallback,
            Self::Default(v) | Self::Explicit(v) => v.clone(),
        }
    }

    /// Consume the container, yielding the value if one is present.
    pub fn into_inner(self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Default(v) | Self::Explicit(v) => Some(v),
        }
    }

    /// Whether the operator explicitly declared a value.
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }

    /// Whether no value is present at all.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<T> Default for Attr<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<'de, T> Deserialize<'de> for Attr<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => Self::Unset,
            Some(v) => Self::Explicit(v),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default)]
        flag: Attr<bool>,
    }

    #[test]
    fn missing_field_deserializes_to_unset() {
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.flag.is_unset());
    }

    #[test]
    fn null_field_deserializes_to_unset() {
        let holder: Holder = serde_json::from_str(r#"{"flag":null}"#).unwrap();
        assert!(holder.flag.is_unset());
    }

    #[test]
    fn concrete_field_deserializes_to_explicit() {
        let holder: Holder = serde_json::from_str(r#"{"flag":true}"#).unwrap();
        assert_eq!(holder.flag, Attr::Explicit(true));
        assert!(holder.flag.is_explicit());
    }

    #[test]
    fn or_default_only_fills_unset() {
        assert_eq!(Attr::Unset.or_default(7), Attr::Default(7));
        assert_eq!(Attr::Explicit(3).or_default(7), Attr::Explicit(3));
    }

    #[test]
    fn resolve_prefers_present_value() {
        assert_eq!(Attr::Explicit(3).resolve(7), 3);
        assert_eq!(Attr::Default(5).resolve(7), 5);
        assert_eq!(Attr::<i32>::Unset.resolve(7), 7);
    }
}

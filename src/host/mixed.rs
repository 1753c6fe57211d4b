// Mixed values
//
// The host reports a property as "mixed" when it is not uniform across the
// nodes or characters being queried (e.g. a text run with two font sizes).
// On the wire this is the bare string "mixed" in place of the value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire spelling of the mixed marker
pub const MIXED: &str = "mixed";

/// A property value that is either uniform or mixed across a selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mixed<T> {
    Uniform(T),
    Mixed,
}

impl<T> Mixed<T> {
    pub fn is_mixed(&self) -> bool {
        matches!(self, Mixed::Mixed)
    }

    /// Uniform value, or `None` when mixed
    pub fn uniform(self) -> Option<T> {
        match self {
            Mixed::Uniform(value) => Some(value),
            Mixed::Mixed => None,
        }
    }

    pub fn as_ref(&self) -> Mixed<&T> {
        match self {
            Mixed::Uniform(value) => Mixed::Uniform(value),
            Mixed::Mixed => Mixed::Mixed,
        }
    }

    pub fn map<U, F>(self, f: F) -> Mixed<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Mixed::Uniform(value) => Mixed::Uniform(f(value)),
            Mixed::Mixed => Mixed::Mixed,
        }
    }
}

impl<T> From<T> for Mixed<T> {
    fn from(value: T) -> Self {
        Mixed::Uniform(value)
    }
}

impl<T: Serialize> Serialize for Mixed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mixed::Uniform(value) => value.serialize(serializer),
            Mixed::Mixed => serializer.serialize_str(MIXED),
        }
    }
}

#[derive(Deserialize)]
enum MixedMarker {
    #[serde(rename = "mixed")]
    Mixed,
}

// The marker is tried first, so a string property whose value is literally
// "mixed" is read back as `Mixed::Mixed`.
#[derive(Deserialize)]
#[serde(untagged)]
enum MixedRepr<T> {
    Marker(MixedMarker),
    Value(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Mixed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match MixedRepr::deserialize(deserializer)? {
            MixedRepr::Marker(MixedMarker::Mixed) => Mixed::Mixed,
            MixedRepr::Value(value) => Mixed::Uniform(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_serializes_as_bare_value() {
        let size: Mixed<f64> = Mixed::Uniform(14.0);
        assert_eq!(serde_json::to_string(&size).unwrap(), "14.0");

        let family: Mixed<String> = Mixed::Uniform("Inter".to_string());
        assert_eq!(serde_json::to_string(&family).unwrap(), "\"Inter\"");
    }

    #[test]
    fn test_mixed_serializes_as_marker_string() {
        let size: Mixed<f64> = Mixed::Mixed;
        assert_eq!(serde_json::to_string(&size).unwrap(), "\"mixed\"");
    }

    #[test]
    fn test_deserialize_accepts_marker_or_value() {
        let mixed: Mixed<f64> = serde_json::from_str("\"mixed\"").unwrap();
        assert!(mixed.is_mixed());

        let uniform: Mixed<f64> = serde_json::from_str("12").unwrap();
        assert_eq!(uniform, Mixed::Uniform(12.0));

        let list: Mixed<Vec<u8>> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(list, Mixed::Uniform(vec![1, 2]));
    }

    #[test]
    fn test_map_preserves_mixed() {
        let mixed: Mixed<f64> = Mixed::Mixed;
        assert!(mixed.map(|v| v * 2.0).is_mixed());
        assert_eq!(Mixed::Uniform(2.0).map(|v| v * 2.0).uniform(), Some(4.0));
    }
}

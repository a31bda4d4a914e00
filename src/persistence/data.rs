//! The project document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::StoreError;

/// A single project document: string keys mapped to arbitrary JSON values.
///
/// No schema is enforced; the store persists whatever the caller puts in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectData(Map<String, Value>);

impl ProjectData {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl FromIterator<(String, Value)> for ProjectData {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Accepts only JSON objects. `null` is missing input; anything else is
/// rejected as not a record.
impl TryFrom<Value> for ProjectData {
    type Error = StoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(StoreError::MissingData),
            other => Err(StoreError::NotARecord(json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_try_from_object() {
        let data = ProjectData::try_from(json!({"name": "Kiln", "runs": [1, 2]})).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("name"), Some(&json!("Kiln")));
    }

    #[test]
    fn test_try_from_rejects_null_and_scalars() {
        assert!(matches!(
            ProjectData::try_from(Value::Null),
            Err(StoreError::MissingData)
        ));
        assert!(matches!(
            ProjectData::try_from(json!([1, 2])),
            Err(StoreError::NotARecord("array"))
        ));
        assert!(matches!(
            ProjectData::try_from(json!(false)),
            Err(StoreError::NotARecord("boolean"))
        ));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut data = ProjectData::new();
        data.insert("feedstock", "pine");
        data.insert("moisture", 12);
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"feedstock":"pine","moisture":12}"#
        );
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut data = ProjectData::new();
        data.insert("zeta", 1);
        data.insert("alpha", 2);
        assert_eq!(serde_json::to_string(&data).unwrap(), r#"{"zeta":1,"alpha":2}"#);

        let parsed: ProjectData = serde_json::from_str(r#"{"b":0,"a":{"y":1,"x":2}}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"b":0,"a":{"y":1,"x":2}}"#
        );
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert!(serde_json::from_str::<ProjectData>("null").is_err());
        assert!(serde_json::from_str::<ProjectData>("[]").is_err());
        assert!(serde_json::from_str::<ProjectData>("{}").unwrap().is_empty());
    }
}

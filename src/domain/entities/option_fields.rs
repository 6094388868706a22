use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents optional field semantics in PATCH/UPDATE requests for
/// nullable columns.
///
/// - `Unchanged` → field absent from the payload
/// - `SetToNull` → field present and `null`
/// - `SetToValue` → field present with a value
///
/// Fields of this type must carry `#[serde(default)]` so that an absent key
/// deserializes to `Unchanged`.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

impl<T> Serialize for OptionField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionField::SetToValue(value) => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

impl<T> OptionField<T> {
    /// Borrowed nested option:
    /// - `None` → unchanged
    /// - `Some(None)` → set null
    /// - `Some(Some(&T))` → set to value
    pub fn as_ref_option(&self) -> Option<Option<&T>> {
        match self {
            Self::Unchanged => None,
            Self::SetToNull => Some(None),
            Self::SetToValue(value) => Some(Some(value)),
        }
    }

    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// True when `SetToNull`.
    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// If `SetToValue`, returns a reference to inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl OptionField<String> {
    /// Column value to write when the field is touched.
    pub fn as_column(&self) -> Option<Option<&str>> {
        self.as_ref_option().map(|v| v.map(String::as_str))
    }
}

// From nested option into OptionField
impl<T> From<Option<Option<T>>> for OptionField<T> {
    fn from(opt: Option<Option<T>>) -> Self {
        match opt {
            None => OptionField::Unchanged,
            Some(None) => OptionField::SetToNull,
            Some(Some(v)) => OptionField::SetToValue(v),
        }
    }
}

pub type PatchString = OptionField<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "OptionField::is_unchanged")]
        icon: PatchString,
    }

    #[test]
    fn absent_key_is_unchanged() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert!(patch.icon.is_unchanged());
    }

    #[test]
    fn null_clears_the_column() {
        let patch: Patch = serde_json::from_str(r#"{"icon": null}"#).unwrap();
        assert!(patch.icon.is_set_to_null());
        assert_eq!(patch.icon.as_column(), Some(None));
    }

    #[test]
    fn value_sets_the_column() {
        let patch: Patch = serde_json::from_str(r#"{"icon": "Server"}"#).unwrap();
        assert_eq!(patch.icon.value_ref().map(String::as_str), Some("Server"));
        assert_eq!(patch.icon.as_column(), Some(Some("Server")));
    }

    #[test]
    fn serializes_back_to_the_same_payload() {
        let unchanged = Patch { icon: OptionField::Unchanged };
        let cleared = Patch { icon: OptionField::SetToNull };
        let set = Patch { icon: OptionField::SetToValue("Cloud".to_string()) };

        assert_eq!(serde_json::to_string(&unchanged).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"icon":null}"#);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"icon":"Cloud"}"#);
    }

    #[test]
    fn converts_from_nested_option() {
        assert!(OptionField::<i32>::from(None).is_unchanged());
        assert!(OptionField::<i32>::from(Some(None)).is_set_to_null());
        assert_eq!(OptionField::from(Some(Some(3))).value_ref(), Some(&3));
    }
}

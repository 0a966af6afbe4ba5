use serde::{Deserialize, Deserializer};

use crate::value::Val;

/// Configuration for a single enumeration member.
///
/// Deserializes from JSON leniently: arrays become [`EntryConfig::Sequence`],
/// objects become [`EntryConfig::Record`], scalars become
/// [`EntryConfig::Primitive`], and anything that is not a primitive where a
/// primitive is expected is treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryConfig {
    /// Positional `[val, key, desc]`; elements past the third are ignored.
    Sequence(Vec<Option<Val>>),
    /// Named fields, any of which may be missing.
    Record(EntryRecord),
    /// A bare value used as key, val and desc at once.
    Primitive(Val),
}

/// Field-by-name form of an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryRecord {
    pub key: Option<Val>,
    pub val: Option<Val>,
    pub desc: Option<Val>,
}

impl EntryRecord {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: None,
            val: None,
            desc: None,
        }
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<Val>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn val(mut self, val: impl Into<Val>) -> Self {
        self.val = Some(val.into());
        self
    }

    #[must_use]
    pub fn desc(mut self, desc: impl Into<Val>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// Raw `(key, val, desc)` fields before defaults are applied.
pub(crate) struct RawFields {
    pub key: Option<Val>,
    pub val: Option<Val>,
    pub desc: Option<Val>,
}

impl EntryConfig {
    /// Converts a JSON document describing one entry. Never fails; `null`
    /// and other shapeless values yield an entry with every field absent.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => {
                Self::Sequence(items.iter().take(3).map(Val::from_json).collect())
            }
            serde_json::Value::Object(fields) => Self::Record(EntryRecord {
                key: fields.get("key").and_then(Val::from_json),
                val: fields.get("val").and_then(Val::from_json),
                desc: fields.get("desc").and_then(Val::from_json),
            }),
            other => Val::from_json(other).map_or_else(
                || Self::Record(EntryRecord::default()),
                Self::Primitive,
            ),
        }
    }

    pub(crate) fn into_fields(self) -> RawFields {
        match self {
            Self::Sequence(items) => {
                let mut items = items.into_iter();
                let val = items.next().flatten();
                let key = items.next().flatten();
                let desc = items.next().flatten();
                RawFields { key, val, desc }
            }
            Self::Record(EntryRecord { key, val, desc }) => RawFields { key, val, desc },
            Self::Primitive(value) => RawFields {
                key: Some(value.clone()),
                val: Some(value.clone()),
                desc: Some(value),
            },
        }
    }
}

impl<'de> Deserialize<'de> for EntryConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

impl From<EntryRecord> for EntryConfig {
    fn from(record: EntryRecord) -> Self {
        Self::Record(record)
    }
}

impl From<Val> for EntryConfig {
    fn from(value: Val) -> Self {
        Self::Primitive(value)
    }
}

macro_rules! primitive_entry {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for EntryConfig {
                fn from(value: $ty) -> Self {
                    Self::Primitive(Val::from(value))
                }
            }
        )*
    };
}

primitive_entry!(&str, String, f64, i32, u32, i64, bool);

impl<V, K> From<(V, K)> for EntryConfig
where
    V: Into<Val>,
    K: Into<Val>,
{
    fn from((val, key): (V, K)) -> Self {
        Self::Sequence(vec![Some(val.into()), Some(key.into())])
    }
}

impl<V, K, D> From<(V, K, D)> for EntryConfig
where
    V: Into<Val>,
    K: Into<Val>,
    D: Into<Val>,
{
    fn from((val, key, desc): (V, K, D)) -> Self {
        Self::Sequence(vec![Some(val.into()), Some(key.into()), Some(desc.into())])
    }
}

impl<T: Into<Val>> From<Vec<T>> for EntryConfig {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(|item| Some(item.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shapes_map_to_entry_forms() {
        let entries: Vec<EntryConfig> = serde_json::from_str(
            r#"[[1, "success", "ok", "ignored"], {"key": "k", "desc": "d"}, "static", null]"#,
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                EntryConfig::Sequence(vec![
                    Some(Val::from(1)),
                    Some(Val::from("success")),
                    Some(Val::from("ok")),
                ]),
                EntryConfig::Record(EntryRecord::new().key("k").desc("d")),
                EntryConfig::Primitive(Val::from("static")),
                EntryConfig::Record(EntryRecord::default()),
            ]
        );
    }

    #[test]
    fn sequence_fields_are_value_first() {
        let fields = EntryConfig::from((2, "failure")).into_fields();
        assert_eq!(fields.val, Some(Val::from(2)));
        assert_eq!(fields.key, Some(Val::from("failure")));
        assert_eq!(fields.desc, None);
    }

    #[test]
    fn nested_containers_in_a_sequence_are_absent() {
        let entry = EntryConfig::from_json(&serde_json::json!([[1], "k"]));
        let fields = entry.into_fields();
        assert_eq!(fields.val, None);
        assert_eq!(fields.key, Some(Val::from("k")));
    }
}

use std::fmt;

use serde::Serialize;

use crate::config::{EntryConfig, RawFields};
use crate::value::Val;

/// One normalized enumeration member.
///
/// `val` defaults to `key` and `desc` defaults to `val`, so all three are
/// always populated. Comparing an item against a primitive compares its
/// `val`; key and desc never take part in equality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumItem {
    key: String,
    val: Val,
    desc: String,
}

impl EnumItem {
    #[must_use]
    pub fn new(config: impl Into<EntryConfig>) -> Self {
        Self::from_fields(config.into().into_fields())
    }

    fn from_fields(RawFields { key, val, desc }: RawFields) -> Self {
        let val = val
            .or_else(|| key.clone())
            .unwrap_or_else(|| Val::Str(String::new()));
        let key = key.map_or_else(|| val.property_key().into_owned(), Val::into_property_key);
        let desc = desc.map_or_else(|| val.property_key().into_owned(), Val::into_property_key);
        Self { key, val, desc }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying value; the item stands in for this in comparisons.
    #[must_use]
    pub const fn val(&self) -> &Val {
        &self.val
    }

    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    #[must_use]
    pub fn into_val(self) -> Val {
        self.val
    }
}

impl fmt::Display for EnumItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.val, f)
    }
}

impl From<&EnumItem> for Val {
    fn from(item: &EnumItem) -> Self {
        item.val.clone()
    }
}

impl From<EnumItem> for Val {
    fn from(item: EnumItem) -> Self {
        item.val
    }
}

impl PartialEq<Val> for EnumItem {
    fn eq(&self, other: &Val) -> bool {
        self.val == *other
    }
}

impl PartialEq<EnumItem> for Val {
    fn eq(&self, other: &EnumItem) -> bool {
        *self == other.val
    }
}

macro_rules! compare_val {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for EnumItem {
                fn eq(&self, other: &$ty) -> bool {
                    self.val == *other
                }
            }
        )*
    };
}

compare_val!(&str, f64, i64, i32, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EntryRecord;

    #[test]
    fn ordered_triple_is_value_key_description() {
        let item = EnumItem::new((1, "success", "成功"));
        assert_eq!(item.key(), "success");
        assert_eq!(*item.val(), Val::from(1));
        assert_eq!(item.desc(), "成功");
    }

    #[test]
    fn bare_primitive_fills_every_field() {
        let item = EnumItem::new("static");
        assert_eq!(item.key(), "static");
        assert_eq!(*item.val(), "static");
        assert_eq!(item.desc(), "static");

        let numeric = EnumItem::new(7);
        assert_eq!(numeric.key(), "7");
        assert_eq!(numeric, 7);
        assert_eq!(numeric.desc(), "7");
    }

    #[test]
    fn description_falls_back_to_value_then_key() {
        let with_val = EnumItem::new((3, "pending"));
        assert_eq!(with_val.desc(), "3");

        let key_only = EnumItem::new(EntryRecord::new().key("draft"));
        assert_eq!(*key_only.val(), "draft");
        assert_eq!(key_only.desc(), "draft");

        let record = EntryRecord::new().key("on").val(true).desc("Enabled");
        let item = EnumItem::new(record);
        assert_eq!(item, true);
        assert_eq!(item.desc(), "Enabled");
    }

    #[test]
    fn missing_key_is_derived_from_value() {
        let item = EnumItem::new(EntryRecord::new().val(4));
        assert_eq!(item.key(), "4");
        assert_eq!(item.desc(), "4");

        let empty = EnumItem::new(EntryRecord::default());
        assert_eq!(empty.key(), "");
        assert_eq!(*empty.val(), "");
        assert_eq!(empty.desc(), "");
    }

    #[test]
    fn coercion_yields_val_not_key_or_desc() {
        let item = EnumItem::new((2, "failure", "失败"));
        assert_eq!(item.to_string(), "2");
        assert_eq!(Val::from(&item), Val::from(2));
        assert_eq!(item, 2.0);
        assert!(item != "failure");
        assert!(item != "失败");
    }
}

use enumer::{EnumCollection, EnumItem, enumer};
use serde_json::{Value as JsonValue, json};

pub fn status_enum() -> EnumCollection {
    enumer([(1, "success", "成功"), (2, "failure", "失败")])
}

#[allow(dead_code)]
pub fn item_to_json(item: &EnumItem) -> JsonValue {
    json!({ "key": item.key(), "val": item.val(), "desc": item.desc() })
}

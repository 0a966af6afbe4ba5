pub mod collection;
pub mod config;
pub mod error;
pub mod item;
pub mod logger;
pub mod value;
pub use crate::error::{Error, Result};
pub use collection::{EnumCollection, Iter, SelectOption, enumer};
pub use config::{EntryConfig, EntryRecord};
pub use item::EnumItem;
pub use value::Val;

//! # 稀疏字段更新表

use core::fmt;
use pallet_matchmaking_common::ProfileField;
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::BTreeMap;

/// 解析出的字段值
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(u32),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// 字段更新表，只包含成功解析的字段
///
/// 同一类型也用作表单状态：`merge_into` 只覆盖本表出现的键。
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ProfileFieldMap {
    fields: BTreeMap<ProfileField, FieldValue>,
}

impl ProfileFieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ProfileField, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn set_text(&mut self, field: ProfileField, value: impl Into<String>) {
        self.insert(field, FieldValue::Text(value.into()));
    }

    pub fn set_number(&mut self, field: ProfileField, value: u32) {
        self.insert(field, FieldValue::Number(value));
    }

    pub fn get(&self, field: ProfileField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn text(&self, field: ProfileField) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn number(&self, field: ProfileField) -> Option<u32> {
        self.get(field).and_then(FieldValue::as_number)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// 合并到表单状态，只覆盖本表中存在的字段
    pub fn merge_into(&self, form: &mut ProfileFieldMap) {
        for (field, value) in &self.fields {
            form.fields.insert(*field, value.clone());
        }
    }

    /// 转为资料模块 `update_profile` 接受的 `(字段, 值)` 字节条目
    pub fn to_entries(&self) -> Vec<(ProfileField, Vec<u8>)> {
        self.fields
            .iter()
            .map(|(field, value)| (*field, value.to_string().into_bytes()))
            .collect()
    }
}

impl FromIterator<(ProfileField, FieldValue)> for ProfileFieldMap {
    fn from_iter<I: IntoIterator<Item = (ProfileField, FieldValue)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

/// 以表单字段名为键序列化，如 `{"first_name":"Ahmed","age":27}`
impl Serialize for ProfileFieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

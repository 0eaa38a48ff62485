//! 静的コンテンツの型定義
//!
//! バンドルされたJSONドキュメントと同じ形:
//! - ProjectRecord: project.json の1件
//! - SkillGroup: skill.json の1グループ
//! - VectorIcon: icons.json の1アイコン

use crate::error::{Error, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// プロジェクト区分（フィルタ値）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Website,
    #[default]
    Mobile,
    Design,
}

impl Category {
    /// フィルタボタンの表示順
    pub const ALL: [Category; 3] = [Category::Website, Category::Mobile, Category::Design];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Website => "website",
            Category::Mobile => "mobile",
            Category::Design => "design",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "website" => Ok(Category::Website),
            "mobile" => Ok(Category::Mobile),
            "design" => Ok(Category::Design),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// 順序付きの key → value リスト
///
/// JSONオブジェクトとして読み書きするが、ドキュメント上の順序を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedList(pub Vec<(String, String)>);

impl KeyedList {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for KeyedList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeyedList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct KeyedListVisitor;

        impl<'de> Visitor<'de> for KeyedListVisitor {
            type Value = KeyedList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<KeyedList, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    entries.push((k, v));
                }
                Ok(KeyedList(entries))
            }
        }

        deserializer.deserialize_map(KeyedListVisitor)
    }
}

/// プロジェクト1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,

    #[serde(default)]
    pub short: String,

    /// `{label[url]}` と `[text]` トークンを含む説明文
    #[serde(default)]
    pub description: String,

    pub category: Category,

    #[serde(default)]
    pub thumbnail: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub feature: KeyedList,

    #[serde(default)]
    pub stack: KeyedList,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demolink: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitrepo: Option<String>,

    #[serde(default)]
    pub iconkey: Vec<String>,
}

impl ProjectRecord {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// スライダーの前後ボタンを出すか
    pub fn has_carousel(&self) -> bool {
        self.images.len() > 1
    }

    /// 空文字のリンクは無しとして扱う
    pub fn demo_link(&self) -> Option<&str> {
        self.demolink.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn repo_link(&self) -> Option<&str> {
        self.gitrepo.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// スキルグループ（スキル名 → 説明）
pub type SkillGroup = KeyedList;

/// SVGパス1本
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconPath {
    pub d: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<String>,
}

/// 型付きのベクターアイコン
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorIcon {
    #[serde(default = "default_view_box")]
    pub view_box: String,
    pub paths: Vec<IconPath>,
}

fn default_view_box() -> String {
    "0 0 24 24".to_string()
}

/// アイコンキー → アイコン
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconTable(HashMap<String, VectorIcon>);

impl IconTable {
    pub fn get(&self, key: &str) -> Option<&VectorIcon> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, icon: VectorIcon) {
        self.0.insert(key.into(), icon);
    }
}

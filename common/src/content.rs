//! 静的コンテンツの読み込みと検証
//!
//! icons.json / projects.json / skills.json を一度だけ読み込み、以後は読み取り専用。

use crate::error::Result;
use crate::profile::{CHROME_ICON_KEYS, DOCUMENTS, SOCIAL_LINKS};
use crate::types::{IconTable, ProjectRecord, SkillGroup};
use std::collections::HashSet;
use std::fmt;

const BUNDLED_ICONS: &str = include_str!("../../data/icons.json");
const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");
const BUNDLED_SKILLS: &str = include_str!("../../data/skills.json");

pub const ICONS_FILE: &str = "icons.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const SKILLS_FILE: &str = "skills.json";

/// サイト全体のコンテンツ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    pub icons: IconTable,
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<SkillGroup>,
}

/// コンテンツの不備
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    /// 参照されているアイコンキーが表に無い
    UnknownIcon { key: String, used_by: String },
    /// 画像が1枚も無いプロジェクト
    NoImages { project: String },
    /// タイトルが空のプロジェクト（位置で示す）
    EmptyTitle { index: usize },
    /// 同じカテゴリ内でタイトルが重複
    DuplicateTitle { title: String, category: String },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::UnknownIcon { key, used_by } => {
                write!(f, "unknown icon \"{}\" used by {}", key, used_by)
            }
            ContentIssue::NoImages { project } => {
                write!(f, "project \"{}\" has no images", project)
            }
            ContentIssue::EmptyTitle { index } => {
                write!(f, "project #{} has an empty title", index)
            }
            ContentIssue::DuplicateTitle { title, category } => {
                write!(f, "duplicate title \"{}\" in {}", title, category)
            }
        }
    }
}

impl Content {
    /// JSON文字列3つから読み込み
    pub fn from_json(icons: &str, projects: &str, skills: &str) -> Result<Self> {
        Ok(Self {
            icons: serde_json::from_str(icons)?,
            projects: serde_json::from_str(projects)?,
            skills: serde_json::from_str(skills)?,
        })
    }

    /// バイナリに埋め込まれたコンテンツ
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_ICONS, BUNDLED_PROJECTS, BUNDLED_SKILLS)
    }

    /// ディレクトリから読み込み（非WASM環境のみ）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_dir(dir: &std::path::Path) -> Result<Self> {
        let icons = std::fs::read_to_string(dir.join(ICONS_FILE))?;
        let projects = std::fs::read_to_string(dir.join(PROJECTS_FILE))?;
        let skills = std::fs::read_to_string(dir.join(SKILLS_FILE))?;
        Self::from_json(&icons, &projects, &skills)
    }

    pub fn find_project(&self, title: &str) -> Option<(usize, &ProjectRecord)> {
        let wanted = title.trim().to_lowercase();
        self.projects
            .iter()
            .enumerate()
            .find(|(_, p)| p.title.to_lowercase() == wanted)
    }

    /// 不備を列挙（空なら問題なし）
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        for key in CHROME_ICON_KEYS {
            self.check_icon(key, "site chrome", &mut issues);
        }
        for link in DOCUMENTS.iter().chain(SOCIAL_LINKS.iter()) {
            self.check_icon(link.icon_key, &format!("link \"{}\"", link.label), &mut issues);
        }

        let mut seen = HashSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                issues.push(ContentIssue::EmptyTitle { index });
            } else if !seen.insert((project.category, project.title.as_str())) {
                issues.push(ContentIssue::DuplicateTitle {
                    title: project.title.clone(),
                    category: project.category.to_string(),
                });
            }

            if project.images.is_empty() {
                issues.push(ContentIssue::NoImages {
                    project: project.title.clone(),
                });
            }

            for key in &project.iconkey {
                self.check_icon(key, &format!("project \"{}\"", project.title), &mut issues);
            }
        }

        for group in &self.skills {
            for name in group.keys() {
                self.check_icon(name, &format!("skill \"{}\"", name), &mut issues);
            }
        }

        issues
    }

    fn check_icon(&self, key: &str, used_by: &str, issues: &mut Vec<ContentIssue>) {
        if !self.icons.contains(key) {
            issues.push(ContentIssue::UnknownIcon {
                key: key.to_string(),
                used_by: used_by.to_string(),
            });
        }
    }
}

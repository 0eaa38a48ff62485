//! プロジェクトギャラリーの状態
//!
//! カテゴリフィルタ、詳細表示中のプロジェクト、スライダーの画像インデックスを管理する。
//! 画像インデックスは常に `[0, 画像数)` に収まる。

use crate::error::{Error, Result};
use crate::types::{Category, ProjectRecord};
use serde::{Deserialize, Serialize};

/// フィルタに一致するプロジェクトを元の順序で返す
pub fn visible_projects(projects: &[ProjectRecord], filter: Category) -> Vec<&ProjectRecord> {
    projects.iter().filter(|p| p.category == filter).collect()
}

/// フィルタに一致するプロジェクトのインデックス（元のリスト基準）
pub fn visible_indices(projects: &[ProjectRecord], filter: Category) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| p.category == filter)
        .map(|(i, _)| i)
        .collect()
}

/// 開いているプロジェクトとスライダー位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOpenProject")]
pub struct OpenProject {
    pub index: usize,
    pub image_index: usize,
    image_count: usize,
}

/// 検査前の OpenProject
#[derive(Deserialize)]
struct RawOpenProject {
    index: usize,
    image_index: usize,
    image_count: usize,
}

impl TryFrom<RawOpenProject> for OpenProject {
    type Error = Error;

    fn try_from(raw: RawOpenProject) -> Result<Self> {
        // 画像0枚のプロジェクトはインデックス0のみ
        let in_range = raw.image_index < raw.image_count.max(1);
        if !in_range {
            return Err(Error::ImageOutOfRange {
                index: raw.image_index,
                len: raw.image_count,
            });
        }
        Ok(Self {
            index: raw.index,
            image_index: raw.image_index,
            image_count: raw.image_count,
        })
    }
}

impl OpenProject {
    pub fn image_count(&self) -> usize {
        self.image_count
    }
}

/// ギャラリー全体の状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryState {
    pub filter: Category,
    open: Option<OpenProject>,
}

impl GalleryState {
    pub fn new(filter: Category) -> Self {
        Self { filter, open: None }
    }

    pub fn set_filter(&mut self, filter: Category) {
        self.filter = filter;
    }

    pub fn open(&self) -> Option<OpenProject> {
        self.open
    }

    pub fn selected(&self) -> Option<usize> {
        self.open.map(|o| o.index)
    }

    pub fn image_index(&self) -> Option<usize> {
        self.open.map(|o| o.image_index)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// プロジェクトを開く（画像インデックスは0に戻る）
    pub fn select(&mut self, projects: &[ProjectRecord], index: usize) -> Result<()> {
        let project = projects.get(index).ok_or(Error::ProjectOutOfRange {
            index,
            len: projects.len(),
        })?;
        self.open = Some(OpenProject {
            index,
            image_index: 0,
            image_count: project.image_count(),
        });
        Ok(())
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// 次の画像（末尾から先頭へ折り返す）
    pub fn next(&mut self) {
        if let Some(open) = self.open.as_mut() {
            if open.image_count > 1 {
                open.image_index = (open.image_index + 1) % open.image_count;
            }
        }
    }

    /// 前の画像（先頭から末尾へ折り返す）
    pub fn prev(&mut self) {
        if let Some(open) = self.open.as_mut() {
            if open.image_count > 1 {
                open.image_index = (open.image_index + open.image_count - 1) % open.image_count;
            }
        }
    }

    /// サムネイルから画像を直接選択
    pub fn select_image(&mut self, image_index: usize) -> Result<()> {
        let open = self.open.as_mut().ok_or(Error::NoProjectOpen)?;
        if image_index >= open.image_count {
            return Err(Error::ImageOutOfRange {
                index: image_index,
                len: open.image_count,
            });
        }
        open.image_index = image_index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, category: Category, images: usize) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            category,
            images: (0..images).map(|i| format!("/img/{}-{}.png", title, i)).collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            project("shop", Category::Website, 3),
            project("scanner", Category::Mobile, 2),
            project("logo", Category::Design, 1),
            project("blog", Category::Website, 0),
            project("tracker", Category::Mobile, 4),
        ]
    }

    // =============================================
    // フィルタ
    // =============================================

    #[test]
    fn test_visible_projects_preserves_order() {
        let projects = sample();
        for filter in Category::ALL {
            let visible = visible_projects(&projects, filter);
            let expected: Vec<&ProjectRecord> =
                projects.iter().filter(|p| p.category == filter).collect();
            assert_eq!(visible, expected);
            assert!(visible.iter().all(|p| p.category == filter));
        }

        let titles: Vec<&str> = visible_projects(&projects, Category::Website)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["shop", "blog"]);
    }

    #[test]
    fn test_visible_indices() {
        let projects = sample();
        assert_eq!(visible_indices(&projects, Category::Mobile), vec![1, 4]);
        assert_eq!(visible_indices(&projects, Category::Design), vec![2]);
        assert!(visible_indices(&[], Category::Design).is_empty());
    }

    #[test]
    fn test_default_filter_is_mobile() {
        let state = GalleryState::default();
        assert_eq!(state.filter, Category::Mobile);
        assert!(!state.is_open());
    }

    // =============================================
    // 選択とスライダー
    // =============================================

    #[test]
    fn test_select_resets_image_index() {
        let projects = sample();
        let mut state = GalleryState::default();

        state.select(&projects, 4).unwrap();
        state.next();
        state.next();
        assert_eq!(state.image_index(), Some(2));

        state.select(&projects, 0).unwrap();
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.image_index(), Some(0));

        // 同じプロジェクトを選び直しても0に戻る
        state.next();
        state.select(&projects, 0).unwrap();
        assert_eq!(state.image_index(), Some(0));
    }

    #[test]
    fn test_select_out_of_range() {
        let projects = sample();
        let mut state = GalleryState::default();
        let err = state.select(&projects, 99).unwrap_err();
        assert!(matches!(err, Error::ProjectOutOfRange { index: 99, len: 5 }));
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_clears_selection() {
        let projects = sample();
        let mut state = GalleryState::default();
        state.select(&projects, 1).unwrap();
        state.close();
        assert_eq!(state.selected(), None);
        assert_eq!(state.image_index(), None);
    }

    #[test]
    fn test_next_wraps_to_zero() {
        let projects = sample();
        let mut state = GalleryState::default();
        state.select(&projects, 0).unwrap();
        state.next();
        state.next();
        assert_eq!(state.image_index(), Some(2));
        state.next();
        assert_eq!(state.image_index(), Some(0));
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let projects = sample();
        let mut state = GalleryState::default();
        state.select(&projects, 4).unwrap();
        state.prev();
        assert_eq!(state.image_index(), Some(3));
        state.prev();
        assert_eq!(state.image_index(), Some(2));
    }

    #[test]
    fn test_single_and_empty_image_navigation_is_noop() {
        let projects = sample();
        let mut state = GalleryState::default();

        state.select(&projects, 2).unwrap();
        state.next();
        state.prev();
        assert_eq!(state.image_index(), Some(0));

        state.select(&projects, 3).unwrap();
        state.next();
        state.prev();
        assert_eq!(state.image_index(), Some(0));
    }

    #[test]
    fn test_select_image() {
        let projects = sample();
        let mut state = GalleryState::default();
        state.select(&projects, 4).unwrap();

        state.select_image(3).unwrap();
        assert_eq!(state.image_index(), Some(3));

        let err = state.select_image(4).unwrap_err();
        assert!(matches!(err, Error::ImageOutOfRange { index: 4, len: 4 }));
        assert_eq!(state.image_index(), Some(3));
    }

    #[test]
    fn test_select_image_without_project() {
        let mut state = GalleryState::default();
        assert!(matches!(state.select_image(0), Err(Error::NoProjectOpen)));
    }

    #[test]
    fn test_navigation_without_project_is_noop() {
        let mut state = GalleryState::new(Category::Design);
        state.next();
        state.prev();
        assert_eq!(state, GalleryState::new(Category::Design));
    }

    #[test]
    fn test_filter_change_keeps_selection() {
        let projects = sample();
        let mut state = GalleryState::default();
        state.select(&projects, 1).unwrap();
        state.set_filter(Category::Design);
        assert_eq!(state.filter, Category::Design);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_index_always_in_range() {
        let projects = sample();
        let mut state = GalleryState::default();
        for index in 0..projects.len() {
            state.select(&projects, index).unwrap();
            for step in 0..10 {
                if step % 3 == 0 {
                    state.prev();
                } else {
                    state.next();
                }
                let open = state.open().unwrap();
                assert!(open.image_index < open.image_count().max(1));
            }
        }
    }

    // =============================================
    // デシリアライズ時の範囲チェック
    // =============================================

    #[test]
    fn test_deserialize_rejects_image_index_out_of_range() {
        let json = r#"{"filter": "mobile", "open": {"index": 0, "image_index": 3, "image_count": 2}}"#;
        let result: std::result::Result<GalleryState, _> = serde_json::from_str(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Image index 3 out of range"));
    }

    #[test]
    fn test_deserialize_accepts_valid_state() {
        let projects = vec![project("A", Category::Mobile, 2)];
        let mut state = GalleryState::new(Category::Mobile);
        state.select(&projects, 0).unwrap();
        state.next();

        let json = serde_json::to_string(&state).unwrap();
        let restored: GalleryState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.image_index(), Some(1));
    }

    #[test]
    fn test_deserialize_zero_image_project() {
        let json = r#"{"filter": "design", "open": {"index": 4, "image_index": 0, "image_count": 0}}"#;
        let state: GalleryState = serde_json::from_str(json).unwrap();
        assert_eq!(state.image_index(), Some(0));
    }
}

//! ナビゲーション・テーマ・ドロワーの状態

use serde::{Deserialize, Serialize};
use std::fmt;

/// この幅以上ならナビゲーションバー、未満ならドロワー
pub const SCREEN_BREAKPOINT: f64 = 720.0;

/// ライトテーマになる時間帯 `[開始, 終了)`
pub const DAYTIME_HOURS: (u32, u32) = (6, 19);

/// この割合以上見えているセクションをアクティブとみなす
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.5;

/// ページのセクション（DOMのid）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Skill,
    Project,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skill,
        Section::Project,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skill => "skill",
            Section::Project => "project",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// レイアウトごとのメニュー項目（バー表示ではhomeを出さない）
    pub fn menu_items(layout: Layout) -> Vec<Section> {
        match layout {
            Layout::Narrow => Self::ALL.to_vec(),
            Layout::Wide => Self::ALL
                .into_iter()
                .filter(|s| *s != Section::Home)
                .collect(),
        }
    }

    /// スクロール時の揃え位置
    pub fn scroll_align(&self) -> ScrollAlign {
        match self {
            Section::Project => ScrollAlign::Start,
            _ => ScrollAlign::Center,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// `scrollIntoView` の block 指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
}

impl ScrollAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollAlign::Start => "start",
            ScrollAlign::Center => "center",
        }
    }
}

/// 画面幅から決まるレイアウト
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Narrow,
    Wide,
}

impl Layout {
    pub fn from_width(width: f64) -> Self {
        if width >= SCREEN_BREAKPOINT {
            Layout::Wide
        } else {
            Layout::Narrow
        }
    }
}

/// カラーテーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// 現地時刻の「時」から初期テーマを決める
    pub fn from_hour(hour: u32) -> Self {
        let (start, end) = DAYTIME_HOURS;
        if (start..end).contains(&hour) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// body要素に付けるクラス名
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// テーマ切替ボタンのアイコン
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

/// ナビゲーション全体の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub section: Section,
    pub theme: Theme,
    pub layout: Layout,
    pub drawer_open: bool,
}

impl NavState {
    pub fn new(hour: u32, width: f64) -> Self {
        Self {
            section: Section::Home,
            theme: Theme::from_hour(hour),
            layout: Layout::from_width(width),
            drawer_open: false,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// リサイズ時（ワイド表示になったらドロワーを閉じる）
    pub fn on_resize(&mut self, width: f64) {
        self.layout = Layout::from_width(width);
        if self.layout == Layout::Wide {
            self.drawer_open = false;
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// ドロワーとボタンの外側がクリックされた
    pub fn on_outside_click(&mut self) {
        self.close_drawer();
    }

    pub fn on_escape(&mut self) {
        self.close_drawer();
    }

    /// 閾値を超えて見えたセクション（最後に来たものが勝つ）
    pub fn on_section_visible(&mut self, section: Section) {
        self.section = section;
    }

    /// メニューからの移動（ドロワーを閉じ、揃え位置を返す）
    pub fn navigate(&mut self, section: Section) -> ScrollAlign {
        self.close_drawer();
        section.scroll_align()
    }

    pub fn shows_drawer(&self) -> bool {
        self.layout == Layout::Narrow
    }
}

/// フッターの「トップへ戻る」を出すか（ページ末尾付近）
pub fn is_near_bottom(scroll_top: f64, client_height: f64, scroll_height: f64) -> bool {
    scroll_top + client_height >= scroll_height * 0.96
}

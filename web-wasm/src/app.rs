//! メインアプリケーションコンポーネント

use crate::browser;
use crate::components::{About, Contact, Footer, Home, Menu, Project, Skill};
use leptos::prelude::*;
use portfolio_common::{Content, GalleryState, NavState};

/// 埋め込みコンテンツを読み込む（壊れていれば空で続行）
fn load_content() -> Content {
    match Content::bundled() {
        Ok(content) => {
            let issues = content.validate();
            for issue in &issues {
                log::warn!("Content issue: {}", issue);
            }
            log::debug!(
                "Loaded {} projects, {} skill groups, {} icons",
                content.projects.len(),
                content.skills.len(),
                content.icons.len()
            );
            content
        }
        Err(e) => {
            log::error!("Failed to load bundled content: {}", e);
            Content::default()
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let content = StoredValue::new(load_content());

    // ナビゲーションとギャラリーの状態はここで持ち、各セクションへ渡す
    let nav = RwSignal::new(NavState::new(browser::current_hour(), browser::viewport_width()));
    let gallery = RwSignal::new(GalleryState::default());

    Effect::new(move |_| {
        let theme = nav.with(|n| n.theme);
        browser::set_theme_class(theme.as_class());
    });

    view! {
        <Menu nav=nav content=content />
        <main>
            <Home content=content />
            <About content=content />
            <Skill content=content />
            <Project content=content gallery=gallery />
            <Contact />
        </main>
        <Footer content=content />
    }
}

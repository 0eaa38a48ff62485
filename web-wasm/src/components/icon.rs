//! アイコンコンポーネント
//!
//! 型付きのベクターアイコンをSVG要素として描画する（生のマークアップは挿入しない）。

use leptos::prelude::*;
use portfolio_common::Content;

#[component]
pub fn Icon(
    content: StoredValue<Content>,
    #[prop(into)] icon_key: String,
) -> impl IntoView {
    let Some(icon) = content.with_value(|c| c.icons.get(&icon_key).cloned()) else {
        log::warn!("Icon with key \"{}\" not found", icon_key);
        return None;
    };

    Some(view! {
        <svg
            class="icon"
            data-icon=icon_key
            viewBox=icon.view_box
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            {icon
                .paths
                .into_iter()
                .map(|path| {
                    view! {
                        <path
                            d=path.d
                            fill=path.fill
                            stroke=path.stroke
                            stroke-width=path.stroke_width
                        />
                    }
                })
                .collect_view()}
        </svg>
    })
}

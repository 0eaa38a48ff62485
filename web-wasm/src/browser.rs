//! ブラウザAPIの薄いラッパー
//!
//! イベント購読はすべてRAIIハンドルで持ち、コンポーネントのアンマウント時に解除される。

use gloo::events::EventListener;
use leptos::prelude::*;
use portfolio_common::ScrollAlign;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// 現在のリアクティブオーナーが破棄されるまで値を保持
pub fn hold_until_unmount<T: 'static>(value: T) {
    let slot = StoredValue::new_local(Some(value));
    on_cleanup(move || {
        let _ = slot.try_update_value(|held| {
            held.take();
        });
    });
}

/// windowのイベントを購読
pub fn listen_window<F>(event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    let Some(window) = web_sys::window() else {
        log::warn!("window unavailable, skipped {} listener", event_type);
        return;
    };
    hold_until_unmount(EventListener::new(&window, event_type, callback));
}

/// documentのイベントを購読
pub fn listen_document<F>(event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    let Some(document) = document() else {
        log::warn!("document unavailable, skipped {} listener", event_type);
        return;
    };
    hold_until_unmount(EventListener::new(&document, event_type, callback));
}

/// 破棄時に監視を止めるIntersectionObserver
struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// ページ内の全 `<section>` を監視し、閾値を超えて見えたもののidを通知
pub fn observe_sections<F>(threshold: f64, mut on_visible: F)
where
    F: FnMut(String) + 'static,
{
    let Some(document) = document() else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target().id());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };

    if let Ok(sections) = document.query_selector_all("section") {
        for i in 0..sections.length() {
            if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&section);
            }
        }
    }

    hold_until_unmount(SectionObserver {
        observer,
        _callback: callback,
    });
}

/// セクションまでスムーズスクロール
pub fn scroll_to_section(id: &str, align: ScrollAlign) {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("section #{} not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(match align {
        ScrollAlign::Start => ScrollLogicalPosition::Start,
        ScrollAlign::Center => ScrollLogicalPosition::Center,
    });
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// 要素を横方向にスムーズスクロール
pub fn scroll_element_to(element: &Element, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_to_with_scroll_to_options(&options);
}

/// (scrollY, clientHeight, scrollHeight)
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_top = window.scroll_y().ok()?;
    Some((
        scroll_top,
        f64::from(root.client_height()),
        f64::from(root.scroll_height()),
    ))
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// 現地時刻の「時」(0-23)
pub fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

/// `[0, 1)` の乱数
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// テーマクラスを付け替え（他のクラスは残す）
pub fn set_theme_class(class: &str) {
    let Some(body) = body() else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_2("light", "dark");
    let _ = classes.add_1(class);
}

pub fn toggle_body_class(class: &str, on: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

/// keydownイベントのキー名
pub fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(|k| k.key())
}

/// ボタン扱いの要素を押したとみなすキー
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// イベントの発生元がいずれかの要素の内側か
pub fn event_within(event: &Event, elements: &[Option<Element>]) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    elements
        .iter()
        .flatten()
        .any(|element| element.contains(Some(&target)))
}

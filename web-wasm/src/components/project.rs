//! プロジェクトセクション
//!
//! カテゴリフィルタ、カード一覧、詳細ビュー（画像スライダー付き）。
//! 詳細を開いている間は body に `no-scroll` を付けて背面のスクロールを止める。

use crate::browser;
use crate::components::icon::Icon;
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;
use portfolio_common::profile::PROJECT_INFO;
use portfolio_common::{
    format_description, visible_indices, Category, Content, GalleryState, KeyedList,
    ProjectRecord, Segment,
};

const NO_SCROLL_CLASS: &str = "no-scroll";

#[component]
pub fn Project(content: StoredValue<Content>, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let is_open = Memo::new(move |_| gallery.with(|g| g.is_open()));

    Effect::new(move |_| {
        browser::toggle_body_class(NO_SCROLL_CLASS, is_open.get());
    });
    on_cleanup(|| browser::toggle_body_class(NO_SCROLL_CLASS, false));

    browser::listen_window("keydown", move |ev| {
        if browser::key_of(ev).as_deref() == Some("Escape") && is_open.get_untracked() {
            gallery.update(|g| g.close());
        }
    });

    view! {
        <section id="project">
            <h2>"Project"</h2>

            <p class="content">{PROJECT_INFO}</p>

            <ProjectFilter content=content gallery=gallery />
            <ProjectList content=content gallery=gallery />

            <Show when=move || is_open.get()>
                <ProjectDetail content=content gallery=gallery />
            </Show>
        </section>
    }
}

#[component]
fn ProjectFilter(content: StoredValue<Content>, gallery: RwSignal<GalleryState>) -> impl IntoView {
    view! {
        <div id="project-filter" role="tablist">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    let is_active = move || gallery.with(|g| g.filter == category);
                    view! {
                        <button
                            role="tab"
                            class:active=is_active
                            aria-selected=move || is_active().to_string()
                            aria-label=format!("Show {} projects", category)
                            on:click=move |_| gallery.update(|g| g.set_filter(category))
                        >
                            <Icon content=content icon_key=category.as_str() />
                            <span>{category.as_str()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectList(content: StoredValue<Content>, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let indices = Memo::new(move |_| {
        let filter = gallery.with(|g| g.filter);
        content.with_value(|c| visible_indices(&c.projects, filter))
    });

    view! {
        <ul id="project-list">
            <For each=move || indices.get() key=|index| *index let:index>
                <ProjectCard content=content gallery=gallery index=index />
            </For>
        </ul>
    }
}

#[component]
fn ProjectCard(
    content: StoredValue<Content>,
    gallery: RwSignal<GalleryState>,
    index: usize,
) -> Option<impl IntoView> {
    let project = content.with_value(|c| c.projects.get(index).cloned())?;

    let open = move || {
        content.with_value(|c| {
            gallery.update(|g| {
                if let Err(e) = g.select(&c.projects, index) {
                    log::warn!("Cannot open project: {}", e);
                }
            })
        })
    };

    Some(view! {
        <li
            class="project-card"
            role="button"
            tabindex="0"
            aria-label=format!("Open details for {}", project.title)
            on:click=move |_| open()
            on:keydown=move |ev: KeyboardEvent| {
                if browser::is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    open();
                }
            }
        >
            <img src=project.thumbnail.clone() alt=format!("{} thumbnail", project.title) />
            <div class="project-card-text">
                <h4>{project.title.clone()}</h4>
                <div class="project-card-icons svg-flex">
                    {project
                        .iconkey
                        .iter()
                        .map(|key| view! { <Icon content=content icon_key=key.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </li>
    })
}

/// 選択中のプロジェクトの詳細
///
/// 選択が変わるたびに中身を作り直す。
#[component]
fn ProjectDetail(content: StoredValue<Content>, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let selected = Memo::new(move |_| gallery.with(|g| g.selected()));

    view! {
        <div id="project-detail" role="dialog" aria-modal="true">
            {move || {
                let project = selected
                    .get()
                    .and_then(|index| content.with_value(|c| c.projects.get(index).cloned()))?;
                Some(view! { <ProjectDetailBody content=content gallery=gallery project=project /> })
            }}
        </div>
    }
}

#[component]
fn ProjectDetailBody(
    content: StoredValue<Content>,
    gallery: RwSignal<GalleryState>,
    project: ProjectRecord,
) -> impl IntoView {
    let demo = project.demo_link().map(str::to_string);
    let repo = project.repo_link().map(str::to_string);

    view! {
        <div class="detail-header">
            <button
                class="detail-close"
                aria-label="Close project details"
                on:click=move |_| gallery.update(|g| g.close())
            >
                <Icon content=content icon_key="arrow-left" />
            </button>
            <h2>{project.title.clone()}</h2>
            <h3>{project.short.clone()}</h3>
        </div>

        <ImageSlider
            content=content
            gallery=gallery
            images=project.images.clone()
            title=project.title.clone()
            has_carousel=project.has_carousel()
        />

        <div class="detail-body">
            <Description text=project.description.clone() />

            <div class="detail-icons svg-flex">
                {project
                    .iconkey
                    .iter()
                    .map(|key| view! { <Icon content=content icon_key=key.clone() /> })
                    .collect_view()}
            </div>

            <KeyedItems heading="Features" items=project.feature.clone() />
            <KeyedItems heading="Tech Stack" items=project.stack.clone() />
            <ProjectLinks content=content demo=demo repo=repo />
        </div>
    }
}

#[component]
fn ImageSlider(
    content: StoredValue<Content>,
    gallery: RwSignal<GalleryState>,
    images: Vec<String>,
    title: String,
    /// 画像が2枚以上の時だけ前後ボタンとサムネイルを出す
    has_carousel: bool,
) -> impl IntoView {
    let slider_ref = NodeRef::<html::Div>::new();
    let image_index = Memo::new(move |_| gallery.with(|g| g.image_index().unwrap_or(0)));

    // 表示中の画像までスライダーを送る
    Effect::new(move |_| {
        let index = image_index.get();
        if let Some(slider) = slider_ref.get() {
            let width = f64::from(slider.offset_width());
            browser::scroll_element_to(&slider, width * index as f64);
        }
    });

    let slides = images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            view! { <img src=src.clone() alt=format!("{} screenshot {}", title, i + 1) /> }
        })
        .collect_view();

    let controls = has_carousel.then(|| {
        view! {
            <button
                class="slider-prev"
                aria-label="Previous image"
                on:click=move |_| gallery.update(|g| g.prev())
            >
                <Icon content=content icon_key="arrow-left" />
            </button>
            <button
                class="slider-next"
                aria-label="Next image"
                on:click=move |_| gallery.update(|g| g.next())
            >
                <Icon content=content icon_key="arrow-right" />
            </button>
        }
    });

    let thumbnails = has_carousel.then(|| {
        view! {
            <div class="minimizer">
                {images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <img
                                src=src.clone()
                                alt=format!("Show image {}", i + 1)
                                class:active=move || image_index.get() == i
                                on:click=move |_| {
                                    gallery.update(|g| {
                                        if let Err(e) = g.select_image(i) {
                                            log::warn!("Cannot show image: {}", e);
                                        }
                                    })
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="slider-container">
            <div class="slider" node_ref=slider_ref>
                {slides}
            </div>
            {controls}
        </div>
        {thumbnails}
    }
}

/// 説明文（リンクと強調を含む）
#[component]
fn Description(text: String) -> impl IntoView {
    view! {
        <p class="description">
            {format_description(&text).into_iter().map(render_segment).collect_view()}
        </p>
    }
}

fn render_segment(segment: Segment) -> AnyView {
    match segment {
        Segment::Text(text) => text.into_any(),
        Segment::Link { label, url } => view! {
            <a class="description-link" href=url target="_blank" rel="noopener noreferrer">
                {label.into_iter().map(render_segment).collect_view()}
            </a>
        }
        .into_any(),
        Segment::Emphasis(inner) => {
            view! { <strong>{inner.into_iter().map(render_segment).collect_view()}</strong> }
                .into_any()
        }
        Segment::LineBreak => view! { <br /> }.into_any(),
    }
}

#[component]
fn KeyedItems(heading: &'static str, items: KeyedList) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="keyed-items">
                <h4>{heading}</h4>
                <ul>
                    {items
                        .0
                        .into_iter()
                        .map(|(key, value)| view! { <li><strong>{key}": "</strong>{value}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    })
}

/// デモ・リポジトリへのリンク（あるものだけ）
#[component]
fn ProjectLinks(
    content: StoredValue<Content>,
    demo: Option<String>,
    repo: Option<String>,
) -> impl IntoView {
    view! {
        <div class="project-links svg-flex">
            {demo
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" aria-label="Open live demo">
                            <Icon content=content icon_key="link" />
                            "Demo"
                        </a>
                    }
                })}
            {repo
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" aria-label="View source code">
                            <Icon content=content icon_key="github" />
                            "Repository"
                        </a>
                    }
                })}
        </div>
    }
}

//! 説明文の整形
//!
//! プロジェクト説明文のトークンを型付きセグメントに変換する。
//! 1. `{label[url]}` → リンク
//! 2. `[text]` → 強調（リンクは1つの塊として扱うので、強調がリンクを囲める）
//! 3. 改行 → 改行セグメント（リンクのラベルや強調の中も含む）
//!
//! リンクを先に処理する順序は結果に影響するため変えないこと。

use regex::Regex;

lazy_static::lazy_static! {
    static ref LINK_TOKEN: Regex = Regex::new(r"\{([^\[]+)\[([^\]]+)\]\}").unwrap();
}

const EMPHASIS_OPEN: char = '[';
const EMPHASIS_CLOSE: char = ']';

/// 整形済みテキストの1片
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// ラベルは Text / LineBreak のみ
    Link { label: Vec<Segment>, url: String },
    Emphasis(Vec<Segment>),
    LineBreak,
}

/// リンク抽出後の1文字またはリンク1個
#[derive(Debug, Clone, Copy)]
enum Piece<'a> {
    Char(char),
    Link { label: &'a str, url: &'a str },
}

/// 説明文をセグメント列に変換
///
/// # Examples
/// ```
/// use portfolio_common::{format_description, Segment};
///
/// let segments = format_description("See {demo[https://x.test]}");
/// assert!(segments.contains(&Segment::Link {
///     label: vec![Segment::Text("demo".into())],
///     url: "https://x.test".into(),
/// }));
/// ```
pub fn format_description(text: &str) -> Vec<Segment> {
    let mut pieces = Vec::with_capacity(text.len());
    let mut last = 0;

    for caps in LINK_TOKEN.captures_iter(text) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        pieces.extend(text[last..whole.start()].chars().map(Piece::Char));
        pieces.push(Piece::Link {
            label: label.as_str(),
            url: url.as_str(),
        });
        last = whole.end();
    }
    pieces.extend(text[last..].chars().map(Piece::Char));

    emphasize(&pieces)
}

/// `[` から次の `]` までを強調にする（中身が空なら対象外、左から順に重ならない）
fn emphasize(pieces: &[Piece]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < pieces.len() {
        if !matches!(pieces[i], Piece::Char(EMPHASIS_OPEN)) {
            i += 1;
            continue;
        }
        let Some(offset) = pieces[i + 1..]
            .iter()
            .position(|p| matches!(p, Piece::Char(EMPHASIS_CLOSE)))
        else {
            // 閉じ括弧がもう無い
            break;
        };
        let close = i + 1 + offset;
        if close == i + 1 {
            i += 1;
            continue;
        }

        push_pieces(&pieces[plain_start..i], &mut segments);
        let mut inner = Vec::new();
        push_pieces(&pieces[i + 1..close], &mut inner);
        segments.push(Segment::Emphasis(inner));

        i = close + 1;
        plain_start = i;
    }
    push_pieces(&pieces[plain_start..], &mut segments);

    segments
}

fn push_pieces(pieces: &[Piece], segments: &mut Vec<Segment>) {
    let mut buffer = String::new();
    for piece in pieces {
        match piece {
            Piece::Char(c) => buffer.push(*c),
            Piece::Link { label, url } => {
                push_text(&buffer, segments);
                buffer.clear();
                let mut label_segments = Vec::new();
                push_text(label, &mut label_segments);
                segments.push(Segment::Link {
                    label: label_segments,
                    url: url.to_string(),
                });
            }
        }
    }
    push_text(&buffer, segments);
}

fn push_text(text: &str, segments: &mut Vec<Segment>) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            segments.push(Segment::LineBreak);
        }
        if !line.is_empty() {
            segments.push(Segment::Text(line.to_string()));
        }
    }
}

/// セグメント列をHTMLに変換（テキストはエスケープ済み）
pub fn segments_to_html(segments: &[Segment]) -> String {
    let mut html = String::new();

    for segment in segments {
        match segment {
            Segment::Text(text) => html.push_str(&escape_html(text)),
            Segment::Link { label, url } => {
                html.push_str(&format!(
                    "<a class=\"description-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    escape_html(url),
                    segments_to_html(label)
                ));
            }
            Segment::Emphasis(inner) => {
                html.push_str("<strong>");
                html.push_str(&segments_to_html(inner));
                html.push_str("</strong>");
            }
            Segment::LineBreak => html.push_str("<br/>"),
        }
    }

    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `{key}` プレースホルダを値で置換（各キーの最初の出現のみ）
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut filled = template.to_string();
    for (key, value) in values {
        filled = filled.replacen(&format!("{{{}}}", key), value, 1);
    }
    filled
}

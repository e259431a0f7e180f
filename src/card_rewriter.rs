use std::fmt;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// @module: Card fragment recognition and restyling

// @const: Legacy card layout regex (time column, text column, trailing image)
static CARD_LAYOUT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(<div class="flex items-start space-x-6 bg-white p-6 rounded-lg shadow-lg border-l-4 border-blue-500">)"#,
        r#"\s*<div class="text-center w-24 flex-shrink-0">"#,
        r#"\s*<span class="text-2xl font-bold text-blue-600">([^<]+)</span>"#,
        r#"\s*<span class="text-gray-500">([^<]+)</span>"#,
        r#"\s*</div>"#,
        r#"\s*<div class="flex-1">"#,
        r#"\s*<h3 class="text-xl font-bold text-gray-800 mb-2">([^<]+)</h3>"#,
        r#"\s*<p class="text-gray-500 text-sm mb-3">([^<]+)</p>"#,
        r#"\s*<span class="text-sm font-medium text-blue-600 bg-blue-100 py-1 px-3 rounded-full">([^<]+)</span>"#,
        r#"\s*</div>"#,
        r#"\s*<div class="flex-shrink-0">"#,
        r#"\s*<img class="h-20 w-20 rounded-full object-cover shadow-md" src="([^"]+)" alt="([^"]+)">"#,
        r#"\s*</div>"#,
    ))
    .unwrap()
});

// @const: Header + time + speaker block regex (both inline and boxed time sub-shapes)
static SPEAKER_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(<div class="flex-1">)"#,
        r#"\s*<div class="flex items-center justify-between mb-2">"#,
        r#"\s*<h3 class="text-(?:xl|lg) font-bold text-gray-800">([^<]+)</h3>"#,
        r#"\s*<div class="text-right ml-4 flex-shrink-0">"#,
        r#"\s*(?:<span class="text-lg font-bold text-(?:blue|green)-600">([^<]+)</span>"#,
        r#"|<div class="bg-(?:blue|green)-50 px-3 py-1 rounded-lg">"#,
        r#"[^<]*<span class="text-sm font-bold text-(?:blue|green)-600">([^<]+)</span>"#,
        r#"[^<]*<span class="text-sm font-bold text-(?:blue|green)-600">([^<]+)</span>"#,
        r#"[^<]*</div>)"#,
        r#"\s*</div>"#,
        r#"\s*</div>"#,
        r#"\s*<p class="text-gray-500 text-sm mb-3">Ponente: <span class="font-semibold text-gray-700">([^<]+)</span></p>"#,
        r#"\s*<span class="text-sm font-medium text-(?:blue|green)-600 bg-(?:blue|green)-100 py-1 px-3 rounded-full">(Doctorado|Maestría)</span>"#,
    ))
    .unwrap()
});

/// Academic category tag carried by a card.
///
/// Only the two tags present on the site are recognized; a fragment with any
/// other tag never matches and is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Doctorado,
    Maestria,
}

impl Category {
    // @returns: Category for a tag label, None for unrecognized tags
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Doctorado" => Some(Self::Doctorado),
            "Maestría" => Some(Self::Maestria),
            _ => None,
        }
    }

    /// Abbreviation prefixed to the speaker name
    pub fn academic_title(&self) -> &'static str {
        match self {
            Self::Doctorado => "MC.",
            Self::Maestria => "Lic.",
        }
    }

    /// Color family used when re-emitting the fragment
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Doctorado => "blue",
            Self::Maestria => "blue",
        }
    }

    /// Tag label as it appears in the markup
    pub fn label(&self) -> &'static str {
        match self {
            Self::Doctorado => "Doctorado",
            Self::Maestria => "Maestría",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// @struct: Field set extracted from one legacy card fragment
#[derive(Debug)]
struct CardFields<'a> {
    open_tag: &'a str,
    time_start: &'a str,
    time_end: &'a str,
    title: &'a str,
    subtitle: &'a str,
    category: &'a str,
    img_src: &'a str,
    img_alt: &'a str,
}

impl<'a> CardFields<'a> {
    // @creates: Complete field set, or None when any capture is missing
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        Some(CardFields {
            open_tag: caps.get(1)?.as_str(),
            time_start: caps.get(2)?.as_str(),
            time_end: caps.get(3)?.as_str(),
            title: caps.get(4)?.as_str(),
            subtitle: caps.get(5)?.as_str(),
            category: caps.get(6)?.as_str(),
            img_src: caps.get(7)?.as_str(),
            img_alt: caps.get(8)?.as_str(),
        })
    }

    /// Re-emit the fragment with the image first and the time range in the
    /// header row. Indentation is fixed so reruns produce byte-identical
    /// output.
    fn render(&self) -> String {
        format!(
            r#"{open_tag}
                        <div class="flex-shrink-0">
                            <img class="h-20 w-20 rounded-full object-cover shadow-md" src="{img_src}" alt="{img_alt}">
                        </div>
                        <div class="flex-1">
                            <div class="flex items-center justify-between mb-2">
                                <h3 class="text-xl font-bold text-gray-800">{title}</h3>
                                <div class="text-right ml-4 flex-shrink-0">
                                    <span class="text-lg font-bold text-blue-600">{time_start} - {time_end}</span>
                                </div>
                            </div>
                            <p class="text-gray-500 text-sm mb-3">{subtitle}</p>
                            <span class="text-sm font-medium text-blue-600 bg-blue-100 py-1 px-3 rounded-full">{category}</span>
                        </div>"#,
            open_tag = self.open_tag,
            img_src = self.img_src,
            img_alt = self.img_alt,
            title = self.title,
            time_start = self.time_start,
            time_end = self.time_end,
            subtitle = self.subtitle,
            category = self.category,
        )
    }
}

/// Time label sub-shape found inside a speaker block.
#[derive(Debug, PartialEq, Eq)]
enum TimeLabel<'a> {
    /// Single inline text label, e.g. "09:00 - 10:00"
    Inline(&'a str),
    /// Separate start and end elements inside a rounded box
    Boxed { start: &'a str, end: &'a str },
}

impl<'a> TimeLabel<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        if let Some(label) = caps.get(3) {
            return Some(TimeLabel::Inline(label.as_str()));
        }
        match (caps.get(4), caps.get(5)) {
            (Some(start), Some(end)) => Some(TimeLabel::Boxed {
                start: start.as_str(),
                end: end.as_str(),
            }),
            _ => None,
        }
    }

    /// Normalize to the boxed two-part markup. An inline label that does not
    /// split into exactly two " - " parts is kept inline.
    fn render(&self, color: &str) -> String {
        match self {
            TimeLabel::Inline(label) => {
                let parts: Vec<&str> = label.split(" - ").collect();
                if parts.len() == 2 {
                    boxed_time_markup(color, parts[0], parts[1])
                } else {
                    format!(
                        r#"<span class="text-lg font-bold text-{}-600">{}</span>"#,
                        color, label
                    )
                }
            }
            TimeLabel::Boxed { start, end } => boxed_time_markup(color, start, end),
        }
    }
}

// Indentation matches the insertion point inside the header row.
fn boxed_time_markup(color: &str, start: &str, end: &str) -> String {
    format!(
        r#"<div class="bg-{color}-50 px-3 py-1 rounded-lg">
                                        <span class="text-sm font-bold text-{color}-600">{start}</span>
                                        <span class="text-xs text-{color}-500"> - </span>
                                        <span class="text-sm font-bold text-{color}-600">{end}</span>
                                    </div>"#,
        color = color,
        start = start,
        end = end,
    )
}

/// Restructure every legacy card fragment: image block first, time range in
/// the header row beside the title, original time column removed.
///
/// Fragments that do not match the legacy shape are preserved verbatim; a
/// document with zero matches is returned unchanged.
pub fn rewrite_layout(document: &str) -> String {
    CARD_LAYOUT_REGEX
        .replace_all(document, |caps: &Captures| match CardFields::from_captures(caps) {
            Some(fields) => fields.render(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Normalize speaker blocks: both time-label sub-shapes become the boxed
/// two-part shape, and the speaker name is prefixed with the academic title
/// selected by the category tag.
///
/// Fragments with an unrecognized category tag never match and stay as-is.
pub fn rewrite_speaker_block(document: &str) -> String {
    SPEAKER_BLOCK_REGEX
        .replace_all(document, |caps: &Captures| {
            let (Some(open_tag), Some(title), Some(speaker), Some(tag)) =
                (caps.get(1), caps.get(2), caps.get(6), caps.get(7))
            else {
                return caps[0].to_string();
            };
            let Some(category) = Category::from_label(tag.as_str()) else {
                return caps[0].to_string();
            };
            let Some(time_label) = TimeLabel::from_captures(caps) else {
                return caps[0].to_string();
            };

            let color = category.color_token();
            format!(
                r#"{open_tag}
                            <div class="flex items-center justify-between mb-2">
                                <h3 class="text-lg font-bold text-gray-800">{title}</h3>
                                <div class="text-right ml-4 flex-shrink-0">
                                    {time_label}
                                </div>
                            </div>
                            <p class="text-gray-500 text-sm mb-3">Ponente: <span class="font-semibold text-gray-700">{academic_title} {speaker}</span></p>
                            <span class="text-sm font-medium text-{color}-600 bg-{color}-100 py-1 px-3 rounded-full">{category}</span>"#,
                open_tag = open_tag.as_str(),
                title = title.as_str(),
                time_label = time_label.render(color),
                academic_title = category.academic_title(),
                speaker = speaker.as_str(),
                color = color,
                category = category.label(),
            )
        })
        .into_owned()
}

/// Apply both passes in their fixed order: layout restructuring, then
/// speaker-block normalization.
pub fn restyle_document(document: &str) -> String {
    let layout_matches = legacy_card_count(document);
    let restructured = rewrite_layout(document);

    let speaker_matches = speaker_block_count(&restructured);
    debug!(
        "Matched {} legacy card(s), {} speaker block(s)",
        layout_matches, speaker_matches
    );

    rewrite_speaker_block(&restructured)
}

/// Number of fragments still in the legacy card shape
pub fn legacy_card_count(document: &str) -> usize {
    CARD_LAYOUT_REGEX.find_iter(document).count()
}

/// Number of fragments in the header + time + speaker shape
pub fn speaker_block_count(document: &str) -> usize {
    SPEAKER_BLOCK_REGEX.find_iter(document).count()
}

//! Clue extraction from visualization detail payloads.
//!
//! # Responsibility
//! - Project loosely-typed tooltip/detail payloads into uniform clue fields.
//! - Keep the per-field candidate order explicit and auditable.
//!
//! # Invariants
//! - Extraction is deterministic and never fails; a mostly-empty payload
//!   still yields a usable clue with stated defaults.
//! - Empty or whitespace-only field values count as absent.

use crate::model::item::ClueKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default title when no candidate field is present.
pub const DEFAULT_CLUE_TITLE: &str = "未命名线索";
/// Default content when no candidate field is present.
pub const DEFAULT_CLUE_CONTENT: &str = "无详细描述";

/// Raw detail payload collected from an arbitrary visual component.
///
/// Known fields cover the shared vocabulary of the source cards; anything
/// else lands in `extra` and is preserved verbatim for forward
/// compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CluePayload {
    pub title: Option<String>,
    pub name: Option<String>,
    /// Domain-name field used by river cards.
    pub river: Option<String>,
    pub period: Option<String>,
    pub sub_label: Option<String>,
    pub dynasty: Option<String>,
    /// Number or string in source payloads.
    pub year: Option<Value>,
    pub note: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub action: Option<String>,
    pub functions: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Uniform clue fields produced by extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedClue {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub tags: Vec<String>,
}

type FieldPick = fn(&CluePayload) -> Option<String>;

/// Title candidates, in priority order.
const TITLE_CANDIDATES: &[FieldPick] = &[
    |p| text(&p.title),
    |p| text(&p.river),
    |p| text(&p.name),
];

/// Subtitle candidates: explicit period labels first, then a dynasty/year
/// composition.
const SUBTITLE_CANDIDATES: &[FieldPick] = &[
    |p| text(&p.period),
    |p| text(&p.sub_label),
    |p| match (text(&p.dynasty), year_text(p)) {
        (Some(dynasty), Some(year)) => Some(format!("{dynasty} · {year}")),
        _ => None,
    },
    |p| text(&p.dynasty),
];

/// Content candidates: free-form notes first, then an action summary.
const CONTENT_CANDIDATES: &[FieldPick] = &[
    |p| text(&p.note),
    |p| text(&p.description),
    |p| text(&p.content),
    |p| {
        text(&p.action).map(|action| match text(&p.functions) {
            Some(functions) => format!("{action} - {functions}"),
            None => action,
        })
    },
];

fn text(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn year_text(payload: &CluePayload) -> Option<String> {
    match payload.year.as_ref()? {
        Value::String(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Value::String(_) | Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn first_present(payload: &CluePayload, candidates: &[FieldPick]) -> Option<String> {
    candidates.iter().find_map(|pick| pick(payload))
}

/// Projects a raw payload into uniform clue fields for the given kind.
///
/// Tags always start with the kind label; `dynasty` and `action` are
/// appended when present.
pub fn extract_clue(payload: &CluePayload, kind: ClueKind) -> ExtractedClue {
    let title = first_present(payload, TITLE_CANDIDATES)
        .unwrap_or_else(|| DEFAULT_CLUE_TITLE.to_string());
    let subtitle = first_present(payload, SUBTITLE_CANDIDATES).unwrap_or_default();
    let content = first_present(payload, CONTENT_CANDIDATES)
        .unwrap_or_else(|| DEFAULT_CLUE_CONTENT.to_string());

    let mut tags = vec![kind.tag_label().to_string()];
    if let Some(dynasty) = text(&payload.dynasty) {
        tags.push(dynasty);
    }
    if let Some(action) = text(&payload.action) {
        tags.push(action);
    }

    ExtractedClue {
        title,
        subtitle,
        content,
        tags,
    }
}

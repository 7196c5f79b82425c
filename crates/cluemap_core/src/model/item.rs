//! Collection item domain model.
//!
//! # Responsibility
//! - Define the persisted `InspirationItem` record and its kind taxonomy.
//! - Provide partial shapes for create (`ItemDraft`) and update
//!   (`ItemUpdate`) flows.
//!
//! # Invariants
//! - `id` is stable once created and never reused.
//! - No two live items share the same `(title, kind)` pair; the store
//!   enforces this at insertion time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default title for items created without one.
pub const DEFAULT_ITEM_TITLE: &str = "未命名";
/// Default source label for items created without one.
pub const DEFAULT_SOURCE_LABEL: &str = "药材库";

/// Every collectible kind, serialized as the wire `type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Herb,
    Paper,
    Chart,
    Text,
    Video,
    ClueRiver,
    ClueClimate,
    ClueEco,
    ClueEvent,
    ClueCity,
}

impl ItemKind {
    /// Wire string, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Herb => "herb",
            Self::Paper => "paper",
            Self::Chart => "chart",
            Self::Text => "text",
            Self::Video => "video",
            Self::ClueRiver => "clue_river",
            Self::ClueClimate => "clue_climate",
            Self::ClueEco => "clue_eco",
            Self::ClueEvent => "clue_event",
            Self::ClueCity => "clue_city",
        }
    }
}

/// The five clue kinds collectible from visualization detail payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueKind {
    River,
    Climate,
    Eco,
    Event,
    City,
}

impl ClueKind {
    pub const ALL: [ClueKind; 5] = [
        ClueKind::River,
        ClueKind::Climate,
        ClueKind::Eco,
        ClueKind::Event,
        ClueKind::City,
    ];

    /// Corresponding collection item kind.
    pub fn item_kind(self) -> ItemKind {
        match self {
            Self::River => ItemKind::ClueRiver,
            Self::Climate => ItemKind::ClueClimate,
            Self::Eco => ItemKind::ClueEco,
            Self::Event => ItemKind::ClueEvent,
            Self::City => ItemKind::ClueCity,
        }
    }

    /// Tag label: the kind name with the `clue_` prefix stripped.
    pub fn tag_label(self) -> &'static str {
        match self {
            Self::River => "river",
            Self::Climate => "climate",
            Self::Eco => "eco",
            Self::Event => "event",
            Self::City => "city",
        }
    }

    /// Human-facing category name used in board summaries.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::River => "河流",
            Self::Climate => "气候",
            Self::Eco => "生态",
            Self::Event => "事件",
            Self::City => "城势",
        }
    }
}

/// One curated item on the collection board.
///
/// Field names on the wire match the persisted/exported JSON of the board
/// (`sourceUrl`, `sourceType`, camelCase throughout). Optional presentation
/// fields are stored as filled-in defaults rather than `None`, so persisted
/// blobs stay uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspirationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub image: String,
    pub source_url: String,
    /// Label of the originating page/component (wire name `sourceType`).
    #[serde(rename = "sourceType")]
    pub source_label: String,
    pub tags: Vec<String>,
    pub metadata: Map<String, Value>,
    /// Creation time, unix epoch milliseconds.
    pub timestamp: i64,
}

impl Default for InspirationItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: ItemKind::Text,
            title: DEFAULT_ITEM_TITLE.to_string(),
            subtitle: String::new(),
            content: String::new(),
            image: String::new(),
            source_url: String::new(),
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            tags: Vec::new(),
            metadata: Map::new(),
            timestamp: 0,
        }
    }
}

/// Partial input for `CollectionStore::add_item`.
///
/// Absent fields receive the stated defaults when the item is created.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub kind: Option<ItemKind>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub source_url: Option<String>,
    pub source_label: Option<String>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<Map<String, Value>>,
}

/// Partial input for `CollectionStore::update_item`; `Some` fields are
/// shallow-merged over the existing item. `id` and `timestamp` are not
/// updatable.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub kind: Option<ItemKind>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub source_url: Option<String>,
    pub source_label: Option<String>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<Map<String, Value>>,
}

//! Collection board store.
//!
//! # Responsibility
//! - Hold the ordered in-memory collection of curated items.
//! - Enforce `(title, kind)` uniqueness at insertion time.
//! - Persist the full item list through a storage backend after every
//!   mutation.
//!
//! # Invariants
//! - Items are ordered most-recently-added first.
//! - Save failures are logged and do not roll back the in-memory state.
//! - Load failures (absent or corrupt blob) fall back to an empty board.

use crate::clue::extract::{extract_clue, CluePayload};
use crate::model::item::{
    ClueKind, InspirationItem, ItemDraft, ItemKind, ItemUpdate, DEFAULT_ITEM_TITLE,
    DEFAULT_SOURCE_LABEL,
};
use crate::store::backend::StorageBackend;
use crate::store::notice::{LogNoticeSink, Notice, NoticeSink};
use chrono::{Local, SecondsFormat, Utc};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Fixed key the serialized item list lives under.
pub const STORAGE_KEY: &str = "inspiration_items";
/// Version stamp written into export envelopes.
pub const EXPORT_VERSION: &str = "1.0";

/// Store-level error for export/import flows.
#[derive(Debug)]
pub enum StoreError {
    /// Import payload is not JSON with an `items` list.
    Format(String),
    /// Snapshot serialization failed.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(message) => write!(f, "invalid import payload: {message}"),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Format(_) => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

/// Export artifact: the item list wrapped with provenance metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    /// ISO-8601 export timestamp.
    pub export_time: String,
    pub version: String,
    pub items: Vec<InspirationItem>,
}

/// One row of the category summary shown above the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub label: &'static str,
    /// `None` for the "all items" row.
    pub kind: Option<ItemKind>,
    pub count: usize,
}

/// Collection store: an explicit context object owned by the caller.
///
/// Lifecycle: `open` loads persisted state (or starts empty), every mutating
/// operation persists synchronously, `flush` re-saves for teardown.
pub struct CollectionStore<S: StorageBackend> {
    items: Vec<InspirationItem>,
    storage: S,
    sink: Box<dyn NoticeSink>,
}

impl<S: StorageBackend> CollectionStore<S> {
    /// Opens a store over `storage` with the logging notice sink.
    pub fn open(storage: S) -> Self {
        Self::open_with_sink(storage, Box::new(LogNoticeSink))
    }

    /// Opens a store over `storage`, routing notices to `sink`.
    ///
    /// A corrupt persisted blob is logged and discarded; the board starts
    /// empty rather than failing the session.
    pub fn open_with_sink(storage: S, sink: Box<dyn NoticeSink>) -> Self {
        let items = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<InspirationItem>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!(
                        "event=board_load module=store status=corrupt error={err} action=reset"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=board_load module=store status=error error={err} action=reset");
                Vec::new()
            }
        };

        debug!(
            "event=board_load module=store status=ok items={}",
            items.len()
        );
        Self {
            items,
            storage,
            sink,
        }
    }

    /// All items, most-recently-added first.
    pub fn items(&self) -> &[InspirationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with this `(title, kind)` pair is already collected.
    pub fn is_collected(&self, title: &str, kind: ItemKind) -> bool {
        self.items
            .iter()
            .any(|item| item.title == title && item.kind == kind)
    }

    /// Whether a clue with this title and kind is already on the board.
    pub fn is_clue_collected(&self, title: &str, kind: ClueKind) -> bool {
        self.is_collected(title, kind.item_kind())
    }

    /// Items of one kind; `None` returns the full board.
    pub fn items_by_kind(&self, kind: Option<ItemKind>) -> Vec<&InspirationItem> {
        match kind {
            None => self.items.iter().collect(),
            Some(kind) => self.items.iter().filter(|item| item.kind == kind).collect(),
        }
    }

    /// Category summary: the "all" row followed by the five clue categories.
    pub fn category_counts(&self) -> Vec<CategorySummary> {
        let mut rows = vec![CategorySummary {
            label: "全部",
            kind: None,
            count: self.items.len(),
        }];
        for clue in ClueKind::ALL {
            let kind = clue.item_kind();
            rows.push(CategorySummary {
                label: clue.display_name(),
                kind: Some(kind),
                count: self.items.iter().filter(|item| item.kind == kind).count(),
            });
        }
        rows
    }

    /// Adds one item to the front of the board.
    ///
    /// Duplicate `(title, kind)` pairs are rejected with a warning notice;
    /// state is untouched and `false` is returned. Absent draft fields
    /// receive their stated defaults.
    pub fn add_item(&mut self, draft: ItemDraft) -> bool {
        let kind = draft.kind.unwrap_or(ItemKind::Text);
        let title = draft
            .title
            .unwrap_or_else(|| DEFAULT_ITEM_TITLE.to_string());

        if self.is_collected(&title, kind) {
            self.sink.notify(&Notice::warning("已经收藏过此内容"));
            return false;
        }

        let item = InspirationItem {
            id: generate_id(),
            kind,
            title,
            subtitle: draft.subtitle.unwrap_or_default(),
            content: draft.content.unwrap_or_default(),
            image: draft.image.unwrap_or_default(),
            source_url: draft.source_url.unwrap_or_default(),
            source_label: draft
                .source_label
                .unwrap_or_else(|| DEFAULT_SOURCE_LABEL.to_string()),
            tags: draft.tags.unwrap_or_default(),
            metadata: draft.metadata.unwrap_or_default(),
            timestamp: Utc::now().timestamp_millis(),
        };

        let message = format!("已收藏「{}」", item.title);
        self.items.insert(0, item);
        self.save();
        self.sink.notify(&Notice::success(message));
        true
    }

    /// Extracts a clue from a raw payload and collects it.
    ///
    /// The raw payload is preserved under `metadata.raw`. Returns `false`
    /// when the clue was already collected.
    pub fn collect_clue(
        &mut self,
        payload: &CluePayload,
        kind: ClueKind,
        source_label: &str,
    ) -> bool {
        let clue = extract_clue(payload, kind);
        let mut metadata = serde_json::Map::new();
        metadata.insert(
            "raw".to_string(),
            serde_json::to_value(payload).unwrap_or(Value::Null),
        );

        self.add_item(ItemDraft {
            kind: Some(kind.item_kind()),
            title: Some(clue.title),
            subtitle: Some(clue.subtitle),
            content: Some(clue.content),
            source_label: Some(source_label.to_string()),
            tags: Some(clue.tags),
            metadata: Some(metadata),
            ..ItemDraft::default()
        })
    }

    /// Removes one item by id; silent no-op when the id is unknown.
    pub fn remove_item(&mut self, id: &str) {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            return;
        };
        let removed = self.items.remove(position);
        self.save();
        self.sink
            .notify(&Notice::success(format!("已删除「{}」", removed.title)));
    }

    /// Removes every item whose id is in `ids`.
    pub fn remove_items(&mut self, ids: &[&str]) {
        self.items.retain(|item| !ids.contains(&item.id.as_str()));
        self.save();
        self.sink
            .notify(&Notice::success(format!("已删除 {} 项内容", ids.len())));
    }

    /// Shallow-merges `Some` fields of `updates` into the item with `id`;
    /// no-op when the id is unknown.
    pub fn update_item(&mut self, id: &str, updates: ItemUpdate) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        if let Some(kind) = updates.kind {
            item.kind = kind;
        }
        if let Some(title) = updates.title {
            item.title = title;
        }
        if let Some(subtitle) = updates.subtitle {
            item.subtitle = subtitle;
        }
        if let Some(content) = updates.content {
            item.content = content;
        }
        if let Some(image) = updates.image {
            item.image = image;
        }
        if let Some(source_url) = updates.source_url {
            item.source_url = source_url;
        }
        if let Some(source_label) = updates.source_label {
            item.source_label = source_label;
        }
        if let Some(tags) = updates.tags {
            item.tags = tags;
        }
        if let Some(metadata) = updates.metadata {
            item.metadata = metadata;
        }

        self.save();
    }

    /// Empties the board.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.save();
        self.sink.notify(&Notice::success("已清空所有收藏"));
    }

    /// Snapshot wrapped with export provenance.
    pub fn export_data(&self) -> ExportEnvelope {
        ExportEnvelope {
            export_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION.to_string(),
            items: self.items.clone(),
        }
    }

    /// Pretty-printed export artifact.
    pub fn export_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.export_data()).map_err(StoreError::Serialize)
    }

    /// Dated file name for the downloadable export artifact.
    pub fn export_file_name(&self) -> String {
        format!("inspiration_backup_{}.json", Local::now().format("%Y-%m-%d"))
    }

    /// Imports items from an export (or live-persistence) JSON blob.
    ///
    /// Rejects payloads whose `items` key is missing or not a list; state is
    /// unchanged on error. Imported items are appended behind current ones;
    /// `(title, kind)` duplicates (against the board or within the payload)
    /// are skipped, mirroring the `add_item` uniqueness rule. Returns the
    /// number of items actually appended.
    pub fn import_data(&mut self, json: &str) -> Result<usize, StoreError> {
        let result = self.try_import(json);
        match &result {
            Ok(appended) => {
                self.sink
                    .notify(&Notice::success(format!("成功导入 {appended} 项内容")));
            }
            Err(err) => {
                warn!("event=board_import module=store status=error error={err}");
                self.sink.notify(&Notice::error("导入失败，请检查文件格式"));
            }
        }
        result
    }

    fn try_import(&mut self, json: &str) -> Result<usize, StoreError> {
        let payload: Value =
            serde_json::from_str(json).map_err(|err| StoreError::Format(err.to_string()))?;
        let Some(items_value) = payload.get("items") else {
            return Err(StoreError::Format("missing `items` field".to_string()));
        };
        if !items_value.is_array() {
            return Err(StoreError::Format("`items` is not a list".to_string()));
        }

        let incoming: Vec<InspirationItem> = serde_json::from_value(items_value.clone())
            .map_err(|err| StoreError::Format(err.to_string()))?;

        let mut appended = 0;
        for item in incoming {
            if self.is_collected(&item.title, item.kind) {
                continue;
            }
            self.items.push(item);
            appended += 1;
        }

        self.save();
        Ok(appended)
    }

    /// Re-persists current state; for teardown or explicit sync points.
    pub fn flush(&mut self) {
        self.save();
    }

    /// Consumes the store, returning the storage backend after a final save.
    pub fn close(mut self) -> S {
        self.save();
        self.storage
    }

    fn save(&mut self) {
        let blob = match serde_json::to_string(&self.items) {
            Ok(blob) => blob,
            Err(err) => {
                error!("event=board_save module=store status=error stage=serialize error={err}");
                return;
            }
        };

        // In-memory state stands even when the write fails; the next
        // successful save catches up.
        if let Err(err) = self.storage.set(STORAGE_KEY, &blob) {
            error!("event=board_save module=store status=error stage=write error={err}");
        }
    }
}

/// Time-based id with a random suffix; collision probability is treated as
/// negligible for a single-user board.
fn generate_id() -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
    format!("inspiration_{}_{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::generate_id;

    #[test]
    fn generated_ids_are_prefixed_and_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert!(a.starts_with("inspiration_"));
        assert_ne!(a, b);
    }
}

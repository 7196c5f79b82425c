use cluemap_core::db::{open_db, open_db_in_memory};
use cluemap_core::store::STORAGE_KEY;
use cluemap_core::{
    ClueKind, CluePayload, CollectionStore, ItemDraft, ItemKind, ItemUpdate, MemoryBackend,
    Notice, NoticeLevel, NoticeSink, SqliteBackend,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Clone)]
struct RecordingSink {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl NoticeSink for RecordingSink {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

fn store_with_sink() -> (CollectionStore<MemoryBackend>, Rc<RefCell<Vec<Notice>>>) {
    let sink = RecordingSink::default();
    let notices = sink.notices.clone();
    let store = CollectionStore::open_with_sink(MemoryBackend::new(), Box::new(sink));
    (store, notices)
}

fn river_draft(title: &str) -> ItemDraft {
    ItemDraft {
        kind: Some(ItemKind::ClueRiver),
        title: Some(title.to_string()),
        content: Some("生命之河".to_string()),
        ..ItemDraft::default()
    }
}

#[test]
fn add_item_inserts_at_front_and_reports_success() {
    let (mut store, notices) = store_with_sink();

    assert!(store.add_item(river_draft("黄河")));
    assert!(store.add_item(river_draft("永定河")));

    assert_eq!(store.len(), 2);
    assert_eq!(store.items()[0].title, "永定河");
    assert_eq!(store.items()[1].title, "黄河");
    assert!(store.items()[0].id.starts_with("inspiration_"));
    assert!(store.items()[0].timestamp > 0);

    let last = notices.borrow().last().cloned().unwrap();
    assert_eq!(last.level, NoticeLevel::Success);
    assert!(last.message.contains("永定河"));
}

#[test]
fn duplicate_title_and_kind_is_rejected() {
    let (mut store, notices) = store_with_sink();

    assert!(store.add_item(river_draft("黄河")));
    assert!(!store.add_item(river_draft("黄河")));

    assert_eq!(store.len(), 1);
    let last = notices.borrow().last().cloned().unwrap();
    assert_eq!(last.level, NoticeLevel::Warning);
}

#[test]
fn same_title_with_different_kind_is_allowed() {
    let (mut store, _) = store_with_sink();

    assert!(store.add_item(river_draft("黄河")));
    let mut as_event = river_draft("黄河");
    as_event.kind = Some(ItemKind::ClueEvent);
    assert!(store.add_item(as_event));

    assert_eq!(store.len(), 2);
    assert!(store.is_collected("黄河", ItemKind::ClueRiver));
    assert!(store.is_collected("黄河", ItemKind::ClueEvent));
    assert!(!store.is_collected("黄河", ItemKind::ClueCity));
}

#[test]
fn absent_draft_fields_get_stated_defaults() {
    let (mut store, _) = store_with_sink();

    assert!(store.add_item(ItemDraft::default()));

    let item = &store.items()[0];
    assert_eq!(item.kind, ItemKind::Text);
    assert_eq!(item.title, "未命名");
    assert_eq!(item.subtitle, "");
    assert_eq!(item.content, "");
    assert_eq!(item.source_label, "药材库");
    assert!(item.tags.is_empty());
    assert!(item.metadata.is_empty());
}

#[test]
fn remove_item_is_silent_noop_for_unknown_id() {
    let (mut store, notices) = store_with_sink();
    store.add_item(river_draft("黄河"));
    let before = notices.borrow().len();

    store.remove_item("inspiration_0_missing");
    assert_eq!(store.len(), 1);
    assert_eq!(notices.borrow().len(), before);

    let id = store.items()[0].id.clone();
    store.remove_item(&id);
    assert!(store.is_empty());
}

#[test]
fn remove_items_drops_every_listed_id() {
    let (mut store, notices) = store_with_sink();
    store.add_item(river_draft("黄河"));
    store.add_item(river_draft("永定河"));
    store.add_item(river_draft("通惠河"));

    let ids: Vec<String> = store.items()[..2].iter().map(|item| item.id.clone()).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    store.remove_items(&id_refs);

    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].title, "黄河");
    let last = notices.borrow().last().cloned().unwrap();
    assert!(last.message.contains('2'));
}

#[test]
fn update_item_shallow_merges_and_ignores_unknown_id() {
    let (mut store, _) = store_with_sink();
    store.add_item(river_draft("黄河"));
    let id = store.items()[0].id.clone();

    store.update_item(
        &id,
        ItemUpdate {
            subtitle: Some("母亲河".to_string()),
            tags: Some(vec!["river".to_string(), "治水".to_string()]),
            ..ItemUpdate::default()
        },
    );

    let item = &store.items()[0];
    assert_eq!(item.subtitle, "母亲河");
    assert_eq!(item.title, "黄河");
    assert_eq!(item.tags, vec!["river", "治水"]);
    assert_eq!(item.id, id);

    store.update_item(
        "inspiration_0_missing",
        ItemUpdate {
            title: Some("不存在".to_string()),
            ..ItemUpdate::default()
        },
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn clear_all_empties_the_board() {
    let (mut store, _) = store_with_sink();
    store.add_item(river_draft("黄河"));
    store.add_item(river_draft("永定河"));

    store.clear_all();
    assert!(store.is_empty());
}

#[test]
fn category_counts_list_all_then_clue_kinds() {
    let (mut store, _) = store_with_sink();
    store.add_item(river_draft("黄河"));
    store.add_item(ItemDraft {
        kind: Some(ItemKind::Herb),
        title: Some("黄芩".to_string()),
        ..ItemDraft::default()
    });

    let rows = store.category_counts();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].label, "全部");
    assert_eq!(rows[0].count, 2);
    let river = rows.iter().find(|row| row.label == "河流").unwrap();
    assert_eq!(river.kind, Some(ItemKind::ClueRiver));
    assert_eq!(river.count, 1);

    assert_eq!(store.items_by_kind(None).len(), 2);
    assert_eq!(store.items_by_kind(Some(ItemKind::Herb)).len(), 1);
    assert_eq!(store.items_by_kind(Some(ItemKind::ClueCity)).len(), 0);
}

#[test]
fn collect_clue_extracts_and_preserves_raw_payload() {
    let (mut store, _) = store_with_sink();
    let payload = CluePayload {
        river: Some("通惠河".to_string()),
        dynasty: Some("元".to_string()),
        note: Some("郭守敬主持开凿".to_string()),
        ..CluePayload::default()
    };

    assert!(store.collect_clue(&payload, ClueKind::River, "生命之河"));
    assert!(!store.collect_clue(&payload, ClueKind::River, "生命之河"));

    assert_eq!(store.len(), 1);
    let item = &store.items()[0];
    assert_eq!(item.kind, ItemKind::ClueRiver);
    assert_eq!(item.title, "通惠河");
    assert_eq!(item.content, "郭守敬主持开凿");
    assert_eq!(item.source_label, "生命之河");
    assert_eq!(item.tags, vec!["river", "元"]);
    assert_eq!(item.metadata["raw"]["river"], "通惠河");
    assert!(store.is_collected("通惠河", ItemKind::ClueRiver));
    assert!(store.is_clue_collected("通惠河", ClueKind::River));
    assert!(!store.is_clue_collected("通惠河", ClueKind::Eco));
}

#[test]
fn memory_backend_round_trip_preserves_items() {
    let (mut store, _) = store_with_sink();
    store.add_item(river_draft("黄河"));
    store.add_item(river_draft("永定河"));
    let saved = store.items().to_vec();

    let backend = store.close();
    assert!(backend.raw(STORAGE_KEY).is_some());

    let reopened = CollectionStore::open(backend);
    assert_eq!(reopened.items(), saved.as_slice());
}

#[test]
fn corrupt_persisted_blob_resets_to_empty_board() {
    let backend = MemoryBackend::with_entry(STORAGE_KEY, "not json at all");
    let store = CollectionStore::open(backend);
    assert!(store.is_empty());
}

#[test]
fn sqlite_backend_round_trip_on_one_connection() {
    let conn = open_db_in_memory().unwrap();

    let mut store = CollectionStore::open(SqliteBackend::new(&conn));
    store.add_item(river_draft("黄河"));
    let saved = store.items().to_vec();
    drop(store);

    let reopened = CollectionStore::open(SqliteBackend::new(&conn));
    assert_eq!(reopened.items(), saved.as_slice());
}

#[test]
fn sqlite_backend_round_trip_across_file_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("board.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let mut store = CollectionStore::open(SqliteBackend::new(&conn));
        store.add_item(river_draft("黄河"));
    }

    let conn = open_db(&db_path).unwrap();
    let store = CollectionStore::open(SqliteBackend::new(&conn));
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].title, "黄河");
}

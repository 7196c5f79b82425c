use cluemap_core::{extract_clue, ClueKind, CluePayload};
use serde_json::json;

#[test]
fn title_prefers_title_then_river_then_name() {
    let full = CluePayload {
        title: Some("通惠河考".to_string()),
        river: Some("通惠河".to_string()),
        name: Some("元代漕运".to_string()),
        ..CluePayload::default()
    };
    assert_eq!(extract_clue(&full, ClueKind::River).title, "通惠河考");

    let no_title = CluePayload {
        river: Some("通惠河".to_string()),
        name: Some("元代漕运".to_string()),
        ..CluePayload::default()
    };
    assert_eq!(extract_clue(&no_title, ClueKind::River).title, "通惠河");

    let name_only = CluePayload {
        name: Some("元代漕运".to_string()),
        ..CluePayload::default()
    };
    assert_eq!(extract_clue(&name_only, ClueKind::River).title, "元代漕运");
}

#[test]
fn subtitle_prefers_period_then_sub_label_then_composition() {
    let period = CluePayload {
        period: Some("金元时期".to_string()),
        sub_label: Some("别注".to_string()),
        dynasty: Some("元".to_string()),
        ..CluePayload::default()
    };
    assert_eq!(extract_clue(&period, ClueKind::Event).subtitle, "金元时期");

    let composed = CluePayload {
        dynasty: Some("元".to_string()),
        year: Some(json!(1293)),
        ..CluePayload::default()
    };
    assert_eq!(extract_clue(&composed, ClueKind::Event).subtitle, "元 · 1293");

    let dynasty_only = CluePayload {
        dynasty: Some("元".to_string()),
        ..CluePayload::default()
    };
    assert_eq!(extract_clue(&dynasty_only, ClueKind::Event).subtitle, "元");
}

#[test]
fn year_accepts_string_values() {
    let payload = CluePayload {
        dynasty: Some("明".to_string()),
        year: Some(json!("永乐四年")),
        ..CluePayload::default()
    };
    assert_eq!(
        extract_clue(&payload, ClueKind::Event).subtitle,
        "明 · 永乐四年"
    );
}

#[test]
fn content_prefers_notes_then_action_summary() {
    let note = CluePayload {
        note: Some("郭守敬主持开凿".to_string()),
        description: Some("次选".to_string()),
        ..CluePayload::default()
    };
    assert_eq!(
        extract_clue(&note, ClueKind::River).content,
        "郭守敬主持开凿"
    );

    let action_with_functions = CluePayload {
        action: Some("疏浚".to_string()),
        functions: Some("漕运".to_string()),
        ..CluePayload::default()
    };
    assert_eq!(
        extract_clue(&action_with_functions, ClueKind::River).content,
        "疏浚 - 漕运"
    );

    let action_only = CluePayload {
        action: Some("疏浚".to_string()),
        ..CluePayload::default()
    };
    assert_eq!(extract_clue(&action_only, ClueKind::River).content, "疏浚");
}

#[test]
fn empty_strings_count_as_absent() {
    let payload = CluePayload {
        title: Some("  ".to_string()),
        name: Some("白浮泉".to_string()),
        note: Some(String::new()),
        description: Some("引水济漕".to_string()),
        ..CluePayload::default()
    };

    let clue = extract_clue(&payload, ClueKind::Eco);
    assert_eq!(clue.title, "白浮泉");
    assert_eq!(clue.content, "引水济漕");
}

#[test]
fn mostly_empty_payload_gets_defaults() {
    let clue = extract_clue(&CluePayload::default(), ClueKind::Climate);
    assert_eq!(clue.title, "未命名线索");
    assert_eq!(clue.subtitle, "");
    assert_eq!(clue.content, "无详细描述");
    assert_eq!(clue.tags, vec!["climate"]);
}

#[test]
fn tags_append_dynasty_and_action_when_present() {
    let payload = CluePayload {
        title: Some("漕运改道".to_string()),
        dynasty: Some("元".to_string()),
        action: Some("疏浚".to_string()),
        ..CluePayload::default()
    };

    let clue = extract_clue(&payload, ClueKind::City);
    assert_eq!(clue.tags, vec!["city", "元", "疏浚"]);
}

#[test]
fn payload_deserializes_camel_case_and_keeps_unknown_keys() {
    let payload: CluePayload = serde_json::from_str(
        r#"{
            "title": "金口河",
            "subLabel": "金代",
            "flowRate": 12.5,
            "basin": "永定河水系"
        }"#,
    )
    .unwrap();

    assert_eq!(payload.sub_label.as_deref(), Some("金代"));
    assert_eq!(payload.extra["basin"], "永定河水系");
    assert_eq!(extract_clue(&payload, ClueKind::River).subtitle, "金代");
}

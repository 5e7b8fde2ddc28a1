use super::*;
use std::io::Write as _;

fn write_fixture(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp fixture");
    file.write_all(body.as_bytes()).expect("write fixture");
    file
}

#[test]
fn bundled_store_holds_four_records_in_display_order() {
    let store = StaticNewsStore::bundled();
    let ids: Vec<_> = store.news().iter().map(|item| item.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let dates: Vec<_> = store.news().iter().map(|item| item.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted, "bundled records are reverse-chronological");
}

#[test]
fn repeated_reads_return_identical_records() {
    let store = StaticNewsStore::bundled();
    let first = store.news().to_vec();
    for _ in 0..3 {
        assert_eq!(store.news(), first.as_slice());
    }
}

#[test]
fn find_resolves_known_ids_only() {
    let store = StaticNewsStore::bundled();
    let item = store.find(NewsId(2)).expect("record 2");
    assert_eq!(item.title, "Tendances du marché immobilier 2024");
    assert!(store.contains(NewsId(4)));
    assert!(store.find(NewsId(99)).is_none());
}

#[test]
fn loads_json_fixture() {
    let file = write_fixture(
        ".json",
        r#"[
            {"id": 10, "title": "Un", "description": "d", "image_url": "/a.jpg",
             "date": "2024-05-01", "category": "Test",
             "author": {"name": "Ana", "role": "Rédactrice", "image_url": "/ana.jpg"}},
            {"id": 11, "title": "Deux", "description": "d", "image_url": "/b.jpg",
             "date": "2024-04-30", "category": "Test"}
        ]"#,
    );

    let store = FileNewsStore::load(file.path()).expect("load json");
    assert_eq!(store.news().len(), 2);
    assert_eq!(store.news()[0].author.as_ref().map(|a| a.name.as_str()), Some("Ana"));
    assert!(store.news()[1].author.is_none());
    assert_eq!(store.path(), file.path());
}

#[test]
fn loads_toml_fixture() {
    let file = write_fixture(
        ".toml",
        r#"
[[news]]
id = 5
title = "Cinq"
description = "d"
image_url = "/c.jpg"
date = "2024-03-01"
category = "Test"
"#,
    );

    let store = FileNewsStore::load(file.path()).expect("load toml");
    assert_eq!(store.news()[0].id, NewsId(5));
}

#[test]
fn rejects_duplicate_ids() {
    let file = write_fixture(
        ".json",
        r#"[
            {"id": 1, "title": "a", "description": "d", "image_url": "/a.jpg", "date": "2024-01-01", "category": "x"},
            {"id": 1, "title": "b", "description": "d", "image_url": "/b.jpg", "date": "2024-01-02", "category": "x"}
        ]"#,
    );

    let err = FileNewsStore::load(file.path()).expect_err("duplicate ids");
    assert!(matches!(err, ContentError::DuplicateId { id: 1, .. }));
}

#[test]
fn rejects_empty_and_unknown_formats() {
    let empty = write_fixture(".json", "[]");
    assert!(matches!(
        FileNewsStore::load(empty.path()),
        Err(ContentError::Empty { .. })
    ));

    let yaml = write_fixture(".yaml", "news: []");
    assert!(matches!(
        FileNewsStore::load(yaml.path()),
        Err(ContentError::UnsupportedFormat { .. })
    ));
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let err = FileNewsStore::load("/definitely/not/here/news.json").expect_err("missing");
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("news.json"));
}

#[test]
fn export_round_trips_through_file_store() {
    let exported = export_json(&StaticNewsStore::bundled()).expect("export");
    let file = write_fixture(".json", &exported);
    let reloaded = FileNewsStore::load(file.path()).expect("reload");
    assert_eq!(reloaded.news(), StaticNewsStore::bundled().news());
}

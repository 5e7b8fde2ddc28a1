use super::*;

fn sample_item() -> NewsItem {
    NewsItem {
        id: NewsId(7),
        title: "Titre".to_string(),
        description: "Description".to_string(),
        image_url: "/placeholder.jpg".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 4, 5).expect("date"),
        category: "Énergie".to_string(),
        author: None,
    }
}

#[test]
fn formats_dates_in_french_short_form() {
    let date = NaiveDate::from_ymd_opt(2024, 4, 5).expect("date");
    assert_eq!(format_date_fr(date), "05/04/2024");
    assert_eq!(sample_item().display_date(), "05/04/2024");
}

#[test]
fn news_page_slides_opposite_to_search_pages() {
    assert_eq!(Page::News.enter_direction(), -1.0);
    assert_eq!(Page::News.exit_direction(), 1.0);
    for page in [Page::Company, Page::Project] {
        assert_eq!(page.enter_direction(), 1.0);
        assert_eq!(page.exit_direction(), -1.0);
    }
}

#[test]
fn search_panel_follows_page() {
    assert_eq!(SearchPanel::from(Page::News), SearchPanel::None);
    assert_eq!(SearchPanel::from(Page::Company), SearchPanel::Company);
    assert_eq!(SearchPanel::from(Page::Project), SearchPanel::Project);
}

#[test]
fn nav_labels_match_header_copy() {
    let labels: Vec<_> = Page::ALL.iter().map(|page| page.nav_label()).collect();
    assert_eq!(
        labels,
        vec!["Actualités", "Recherche Entreprise", "Recherche Projet"]
    );
}

#[test]
fn news_item_without_author_omits_field_and_reads_iso_dates() {
    let json = serde_json::to_value(sample_item()).expect("serialize");
    assert_eq!(json["id"], 7);
    assert_eq!(json["date"], "2024-04-05");
    assert!(json.get("author").is_none());

    let parsed: NewsItem = serde_json::from_str(
        r#"{"id":3,"title":"t","description":"d","image_url":"/x.jpg","date":"2024-04-03","category":"c"}"#,
    )
    .expect("deserialize");
    assert_eq!(parsed.id, NewsId(3));
    assert!(parsed.author.is_none());
}

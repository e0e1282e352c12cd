use folio_core::{
    format_date, format_year, render_detail, render_list, t, ContactForm, ContentListEngine,
    ContentRecord, DetailView, Field, Locale, Message,
};

fn record(id: u64, author: &str, category: &str) -> ContentRecord {
    ContentRecord {
        id,
        title: format!("Post {id}"),
        content: "teaser".into(),
        author: author.into(),
        category: category.into(),
        views: 100 - id,
        date: "2024-03-26".into(),
    }
}

fn filled(email: &str) -> ContactForm {
    let mut form = ContactForm::default();
    form.name = "Ann".into();
    form.email = email.into();
    form.message = "Hello".into();
    form
}

#[test]
fn list_render_caps_cards_and_offers_load_more() {
    let mut engine = ContentListEngine::default();
    engine.load((1..=12).map(|i| record(i, "Ann", "tech")).collect());

    let tree = render_list(engine.view(), engine.len(), Locale::En);
    assert_eq!(tree.available, "Blog Available : \"12\"");
    assert_eq!(tree.cards.len(), 10);
    assert!(tree.show_load_more);
    assert!(tree.empty_message.is_none());

    let first = &tree.cards[0];
    assert_eq!(first.tag, "#tech");
    assert_eq!(first.cover, "images/cover1.jpg");
    assert_eq!(first.link, "blog.html?id=1");
    assert_eq!(first.date, "March 26 2024");

    engine.load_more();
    let tree = render_list(engine.view(), engine.len(), Locale::En);
    assert_eq!(tree.cards.len(), 12);
    assert!(!tree.show_load_more);
}

#[test]
fn empty_view_renders_a_message() {
    let mut engine = ContentListEngine::default();
    engine.load(vec![record(1, "Ann", "tech")]);
    engine.filter_by_category("nothing");

    let tree = render_list(engine.view(), engine.len(), Locale::Th);
    assert!(tree.cards.is_empty());
    assert!(!tree.show_load_more);
    assert_eq!(tree.empty_message, Some(t(Locale::Th, Message::NoRecords)));
}

#[test]
fn detail_render_found_and_not_found() {
    let mut engine = ContentListEngine::default();
    engine.load(vec![record(1, "Zed", "tech"), record(2, "Ann", "life")]);

    match render_detail(engine.find_by_param("2"), Locale::En) {
        DetailView::Found {
            card, author_line, ..
        } => {
            assert_eq!(card.id, 2);
            assert_eq!(author_line, "Author: Ann");
        }
        DetailView::NotFound(_) => panic!("record 2 should be found"),
    }

    assert_eq!(
        render_detail(engine.find_by_param("99"), Locale::En),
        DetailView::NotFound("Blog not found")
    );
}

#[test]
fn thai_years_use_buddhist_era() {
    assert_eq!(format_year(2024, Locale::Th), "2567");
    assert_eq!(format_year(2024, Locale::En), "2024");
}

#[test]
fn dates_are_reformatted_or_passed_through() {
    assert_eq!(format_date("March 26 2024", Locale::En), "March 26 2024");
    assert_eq!(format_date("2024-03-26", Locale::Th), "26/3 2567");
    assert_eq!(format_date("2024-03-26T10:00:00Z", Locale::En), "March 26 2024");
    assert_eq!(format_date("coming soon", Locale::En), "coming soon");
}

#[test]
fn contact_form_requires_every_field() {
    let mut form = ContactForm::default();
    assert!(!form.validate_form());
    for field in Field::ALL {
        assert_eq!(form.error(field), Some(Message::ValidationRequired));
    }
    assert!(!form.is_valid());
}

#[test]
fn contact_form_rejects_malformed_email() {
    let mut form = filled("ann@example");
    assert!(!form.validate_field(Field::Email));
    assert_eq!(form.error(Field::Email), Some(Message::ValidationInvalidEmail));

    form.email = "  ann@example.com ".into();
    assert!(form.validate_field(Field::Email));
    assert!(form.error(Field::Email).is_none());
    assert!(form.is_valid());
}

#[test]
fn contact_submit_resets_on_success_only() {
    let mut form = filled("bad");
    let rejected = form.submit();
    assert!(!rejected.success);
    assert_eq!(form.name, "Ann");

    form.email = "ann@example.com".into();
    let accepted = form.submit();
    assert!(accepted.success);
    assert_eq!(accepted.message, Message::ContactSuccess);
    assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
}

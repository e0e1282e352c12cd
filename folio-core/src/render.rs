//! Pure view functions: no UI toolkit types cross this boundary, so a
//! frontend only has to walk the returned tree.

use crate::engine::ViewState;
use crate::format::format_date;
use crate::i18n::{t, Locale, Message};
use crate::record::ContentRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u64,
    pub title: String,
    pub teaser: String,
    pub category: String,
    pub tag: String,
    pub author: String,
    pub date: String,
    pub views: u64,
    pub cover: String,
    pub link: String,
}

impl Card {
    fn from_record(record: &ContentRecord, locale: Locale) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            teaser: record.content.clone(),
            category: record.category.clone(),
            tag: format!("#{}", record.category),
            author: record.author.clone(),
            date: format_date(&record.date, locale),
            views: record.views,
            cover: record.cover_path(),
            link: record.detail_link(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree {
    /// e.g. `Blog Available : "12"`, counted over the full set.
    pub available: String,
    pub cards: Vec<Card>,
    pub show_load_more: bool,
    pub empty_message: Option<&'static str>,
}

pub fn render_list(view: &ViewState, total: usize, locale: Locale) -> RenderTree {
    let cards: Vec<Card> = view
        .visible()
        .iter()
        .map(|r| Card::from_record(r, locale))
        .collect();
    let empty_message = cards.is_empty().then(|| t(locale, Message::NoRecords));
    RenderTree {
        available: format!("{} : \"{}\"", t(locale, Message::BlogAvailable), total),
        cards,
        show_load_more: view.has_hidden(),
        empty_message,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Found {
        card: Card,
        author_line: String,
        date_line: String,
    },
    NotFound(&'static str),
}

pub fn render_detail(record: Option<&ContentRecord>, locale: Locale) -> DetailView {
    match record {
        Some(record) => {
            let card = Card::from_record(record, locale);
            DetailView::Found {
                author_line: format!("{}: {}", t(locale, Message::Author), card.author),
                date_line: format!("{}: {}", t(locale, Message::Date), card.date),
                card,
            }
        }
        None => DetailView::NotFound(t(locale, Message::NotFound)),
    }
}

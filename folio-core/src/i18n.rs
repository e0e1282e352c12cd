use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Th => "th",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Th,
            Locale::Th => Locale::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    BlogAvailable,
    SearchPlaceholder,
    SortByAuthor,
    SortByViews,
    LoadMore,
    ReadMore,
    Back,
    NoRecords,
    NotFound,
    Author,
    Date,
    Categories,
    ContactTitle,
    ContactName,
    ContactEmail,
    ContactMessage,
    ContactSend,
    ContactSuccess,
    ContactError,
    ValidationRequired,
    ValidationInvalidEmail,
    LanguageToggle,
}

pub fn t(locale: Locale, message: Message) -> &'static str {
    use Message::*;
    match (locale, message) {
        (Locale::En, BlogAvailable) => "Blog Available",
        (Locale::Th, BlogAvailable) => "บทความทั้งหมด",
        (Locale::En, SearchPlaceholder) => "Search title, content, author or tag",
        (Locale::Th, SearchPlaceholder) => "ค้นหาชื่อเรื่อง เนื้อหา ผู้เขียน หรือแท็ก",
        (Locale::En, SortByAuthor) => "Author",
        (Locale::Th, SortByAuthor) => "ผู้เขียน",
        (Locale::En, SortByViews) => "Views",
        (Locale::Th, SortByViews) => "ยอดเข้าชม",
        (Locale::En, LoadMore) => "Load more",
        (Locale::Th, LoadMore) => "โหลดเพิ่มเติม",
        (Locale::En, ReadMore) => "Read more",
        (Locale::Th, ReadMore) => "อ่านต่อ",
        (Locale::En, Back) => "← Back",
        (Locale::Th, Back) => "← กลับ",
        (Locale::En, NoRecords) => "No posts to show",
        (Locale::Th, NoRecords) => "ไม่มีบทความ",
        (Locale::En, NotFound) => "Blog not found",
        (Locale::Th, NotFound) => "ไม่พบบทความ",
        (Locale::En, Author) => "Author",
        (Locale::Th, Author) => "ผู้เขียน",
        (Locale::En, Date) => "date",
        (Locale::Th, Date) => "วันที่",
        (Locale::En, Categories) => "Tags",
        (Locale::Th, Categories) => "แท็ก",
        (Locale::En, ContactTitle) => "Contact",
        (Locale::Th, ContactTitle) => "ติดต่อ",
        (Locale::En, ContactName) => "Name",
        (Locale::Th, ContactName) => "ชื่อ",
        (Locale::En, ContactEmail) => "Email",
        (Locale::Th, ContactEmail) => "อีเมล",
        (Locale::En, ContactMessage) => "Message",
        (Locale::Th, ContactMessage) => "ข้อความ",
        (Locale::En, ContactSend) => "Send",
        (Locale::Th, ContactSend) => "ส่ง",
        (Locale::En, ContactSuccess) => "Message sent successfully",
        (Locale::Th, ContactSuccess) => "ส่งข้อความเรียบร้อยแล้ว",
        (Locale::En, ContactError) => "Please fix the highlighted fields",
        (Locale::Th, ContactError) => "กรุณาแก้ไขช่องที่ไม่ถูกต้อง",
        (Locale::En, ValidationRequired) => "This field is required",
        (Locale::Th, ValidationRequired) => "กรุณากรอกข้อมูล",
        (Locale::En, ValidationInvalidEmail) => "Please enter a valid email",
        (Locale::Th, ValidationInvalidEmail) => "รูปแบบอีเมลไม่ถูกต้อง",
        (Locale::En, LanguageToggle) => "ภาษาไทย",
        (Locale::Th, LanguageToggle) => "English",
    }
}

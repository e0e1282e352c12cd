pub mod config;
pub mod contact;
pub mod engine;
pub mod error;
pub mod format;
pub mod i18n;
pub mod loader;
pub mod record;
pub mod render;
pub mod state;
pub mod storage;

pub use config::{AppConfig, ProfileConfig, ProfileLink, ThemeConfig, UiConfig};
pub use contact::{ContactForm, Field, SubmitResult};
pub use engine::{apply_reveal_cap, ContentListEngine, RevealCap, SortKey, ViewMode, ViewState};
pub use error::{LoadError, StorageError};
pub use format::{format_date, format_year};
pub use i18n::{t, Locale, Message};
pub use loader::{fetch_records, load_records, read_records, RecordSource};
pub use record::{ContentRecord, RecordDocument};
pub use render::{render_detail, render_list, Card, DetailView, RenderTree};
pub use state::AppState;
pub use storage::{JsonFileStorage, MemoryStorage, Storage, StorageBackend};

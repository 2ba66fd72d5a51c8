pub mod app;
pub mod catalog;
pub mod flashcards;
pub mod logger;
pub mod models;
pub mod shuffle;
pub mod trivia;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use app::{App, Intent};
pub use catalog::{CATALOG_SIZE, CITATION, ContentCatalog, ContentError, TEXTBOOK_URL};
pub use flashcards::FlashcardState;
pub use models::{EvidenceEntry, Mode, QuestionTemplate, TriviaQuestion};
pub use shuffle::shuffle;
pub use trivia::TriviaSession;
pub use ui::{draw_completed, draw_flashcards, draw_menu, draw_trivia};
pub use utils::{open_url, truncate_string};

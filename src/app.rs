use crate::catalog::{ContentCatalog, ContentError};
use crate::flashcards::FlashcardState;
use crate::logger;
use crate::models::Mode;
use crate::trivia::TriviaSession;
use crate::utils::truncate_string;
use rand::Rng;

/// What the presentation layer may ask of the app. Key handling translates
/// terminal input into these; nothing else crosses the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectMode(Mode),
    Answer(String),
    AdvanceQuestion,
    RestartTrivia,
    NextCard,
    PrevCard,
    FlipCard,
    ToggleExample,
    ReturnToMenu,
}

/// Top-level mode switch. Owns the current flashcard and trivia snapshots
/// exclusively; whichever screen is active holds the only live sub-state,
/// and leaving a mode discards it. A fresh session is built on every trivia
/// entry, so the menu never holds a stale shuffle.
pub struct App {
    catalog: ContentCatalog,
    mode: Mode,
    flashcards: Option<FlashcardState>,
    trivia: Option<TriviaSession>,
}

impl App {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self {
            catalog,
            mode: Mode::Menu,
            flashcards: None,
            trivia: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn flashcards(&self) -> Option<&FlashcardState> {
        self.flashcards.as_ref()
    }

    pub fn trivia(&self) -> Option<&TriviaSession> {
        self.trivia.as_ref()
    }

    /// Applies one intent. Intents that do not fit the current mode simply
    /// do nothing; the only error path is session construction, which can
    /// only fail on malformed templates.
    pub fn apply(&mut self, intent: Intent, rng: &mut impl Rng) -> Result<(), ContentError> {
        match intent {
            Intent::SelectMode(Mode::Flashcards) => {
                self.flashcards = Some(FlashcardState::new());
                self.trivia = None;
                self.mode = Mode::Flashcards;
                logger::log("entered flashcard mode");
            }
            Intent::SelectMode(Mode::Trivia) => {
                self.trivia = Some(TriviaSession::start(&self.catalog.questions, rng)?);
                self.flashcards = None;
                self.mode = Mode::Trivia;
                logger::log("entered trivia mode");
            }
            Intent::SelectMode(Mode::Menu) | Intent::ReturnToMenu => {
                self.mode = Mode::Menu;
                self.flashcards = None;
                self.trivia = None;
                logger::log("returned to menu");
            }
            Intent::Answer(answer) => {
                if let Some(session) = &mut self.trivia {
                    *session = session.select_answer(&answer);
                    logger::log(&format!("answer locked: {}", truncate_string(&answer, 40)));
                }
            }
            Intent::AdvanceQuestion => {
                if let Some(session) = &mut self.trivia {
                    let advanced = session.advance();
                    if advanced.completed && !session.completed {
                        logger::log(&format!(
                            "trivia completed: {} of {} ({}%)",
                            advanced.score,
                            advanced.questions.len(),
                            advanced.score_percent()
                        ));
                    }
                    *session = advanced;
                }
            }
            Intent::RestartTrivia => {
                if self.trivia.is_some() {
                    self.trivia = Some(TriviaSession::restart(&self.catalog.questions, rng)?);
                    logger::log("trivia restarted");
                }
            }
            Intent::NextCard => {
                if let Some(state) = &mut self.flashcards {
                    *state = state.next(self.catalog.entries.len());
                }
            }
            Intent::PrevCard => {
                if let Some(state) = &mut self.flashcards {
                    *state = state.previous(self.catalog.entries.len());
                }
            }
            Intent::FlipCard => {
                if let Some(state) = &mut self.flashcards {
                    *state = state.flip();
                }
            }
            Intent::ToggleExample => {
                if let Some(state) = &mut self.flashcards {
                    *state = state.toggle_example();
                }
            }
        }
        Ok(())
    }
}

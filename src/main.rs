use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use philosophy_flashcards::app::{App, Intent};
use philosophy_flashcards::catalog::{ContentCatalog, TEXTBOOK_URL};
use philosophy_flashcards::models::Mode;
use philosophy_flashcards::ui::MENU_ENTRIES;
use philosophy_flashcards::{logger, ui, utils};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();
    let catalog = ContentCatalog::load()?;
    let mut app = App::new(catalog);
    let mut rng = rand::thread_rng();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Which menu entry is highlighted; purely presentation-local.
    let mut selected_menu_index: usize = 0;

    loop {
        terminal.draw(|f| match app.mode() {
            Mode::Menu => ui::draw_menu(f, selected_menu_index),
            Mode::Flashcards => {
                if let Some(state) = app.flashcards() {
                    ui::draw_flashcards(f, &app.catalog().entries, state);
                }
            }
            Mode::Trivia => {
                if let Some(session) = app.trivia() {
                    if session.completed {
                        ui::draw_completed(f, session);
                    } else {
                        ui::draw_trivia(f, session);
                    }
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            let intent = match app.mode() {
                Mode::Menu => match key.code {
                    KeyCode::Up => {
                        if selected_menu_index > 0 {
                            selected_menu_index -= 1;
                        }
                        None
                    }
                    KeyCode::Down => {
                        if selected_menu_index < MENU_ENTRIES.len() - 1 {
                            selected_menu_index += 1;
                        }
                        None
                    }
                    KeyCode::Enter => {
                        if selected_menu_index == 0 {
                            Some(Intent::SelectMode(Mode::Flashcards))
                        } else {
                            Some(Intent::SelectMode(Mode::Trivia))
                        }
                    }
                    KeyCode::Char('o') => {
                        utils::open_url(TEXTBOOK_URL);
                        None
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => None,
                },
                Mode::Flashcards => match key.code {
                    KeyCode::Right | KeyCode::Char('n') => Some(Intent::NextCard),
                    KeyCode::Left | KeyCode::Char('p') => Some(Intent::PrevCard),
                    KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::FlipCard),
                    KeyCode::Char('e') => Some(Intent::ToggleExample),
                    KeyCode::Char('m') => Some(Intent::ReturnToMenu),
                    KeyCode::Char('o') => {
                        utils::open_url(TEXTBOOK_URL);
                        None
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => None,
                },
                Mode::Trivia => {
                    let completed = app.trivia().map(|s| s.completed).unwrap_or(false);
                    if completed {
                        match key.code {
                            KeyCode::Char('r') => Some(Intent::RestartTrivia),
                            KeyCode::Char('m') => Some(Intent::ReturnToMenu),
                            KeyCode::Char('o') => {
                                utils::open_url(TEXTBOOK_URL);
                                None
                            }
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            _ => None,
                        }
                    } else {
                        match key.code {
                            KeyCode::Char(digit @ '1'..='4') => {
                                let slot = digit as usize - '1' as usize;
                                app.trivia()
                                    .and_then(|s| s.current_question())
                                    .and_then(|q| q.options.get(slot))
                                    .cloned()
                                    .map(Intent::Answer)
                            }
                            KeyCode::Enter | KeyCode::Char('n') => Some(Intent::AdvanceQuestion),
                            KeyCode::Char('m') => Some(Intent::ReturnToMenu),
                            KeyCode::Char('o') => {
                                utils::open_url(TEXTBOOK_URL);
                                None
                            }
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            _ => None,
                        }
                    }
                }
            };

            if let Some(intent) = intent {
                if intent == Intent::ReturnToMenu {
                    selected_menu_index = 0;
                }
                app.apply(intent, &mut rng)?;
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

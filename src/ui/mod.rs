pub mod layout;
mod flashcards;
mod menu;
mod trivia;

pub use flashcards::draw_flashcards;
pub use layout::{
    calculate_completed_chunks, calculate_flashcard_chunks, calculate_menu_chunks,
    calculate_trivia_chunks,
};
pub use menu::{MENU_ENTRIES, draw_menu};
pub use trivia::{draw_completed, draw_trivia};

use crate::catalog::CITATION;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

fn draw_citation(f: &mut Frame, area: Rect) {
    let citation = Paragraph::new(CITATION)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(citation, area);
}

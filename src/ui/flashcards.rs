use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::flashcards::FlashcardState;
use crate::models::EvidenceEntry;
use crate::ui::layout::calculate_flashcard_chunks;

pub fn draw_flashcards(f: &mut Frame, entries: &[EvidenceEntry], state: &FlashcardState) {
    let layout = calculate_flashcard_chunks(f.area());

    let title = Paragraph::new("Philosophical Evidence Flashcards")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    super::draw_citation(f, layout.citation_area);

    let counter = Paragraph::new(format!(
        "Card {} of {}",
        state.current_index + 1,
        entries.len()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(counter, layout.counter_area);

    let entry = &entries[state.current_index];
    let mut card_text = Text::default();
    card_text.push_line(Line::from(Span::styled(
        entry.name.as_str(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    card_text.push_line(Line::from(""));

    if state.flipped {
        card_text.push_line(Line::from(entry.description.as_str()));
        if state.example_visible {
            card_text.push_line(Line::from(""));
            card_text.push_line(Line::from(Span::styled(
                "Example:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            card_text.push_line(Line::from(entry.example.as_str()));
        }
    } else {
        card_text.push_line(Line::from(Span::styled(
            "Press Space to see the description",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let face_title = if state.flipped { "Back" } else { "Front" };
    let card = Paragraph::new(card_text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(face_title));
    f.render_widget(card, layout.card_area);

    let example_label = if state.example_visible {
        " Hide Example  "
    } else {
        " Show Example  "
    };
    let help_text = vec![Line::from(vec![
        Span::styled(
            "←/→",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Prev/Next  "),
        Span::styled(
            "Space",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Flip  "),
        Span::styled(
            "e",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(example_label),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Menu  "),
        Span::styled(
            "o",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Textbook  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

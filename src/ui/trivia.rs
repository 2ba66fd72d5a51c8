use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::trivia::TriviaSession;
use crate::ui::layout::{calculate_completed_chunks, calculate_trivia_chunks};

pub fn draw_trivia(f: &mut Frame, session: &TriviaSession) {
    let layout = calculate_trivia_chunks(f.area());

    let title = Paragraph::new("Philosophy Evidence Trivia")
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
        "Question {} of {}",
        session.current_index + 1,
        session.questions.len()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(counter, layout.counter_area);

    let Some(current) = session.current_question() else {
        return;
    };

    let question = Paragraph::new(current.prompt.as_str())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let answered = session.answered_correctly.is_some();
    let items: Vec<ListItem> = current
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let selected = session.selected_answer.as_deref() == Some(option.as_str());
            let style = if answered && *option == current.correct_answer {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if answered && selected {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", i + 1, option)).style(style)
        })
        .collect();

    let options = List::new(items).block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    if let Some(correct) = session.answered_correctly {
        let (feedback_text, feedback_color) = if correct {
            ("Correct!", Color::Green)
        } else {
            ("Incorrect!", Color::Red)
        };
        let feedback = Paragraph::new(feedback_text)
            .style(
                Style::default()
                    .fg(feedback_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(feedback, layout.feedback_area);
    }

    let mut help_spans = Vec::new();
    if answered {
        help_spans.push(Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        help_spans.push(Span::from(" Next Question  "));
    } else {
        help_spans.push(Span::styled(
            "1-4",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        help_spans.push(Span::from(" Answer  "));
    }
    help_spans.push(Span::styled(
        "m",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    help_spans.push(Span::from(" Menu  "));
    help_spans.push(Span::styled(
        "o",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    help_spans.push(Span::from(" Textbook  "));
    help_spans.push(Span::styled(
        "q",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    help_spans.push(Span::from(" Quit"));

    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_completed(f: &mut Frame, session: &TriviaSession) {
    let layout = calculate_completed_chunks(f.area());

    let title = Paragraph::new("Game Completed!")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    super::draw_citation(f, layout.citation_area);

    let mut score_text = Text::default();
    score_text.push_line(Line::from(""));
    score_text.push_line(Line::from(Span::styled(
        "Your Score",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    score_text.push_line(Line::from(""));
    score_text.push_line(Line::from(format!(
        "{} out of {}",
        session.score,
        session.questions.len()
    )));
    score_text.push_line(Line::from(""));
    score_text.push_line(Line::from(format!("{}% Correct", session.score_percent())));

    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, layout.score_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Play Again  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Menu  "),
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

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MenuLayout {
    pub title_area: Rect,
    pub citation_area: Rect,
    pub list_area: Rect,
    pub help_area: Rect,
}

pub struct FlashcardLayout {
    pub title_area: Rect,
    pub citation_area: Rect,
    pub counter_area: Rect,
    pub card_area: Rect,
    pub help_area: Rect,
}

pub struct TriviaLayout {
    pub title_area: Rect,
    pub citation_area: Rect,
    pub counter_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct CompletedLayout {
    pub title_area: Rect,
    pub citation_area: Rect,
    pub score_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        title_area: chunks[0],
        citation_area: chunks[1],
        list_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_flashcard_chunks(area: Rect) -> FlashcardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    FlashcardLayout {
        title_area: chunks[0],
        citation_area: chunks[1],
        counter_area: chunks[2],
        card_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_trivia_chunks(area: Rect) -> TriviaLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(area);

    TriviaLayout {
        title_area: chunks[0],
        citation_area: chunks[1],
        counter_area: chunks[2],
        question_area: chunks[3],
        options_area: chunks[4],
        feedback_area: chunks[5],
        help_area: chunks[6],
    }
}

pub fn calculate_completed_chunks(area: Rect) -> CompletedLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    CompletedLayout {
        title_area: chunks[0],
        citation_area: chunks[1],
        score_area: chunks[2],
        help_area: chunks[3],
    }
}

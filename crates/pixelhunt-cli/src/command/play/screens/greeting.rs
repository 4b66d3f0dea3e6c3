use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize as _},
    text::Line,
    widgets::{Block, Paragraph},
};

use super::ViewAction;

const GREETING_LINES: [&str; 4] = [
    "Best rules ever!",
    "Guess for each picture whether it is a photo or a painting.",
    "You can answer with style, or just answer. Your call.",
    "Let's see how sharp your eye is.",
];

#[derive(Debug)]
pub(in super::super) struct GreetingScreen;

impl GreetingScreen {
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => Some(ViewAction::Continue),
            KeyCode::Char('q') => Some(ViewAction::Quit),
            _ => None,
        }
    }

    pub(super) fn draw(&self, frame: &mut Frame<'_>) {
        let [_, body_area, help_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(u16::try_from(GREETING_LINES.len()).unwrap_or(u16::MAX) + 2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(frame.area());

        let lines: Vec<Line<'_>> = GREETING_LINES.iter().copied().map(Line::from).collect();
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title("Welcome").title_style(Style::new().bold()));
        frame.render_widget(body, body_area);

        let help = Line::from("Enter: continue  q: quit").dim();
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);
    }
}

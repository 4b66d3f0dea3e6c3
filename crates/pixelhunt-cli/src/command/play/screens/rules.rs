use crossterm::event::{KeyCode, KeyEvent};
use pixelhunt_engine::{ANSWER_COUNT, ROUND_SECONDS, START_LIVES};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize as _},
    text::Line,
    widgets::{Block, Paragraph},
};

use super::ViewAction;

const MAX_NAME_LEN: usize = 20;

/// Rules recap plus the player name prompt. The game will not start until a
/// non-empty name has been entered.
#[derive(Debug, Default)]
pub(in super::super) struct RulesScreen {
    name: String,
}

impl RulesScreen {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match key.code {
            KeyCode::Char(ch) => {
                if self.name.chars().count() < MAX_NAME_LEN {
                    self.name.push(ch);
                }
                None
            }
            KeyCode::Backspace => {
                self.name.pop();
                None
            }
            KeyCode::Enter if !self.name.is_empty() => {
                Some(ViewAction::SubmitName(self.name.clone()))
            }
            KeyCode::Esc => Some(ViewAction::Back),
            _ => None,
        }
    }

    pub(super) fn draw(&self, frame: &mut Frame<'_>) {
        let [_, rules_area, input_area, help_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(frame.area());

        let rules = Paragraph::new(vec![
            Line::from(format!("Every round gives you {ROUND_SECONDS} seconds.")),
            Line::from("Answer each question: photo or painting?"),
            Line::from(format!("A wrong answer or a timeout costs one of your {START_LIVES} lives.")),
            Line::from(format!("Survive all {ANSWER_COUNT} rounds to win.")),
        ])
        .alignment(Alignment::Center)
        .block(Block::bordered().title("Rules").title_style(Style::new().bold()));
        frame.render_widget(rules, rules_area);

        let shown = if self.name.is_empty() {
            Line::from("type your name").dim()
        } else {
            Line::from(self.name.as_str())
        };
        let input = Paragraph::new(shown)
            .alignment(Alignment::Center)
            .block(Block::bordered().title("Name"));
        frame.render_widget(input, input_area);

        let help = Line::from("Enter: start  Esc: back").dim();
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);
    }
}

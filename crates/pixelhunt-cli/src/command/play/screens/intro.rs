use crossterm::event::{KeyCode, KeyEvent};
use pixelhunt_engine::Presentation;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize as _},
    text::Line,
    widgets::{Block, Paragraph},
};

use super::ViewAction;

const TITLE: &str = "PIXEL HUNT";

/// Splash screen shown while the catalog loads in the background.
#[derive(Debug)]
pub(in super::super) struct IntroScreen;

impl IntroScreen {
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(ViewAction::Continue),
            KeyCode::Char('q') => Some(ViewAction::Quit),
            _ => None,
        }
    }

    pub(super) fn draw(&self, frame: &mut Frame<'_>, presentation: &Presentation<'_>) {
        let [_, title_area, status_area, help_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(frame.area());

        let title = Paragraph::new(TITLE)
            .style(Style::new().bold())
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(title, title_area);

        let status = if presentation.catalog_loaded {
            Line::from("question catalog ready").green()
        } else {
            Line::from("loading question catalog...").yellow()
        };
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            status_area,
        );

        let help = Line::from("Enter: continue  q: quit").dim();
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);
    }
}

use crossterm::event::{KeyCode, KeyEvent};
use pixelhunt_engine::{Presentation, ScoreBreakdown, SessionVerdict};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout},
    style::Stylize as _,
    text::Line,
    widgets::Paragraph,
};

use super::ViewAction;
use crate::command::play::app::ResultsPanel;
use crate::ui::{OutcomeStrip, ResultsTable};

#[derive(Debug)]
pub(in super::super) struct ResultsScreen;

impl ResultsScreen {
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Some(ViewAction::Back),
            KeyCode::Char('q') | KeyCode::Esc => Some(ViewAction::Quit),
            _ => None,
        }
    }

    pub(super) fn draw(
        &self,
        frame: &mut Frame<'_>,
        presentation: &Presentation<'_>,
        panel: Option<&ResultsPanel>,
    ) {
        let session = presentation.session;
        let [area] = Layout::horizontal([Constraint::Length(44)])
            .flex(Flex::Center)
            .areas(frame.area());
        let [title_area, strip_area, table_area, rank_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let title = match session.verdict() {
            SessionVerdict::Won => Line::from("Victory!").green().bold(),
            SessionVerdict::Lost => Line::from("Game over").red().bold(),
        };
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), title_area);

        frame.render_widget(OutcomeStrip::new(session.outcomes()), strip_area);

        let breakdown = session
            .verdict()
            .is_won()
            .then(|| ScoreBreakdown::from_outcomes(session.outcomes(), session.lives()));
        frame.render_widget(ResultsTable::new(breakdown.as_ref()), table_area);

        if let Some(panel) = panel {
            let rank = Line::from(format!(
                "Ranked #{} among {} recorded games",
                panel.rank, panel.total_sessions,
            ))
            .dim();
            frame.render_widget(Paragraph::new(rank).alignment(Alignment::Center), rank_area);
        }

        let help = Line::from("r: play again  q: quit").dim();
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);
    }
}

use pixelhunt_engine::{ANSWER_COUNT, RoundOutcome};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize as _},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One cell per round: resolved rounds show their outcome, the rest a
/// placeholder.
#[derive(Debug)]
pub struct OutcomeStrip<'a> {
    outcomes: &'a [RoundOutcome],
}

impl<'a> OutcomeStrip<'a> {
    pub fn new(outcomes: &'a [RoundOutcome]) -> Self {
        Self { outcomes }
    }

    fn cell(outcome: Option<RoundOutcome>) -> Span<'static> {
        match outcome {
            Some(RoundOutcome::Fast) => Span::styled("▲", Style::new().fg(Color::Yellow)),
            Some(RoundOutcome::Success) => Span::styled("●", Style::new().fg(Color::Green)),
            Some(RoundOutcome::Slow) => Span::styled("▼", Style::new().fg(Color::Blue)),
            Some(RoundOutcome::Fail) => Span::styled("✖", Style::new().fg(Color::Red)),
            None => Span::raw("○").dim(),
        }
    }
}

impl Widget for OutcomeStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(ANSWER_COUNT * 2);
        for slot in 0..ANSWER_COUNT {
            if slot > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Self::cell(self.outcomes.get(slot).copied()));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_reflect_outcomes() {
        assert_eq!(OutcomeStrip::cell(Some(RoundOutcome::Fast)).content, "▲");
        assert_eq!(OutcomeStrip::cell(Some(RoundOutcome::Fail)).content, "✖");
        assert_eq!(OutcomeStrip::cell(None).content, "○");
    }
}

use pixelhunt_engine::ScoreBreakdown;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Style, Stylize as _},
    text::Line,
    widgets::{Row, Table, Widget},
};

/// Score breakdown for a finished session. A lost session has no valid
/// score, so it renders a single defeat row instead.
#[derive(Debug)]
pub struct ResultsTable<'a> {
    breakdown: Option<&'a ScoreBreakdown>,
}

impl<'a> ResultsTable<'a> {
    pub fn new(breakdown: Option<&'a ScoreBreakdown>) -> Self {
        Self { breakdown }
    }
}

impl Widget for ResultsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(breakdown) = self.breakdown else {
            Line::from("no score: you ran out of lives")
                .red()
                .render(area, buf);
            return;
        };

        let rows = vec![
            Row::new(vec![
                format!("correct answers x{}", breakdown.correct_count),
                format!("{:>5}", breakdown.answer_points()),
            ]),
            Row::new(vec![
                format!("fast answers    x{}", breakdown.fast_count),
                format!("{:>5}", breakdown.fast_points()),
            ]),
            Row::new(vec![
                format!("slow answers    x{}", breakdown.slow_count),
                format!("{:>5}", breakdown.slow_points()),
            ]),
            Row::new(vec![
                format!("lives kept      x{}", breakdown.lives.max(0)),
                format!("{:>5}", breakdown.life_points()),
            ]),
            Row::new(vec![
                "total".to_owned(),
                format!("{:>5}", breakdown.total()),
            ])
            .style(Style::new().bold()),
        ];
        let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(6)]);
        table.render(area, buf);
    }
}

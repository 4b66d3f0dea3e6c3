use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use pixelhunt_engine::START_LIVES;

/// Lives on the left, countdown on the right. The countdown blinks once the
/// timer enters its final seconds.
#[derive(Debug)]
pub struct StatusHeader {
    pub lives: i32,
    pub remaining_secs: Option<u32>,
    pub low_time: bool,
}

impl StatusHeader {
    fn hearts(&self) -> String {
        let full = usize::try_from(self.lives.max(0)).unwrap_or(0);
        let mut hearts = String::new();
        for slot in 0..usize::try_from(START_LIVES).unwrap_or(0) {
            if !hearts.is_empty() {
                hearts.push(' ');
            }
            hearts.push(if slot < full { '♥' } else { '♡' });
        }
        hearts
    }
}

impl Widget for StatusHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [lives_area, timer_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).areas(area);

        let lives = Line::from(self.hearts()).style(Style::new().fg(Color::Red));
        Paragraph::new(lives).render(lives_area, buf);

        if let Some(remaining) = self.remaining_secs {
            let mut style = Style::new();
            if self.low_time {
                style = style
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK);
            }
            let timer = Line::from(format!("{remaining:>2}s")).style(style);
            Paragraph::new(timer)
                .alignment(ratatui::layout::Alignment::Right)
                .render(timer_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearts_track_remaining_lives() {
        let header = StatusHeader { lives: 2, remaining_secs: None, low_time: false };
        assert_eq!(header.hearts(), "♥ ♥ ♡");
    }

    #[test]
    fn negative_lives_show_no_full_hearts() {
        let header = StatusHeader { lives: -1, remaining_secs: None, low_time: false };
        assert_eq!(header.hearts(), "♡ ♡ ♡");
    }
}

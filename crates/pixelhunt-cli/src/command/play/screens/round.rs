use crossterm::event::{KeyCode, KeyEvent};
use pixelhunt_engine::{Classification, Presentation, RoundDescriptor, RoundKind, Submission};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize as _},
    text::Line,
    widgets::{Block, Clear, Paragraph},
};

use super::ViewAction;
use crate::ui::{OutcomeStrip, StatusHeader};

/// Input state for one question. Rebuilt from scratch whenever the
/// dispatcher moves to the next round slot.
#[derive(Debug, Default)]
pub(in super::super) struct RoundScreen {
    focused: usize,
    picks: [Option<Classification>; 2],
    confirm_back: bool,
}

impl RoundScreen {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn handle_key(
        &mut self,
        key: KeyEvent,
        presentation: &Presentation<'_>,
    ) -> Option<ViewAction> {
        let round = presentation.round?;

        if self.confirm_back {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Enter => Some(ViewAction::Back),
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.confirm_back = false;
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.confirm_back = true;
                None
            }
            KeyCode::Char('q') => Some(ViewAction::Quit),
            _ => self.handle_answer_key(key.code, round.kind()),
        }
    }

    fn handle_answer_key(&mut self, code: KeyCode, kind: RoundKind) -> Option<ViewAction> {
        let classification = match code {
            KeyCode::Char('f') => Some(Classification::Photo),
            KeyCode::Char('p') => Some(Classification::Painting),
            _ => None,
        };
        match kind {
            RoundKind::SingleChoice => {
                let choice = classification?;
                Some(ViewAction::Submit(Submission::SingleChoice { choice }))
            }
            RoundKind::TwoChoice => {
                match code {
                    KeyCode::Left => self.focused = 0,
                    KeyCode::Right => self.focused = 1,
                    _ => {
                        self.picks[self.focused] = Some(classification?);
                        // Classifying one image moves focus to the other.
                        self.focused = 1 - self.focused;
                    }
                }
                let [Some(first), Some(second)] = self.picks else {
                    return None;
                };
                Some(ViewAction::Submit(Submission::TwoChoice {
                    choices: [first, second],
                }))
            }
            RoundKind::OddOneOut => {
                let index = match code {
                    KeyCode::Char('1') => 0,
                    KeyCode::Char('2') => 1,
                    KeyCode::Char('3') => 2,
                    _ => return None,
                };
                Some(ViewAction::Submit(Submission::OddOneOut { index }))
            }
        }
    }

    pub(super) fn draw(&self, frame: &mut Frame<'_>, presentation: &Presentation<'_>) {
        let [header_area, prompt_area, images_area, strip_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header = StatusHeader {
            lives: presentation.session.lives(),
            remaining_secs: presentation.remaining_secs,
            low_time: presentation.low_time,
        };
        frame.render_widget(header, header_area);

        if let Some(round) = presentation.round {
            let prompt = Paragraph::new(round.prompt())
                .alignment(Alignment::Center)
                .block(Block::bordered());
            frame.render_widget(prompt, prompt_area);
            self.draw_images(frame, images_area, round);

            let help = Line::from(match round.kind() {
                RoundKind::TwoChoice => "←/→: focus  f: photo  p: painting  Esc: back  q: quit",
                RoundKind::SingleChoice => "f: photo  p: painting  Esc: back  q: quit",
                RoundKind::OddOneOut => "1/2/3: pick the odd one  Esc: back  q: quit",
            })
            .dim();
            frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);
        }

        frame.render_widget(OutcomeStrip::new(presentation.session.outcomes()), strip_area);

        if self.confirm_back {
            Self::draw_confirm_overlay(frame);
        }
    }

    fn draw_images(&self, frame: &mut Frame<'_>, area: Rect, round: &RoundDescriptor) {
        let images = round.images();
        let columns = Layout::horizontal(vec![Constraint::Fill(1); images.len()]).split(area);
        for (index, (image, column)) in images.iter().zip(columns.iter()).enumerate() {
            let focused = round.kind().is_two_choice() && index == self.focused;
            let border_style = if focused {
                Style::new().fg(Color::Yellow)
            } else {
                Style::new()
            };
            let pick = match round.kind() {
                RoundKind::TwoChoice => self.picks[index],
                RoundKind::SingleChoice | RoundKind::OddOneOut => None,
            };
            let pick_line = match pick {
                Some(Classification::Photo) => Line::from("photo").cyan(),
                Some(Classification::Painting) => Line::from("painting").magenta(),
                None => Line::from("?").dim(),
            };
            let body = Paragraph::new(vec![
                Line::from(image.source_ref()),
                Line::from(format!("{}x{}", image.width(), image.height())).dim(),
                pick_line,
            ])
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .title(format!("Image {}", index + 1)),
            );
            frame.render_widget(body, *column);
        }
    }

    fn draw_confirm_overlay(frame: &mut Frame<'_>) {
        let [area] = Layout::horizontal([Constraint::Length(46)])
            .flex(Flex::Center)
            .areas(frame.area());
        let [area] = Layout::vertical([Constraint::Length(4)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Clear, area);
        let body = Paragraph::new(vec![
            Line::from("Go back? Your progress will be lost."),
            Line::from("y: yes  n: stay").dim(),
        ])
        .alignment(Alignment::Center)
        .block(Block::bordered().title("Confirm"));
        frame.render_widget(body, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_choice_waits_for_both_images() {
        let mut screen = RoundScreen::new();
        assert_eq!(
            screen.handle_answer_key(KeyCode::Char('f'), RoundKind::TwoChoice),
            None,
        );
        assert_eq!(
            screen.handle_answer_key(KeyCode::Char('p'), RoundKind::TwoChoice),
            Some(ViewAction::Submit(Submission::TwoChoice {
                choices: [Classification::Photo, Classification::Painting],
            })),
        );
    }

    #[test]
    fn two_choice_focus_can_be_moved() {
        let mut screen = RoundScreen::new();
        screen.handle_answer_key(KeyCode::Right, RoundKind::TwoChoice);
        screen.handle_answer_key(KeyCode::Char('p'), RoundKind::TwoChoice);
        assert_eq!(
            screen.handle_answer_key(KeyCode::Char('f'), RoundKind::TwoChoice),
            Some(ViewAction::Submit(Submission::TwoChoice {
                choices: [Classification::Photo, Classification::Painting],
            })),
        );
    }

    #[test]
    fn single_choice_submits_immediately() {
        let mut screen = RoundScreen::new();
        assert_eq!(
            screen.handle_answer_key(KeyCode::Char('p'), RoundKind::SingleChoice),
            Some(ViewAction::Submit(Submission::SingleChoice {
                choice: Classification::Painting,
            })),
        );
    }

    #[test]
    fn odd_one_out_uses_digit_keys() {
        let mut screen = RoundScreen::new();
        assert_eq!(
            screen.handle_answer_key(KeyCode::Char('3'), RoundKind::OddOneOut),
            Some(ViewAction::Submit(Submission::OddOneOut { index: 2 })),
        );
        assert_eq!(
            screen.handle_answer_key(KeyCode::Char('4'), RoundKind::OddOneOut),
            None,
        );
    }
}

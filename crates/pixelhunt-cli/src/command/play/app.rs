use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use chrono::Utc;
use crossterm::event::Event;
use pixelhunt_catalog::{CatalogLoader, HistoryStore, SessionRecord, rank_among};
use pixelhunt_engine::{GameEvent, ScreenSlot, SessionDispatcher, Submission};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Stylize as _,
    text::Line,
    widgets::Paragraph,
};

use super::screens::{ScreenView, ViewAction};
use crate::tui::{App, Tui};

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const MESSAGE_DURATION: Duration = Duration::from_secs(5);

/// Ranking info shown on the results screen, computed once per finished
/// session.
#[derive(Debug)]
pub(super) struct ResultsPanel {
    pub rank: usize,
    pub total_sessions: usize,
}

#[derive(Debug)]
struct StatusMessage {
    text: String,
    expires_at: Instant,
}

/// The interactive game, wired together: the dispatcher owns the rules, the
/// loader fetches the catalog off-thread, the store persists finished
/// sessions, and the active [`ScreenView`] translates input.
#[derive(Debug)]
pub(super) struct PlayApp {
    dispatcher: SessionDispatcher,
    loader: Option<CatalogLoader>,
    store: HistoryStore,
    view: ScreenView,
    shown_slot: ScreenSlot,
    status: Option<StatusMessage>,
    results: Option<ResultsPanel>,
    should_exit: bool,
}

impl PlayApp {
    pub(super) fn new(catalog: PathBuf, history: PathBuf, round_secs: u32) -> Self {
        let dispatcher = SessionDispatcher::with_round_secs(round_secs);
        let shown_slot = dispatcher.session().current_screen();
        Self {
            view: ScreenView::for_slot(shown_slot),
            dispatcher,
            loader: Some(CatalogLoader::spawn(catalog)),
            store: HistoryStore::new(history),
            shown_slot,
            status: None,
            results: None,
            should_exit: false,
        }
    }

    fn show_message(&mut self, text: String) {
        self.status = Some(StatusMessage {
            text,
            expires_at: Instant::now() + MESSAGE_DURATION,
        });
    }

    fn poll_loader(&mut self) {
        let Some(loader) = &mut self.loader else {
            return;
        };
        let Some(result) = loader.try_take() else {
            return;
        };
        self.loader = None;
        match result {
            Ok(catalog) => self.dispatcher.dispatch(GameEvent::DataLoaded { catalog }),
            Err(err) => self.show_message(format!("failed to load catalog: {err}")),
        }
    }

    /// Rebuilds the view whenever the dispatcher has moved to another slot,
    /// and finalizes the session on arrival at the results screen.
    fn sync_view(&mut self) {
        let slot = self.dispatcher.session().current_screen();
        if slot == self.shown_slot {
            return;
        }
        self.shown_slot = slot;
        self.view = ScreenView::for_slot(slot);
        if slot == ScreenSlot::Results {
            self.finalize_session();
        } else {
            self.results = None;
        }
    }

    /// Ranks the finished session against the stored history, then appends
    /// it. Persistence failures downgrade to a transient message; the
    /// results stay on screen either way.
    fn finalize_session(&mut self) {
        let past = match self.store.load() {
            Ok(past) => past,
            Err(err) => {
                self.show_message(format!("failed to read history: {err}"));
                Vec::new()
            }
        };
        let rank = rank_among(
            self.dispatcher.score(),
            past.iter().map(SessionRecord::score),
        );
        self.results = Some(ResultsPanel {
            rank,
            total_sessions: past.len() + 1,
        });

        let session = self.dispatcher.session();
        let record = SessionRecord {
            recorded_at: Utc::now(),
            player_name: session.player_name().to_owned(),
            outcomes: session.outcomes().to_vec(),
            lives: session.lives(),
            answers: session.answers().to_vec(),
            elapsed: session.elapsed().to_vec(),
            verdict: session.verdict(),
        };
        if let Err(err) = self.store.append(record) {
            self.show_message(format!("failed to save results: {err}"));
        }
    }

    fn apply_action(&mut self, action: ViewAction) {
        match action {
            ViewAction::Continue => self.dispatcher.dispatch(GameEvent::Advance),
            ViewAction::SubmitName(name) => {
                self.dispatcher.dispatch(GameEvent::NameSubmitted { name });
            }
            ViewAction::Submit(submission) => self.submit(&submission),
            ViewAction::Back => self.dispatcher.dispatch(GameEvent::NavigateBack),
            ViewAction::Quit => self.should_exit = true,
        }
        self.sync_view();
    }

    fn submit(&mut self, submission: &Submission) {
        // A shape mismatch here is an input-mapping bug, not a player error.
        if let Err(err) = self.dispatcher.submit(submission) {
            self.show_message(format!("{err}"));
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(TICK_INTERVAL);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        if let Some(key) = event.as_key_event() {
            let presentation = self.dispatcher.presentation();
            let action = self.view.handle_key(key, &presentation);
            if let Some(action) = action {
                self.apply_action(action);
            }
        }
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.poll_loader();
        let _ = self.dispatcher.tick();
        if let Some(status) = &self.status
            && status.expires_at <= Instant::now()
        {
            self.status = None;
        }
        self.sync_view();
    }

    fn draw(&self, frame: &mut Frame) {
        let presentation = self.dispatcher.presentation();
        self.view.draw(frame, &presentation, self.results.as_ref());

        if let Some(status) = &self.status {
            let [_, message_area] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
            let message = Line::from(status.text.as_str()).red().reversed();
            frame.render_widget(Paragraph::new(message), message_area);
        }
    }
}

//! Interactive event loop.
//!
//! The loop is the single actor that owns the controller. Lookups run on
//! spawned tasks and report back through an unbounded channel; the loop
//! drains that channel before every draw and lets the controller decide
//! which results still apply.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};
use skycast_core::{KeyPress, Lookup, LookupError, SearchController, SearchTicket, WeatherProvider};
use std::{sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing::info;

use crate::{tui::Tui, ui};

const TICK_RATE: Duration = Duration::from_millis(100);

type Settled = (SearchTicket, Result<Lookup, LookupError>);

pub struct App {
    controller: SearchController,
    provider: Arc<dyn WeatherProvider>,
    results_tx: mpsc::UnboundedSender<Settled>,
    results_rx: mpsc::UnboundedReceiver<Settled>,
    search_button: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(controller: SearchController, provider: Arc<dyn WeatherProvider>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            provider,
            results_tx,
            results_rx,
            search_button: Rect::default(),
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    fn key_press(code: KeyCode) -> KeyPress {
        match code {
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Char(c) => KeyPress::Char(c),
            KeyCode::Backspace => KeyPress::Backspace,
            _ => KeyPress::Other,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        let press = Self::key_press(key.code);
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match press {
            KeyPress::Char(_) if chorded => {}
            KeyPress::Char(c) => {
                let mut text = self.controller.query_text().to_string();
                text.push(c);
                self.controller.set_query_text(text);
            }
            KeyPress::Backspace => {
                let mut text = self.controller.query_text().to_string();
                text.pop();
                self.controller.set_query_text(text);
            }
            KeyPress::Enter | KeyPress::Other => {}
        }

        if let Some(ticket) = self.controller.handle_key_down(press) {
            self.spawn_lookup(ticket);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                let clicked = mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && self
                        .search_button
                        .contains(Position::new(mouse.column, mouse.row));
                if clicked {
                    let ticket = self.controller.trigger_search();
                    self.spawn_lookup(ticket);
                }
            }
            Event::Paste(text) => {
                let mut query = self.controller.query_text().to_string();
                query.push_str(&text);
                self.controller.set_query_text(query);
            }
            _ => {}
        }
    }

    fn spawn_lookup(&self, ticket: SearchTicket) {
        let provider = Arc::clone(&self.provider);
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let outcome = provider.current_weather(ticket.query()).await;
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send((ticket, outcome));
        });
    }

    /// Apply every lookup that has settled since the last call.
    pub fn drain_results(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((ticket, outcome)) = self.results_rx.try_recv() {
            if self.controller.apply(ticket, outcome) {
                applied += 1;
            }
        }
        applied
    }

    pub fn draw(&mut self, frame: &mut ratatui::Frame) {
        let areas = ui::render(frame, &self.controller);
        self.search_button = areas.search_button;
    }
}

pub async fn run(controller: SearchController, provider: Arc<dyn WeatherProvider>) -> Result<()> {
    let mut app = App::new(controller, provider);
    let mut tui = Tui::new(TICK_RATE)?;
    tui.enter()?;
    info!(query = %app.controller().query_text(), "widget started");

    while !app.should_quit {
        app.drain_results();
        tui.draw(|frame| app.draw(frame))?;

        if let Some(event) = tui.next_event()? {
            app.handle_event(event);
        }
        tokio::task::yield_now().await;
    }

    tui.exit()?;
    info!("widget closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseEvent};
    use skycast_core::WeatherReport;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeatherProvider for CountingProvider {
        async fn current_weather(&self, city: &str) -> Result<Lookup, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if city == "Atlantis" {
                return Ok(Lookup::CityNotFound);
            }
            Ok(Lookup::Found(WeatherReport {
                city: city.to_string(),
                country: "IN".into(),
                temperature_c: 31.7,
                humidity_pct: 70,
                wind_speed: 12.0,
                latitude: 13.08,
                longitude: 80.27,
                icon_code: "01d".into(),
            }))
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn chord(c: char, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app() -> (App, Arc<CountingProvider>) {
        let provider = Arc::new(CountingProvider::default());
        let app = App::new(SearchController::new(""), provider.clone());
        (app, provider)
    }

    async fn settle(app: &mut App) {
        for _ in 0..50 {
            if app.drain_results() > 0 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("lookup never settled");
    }

    #[tokio::test]
    async fn typing_edits_the_query_without_requests() {
        let (mut app, provider) = app();
        for c in "Pune".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Backspace));

        assert_eq!(app.controller().query_text(), "Pun");
        assert!(!app.controller().state().loading);
        tokio::task::yield_now().await;
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn enter_runs_a_lookup_for_the_typed_city() {
        let (mut app, provider) = app();
        for c in "Delhi".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Enter));
        assert!(app.controller().state().loading);

        settle(&mut app).await;

        let view = app.controller().view();
        assert_eq!(view.details.unwrap().city, "Delhi");
        assert!(!view.loading);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn clicking_the_search_button_triggers() {
        let (mut app, provider) = app();
        app.search_button = Rect::new(50, 1, 10, 3);
        app.handle_event(Event::Paste("Atlantis".into()));

        app.handle_event(click(10, 2));
        assert!(!app.controller().state().loading);

        app.handle_event(click(55, 2));
        settle(&mut app).await;

        assert!(app.controller().view().city_not_found);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn control_and_alt_chords_do_not_edit_the_query() {
        let (mut app, _) = app();
        app.handle_event(key(KeyCode::Char('P')));
        app.handle_event(chord('a', KeyModifiers::CONTROL));
        app.handle_event(chord('x', KeyModifiers::ALT));
        app.handle_event(chord('U', KeyModifiers::SHIFT));

        assert_eq!(app.controller().query_text(), "PU");
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn escape_quits() {
        let (mut app, _) = app();
        app.handle_event(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn only_the_latest_of_two_rapid_searches_applies() {
        let (mut app, provider) = app();
        app.handle_event(Event::Paste("Mumbai".into()));
        app.handle_event(key(KeyCode::Enter));
        app.controller.set_query_text("Kolkata");
        app.handle_event(key(KeyCode::Enter));

        settle(&mut app).await;
        // Give the older task time to land too.
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.drain_results();

        assert_eq!(app.controller().view().details.unwrap().city, "Kolkata");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}

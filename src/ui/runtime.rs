use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{App, UiConfig};

/// Construct an [`App`] for `config` and run it until the user quits.
pub fn run(config: UiConfig) -> Result<()> {
    let mut app = App::new(config)?;
    app.run()
}

impl App {
    /// Pump the terminal event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::Builder::new()
            .name("terminal-events".into())
            .spawn(move || -> Result<()> {
                while event_loop_flag.load(Ordering::Relaxed) {
                    if event::poll(Duration::from_millis(50))? {
                        let event = event::read()?;
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                }
                Ok(())
            });
        let event_thread = match event_thread {
            Ok(handle) => handle,
            Err(err) => {
                ratatui::restore();
                return Err(anyhow!("failed to spawn terminal event thread: {err}"));
            }
        };

        let mut pending_events = VecDeque::new();

        let result: Result<()> = 'event_loop: loop {
            self.pump_fetch_results();
            if self.is_loading() {
                self.throbber_state.calc_next();
            }

            loop {
                match event_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
                break Err(err.into());
            }

            let mut quit = false;
            while let Some(event) = pending_events.pop_front() {
                if let Event::Key(key) = event
                    && key.kind == KeyEventKind::Press
                    && self.handle_key(key).is_break()
                {
                    quit = true;
                    break;
                }
            }

            if quit {
                break Ok(());
            }

            thread::sleep(Duration::from_millis(16));
        };

        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }
}

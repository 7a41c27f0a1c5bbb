use anyhow::{Context, Result};
use crossterm::{
    event::{
        Event, EventStream, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{GameConfig, GameSession};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_interval: Duration,
    should_quit: bool,
    /// Terminal reports key releases, so boost follows the held space key.
    /// Without them each space press toggles boost.
    release_events: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>, fps: u32) -> Result<Self> {
        let renderer = Renderer::new(config.grid_size);
        let session = match seed {
            Some(seed) => GameSession::with_seed(config, seed),
            None => GameSession::new(config),
        }
        .context("Invalid game configuration")?;

        Ok(Self {
            session,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            frame_interval: Duration::from_secs(1) / fps.max(1),
            should_quit: false,
            release_events: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        self.release_events = supports_keyboard_enhancement().unwrap_or(false);
        if self.release_events {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release events")?;
        }
        info!(
            "terminal key release events: {}",
            if self.release_events { "on" } else { "off, space toggles boost" }
        );

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session ended: score {}, best {}, {} ticks, {} wraps",
            self.session.state().score,
            self.metrics.high_score,
            self.metrics.ticks,
            self.metrics.wraps
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The simulation is advanced from the frame timer; the session
        // decides when a tick is due
        let mut frame_timer = interval(self.frame_interval);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Advance and render one frame
                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    self.advance_frame(now.duration_since(last_frame));
                    last_frame = now;

                    let snapshot = self.session.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                self.session.steer(direction);
            }
            KeyAction::Boost(boosted) => {
                if self.release_events {
                    self.session.set_boost(boosted);
                } else if key.kind == KeyEventKind::Press {
                    let toggled = !self.session.is_boosted();
                    self.session.set_boost(toggled);
                }
            }
            KeyAction::Restart => {
                self.reset_game();
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn advance_frame(&mut self, delta: Duration) {
        if let Some(step) = self.session.advance(delta) {
            self.metrics.on_tick(step.wrapped);
        }
        self.metrics.on_score(self.session.state().score);
        self.metrics.update();
    }

    fn reset_game(&mut self) {
        self.metrics.on_restart(self.session.state().score);
        self.session.restart();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        if self.release_events {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
                .context("Failed to restore keyboard mode")?;
        }
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};

/// Coalesces resize bursts into a single geometry change.
///
/// Terminals emit a stream of resize events while the user drags; applying
/// every one forces a full relayout each time. The debouncer keeps only the
/// latest geometry and releases it once the stream has been quiet for the
/// configured delay.
pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be read or terminal
    /// initialization fails. The terminal is restored on every exit path,
    /// including panics.
    pub fn run(&mut self) -> Result<()> {
        let tree = crate::tree::load(&self.file_path)
            .with_context(|| format!("Failed to load {}", self.file_path.display()))?;
        tracing::debug!(
            entries = tree.node(tree.root()).children().len(),
            "top-level entries loaded, starting viewer"
        );

        // ratatui::try_init does not install a panic hook; chain one so the
        // terminal leaves raw mode before the default hook prints anything.
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            ratatui::restore();
            default_hook(info);
        }));

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; duvi requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.file_path.clone(),
            tree,
            (size.width, size.height),
            self.sort_mode,
        );
        model.ascii = self.ascii;

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut needs_render = true;

        loop {
            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                tracing::debug!(width, height, "resize applied");
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let msg =
                    Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                if let Some(msg) = msg {
                    *model = update(std::mem::take(model), msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let msg =
                        Self::handle_event(&event::read()?, model, drain_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        *model = update(std::mem::take(model), msg);
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}

//! Application shell.
//!
//! Owns the root [`Pane`] and the frame cycle: resolve geometry, paint the
//! tree into a [`Surface`], flush the surface to the terminal, poll input.
//! The whole cycle is single-threaded and synchronous; the only blocking
//! point is the input poll between frames.
//!
//! The paint path is usable without a tty through [`App::paint_frame`],
//! which is how tests and headless harness runs exercise the full
//! resolve-and-paint pipeline.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::error::AppError;
use crate::geometry::{Point, Rect, Size};
use crate::pane::Pane;
use crate::surface::Surface;
use crate::widget::{Placement, Widget};

/// How long the input poll waits before the next frame is painted.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// The application shell: root container, paint surface, run loop.
pub struct App {
    root: Pane,
    surface: Surface,
    title: Option<String>,
    handle_sigint: bool,
    demo_time: Option<Duration>,
    frame: u64,
}

impl App {
    /// Build a shell sized to the current terminal.
    pub fn new() -> Result<Self, AppError> {
        let (width, height) = crossterm::terminal::size()?;
        if width == 0 || height == 0 {
            return Err(AppError::TerminalSize { width, height });
        }
        Ok(Self::with_size(Size::new(width, height)))
    }

    /// Build a shell with a fixed surface size and no terminal attached.
    pub fn with_size(size: Size) -> Self {
        Self {
            root: Pane::new(Placement::new(size)),
            surface: Surface::new(size),
            title: None,
            handle_sigint: true,
            demo_time: None,
            frame: 0,
        }
    }

    /// Title painted on the surface's top row.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Whether Ctrl+C exits the run loop.
    pub fn handle_sigint(&mut self, handle: bool) {
        self.handle_sigint = handle;
    }

    /// Arm an auto-exit deadline; `None` runs until a key exits.
    pub fn demo_mode(&mut self, demo_time_s: Option<u64>) {
        self.demo_time = demo_time_s.map(Duration::from_secs);
    }

    /// Append a widget to the root container.
    pub fn add_widget(&mut self, widget: impl Widget + 'static) {
        self.root.add_widget(widget);
    }

    /// Monotonic frame counter, for diagnostics only.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn surface_size(&self) -> Size {
        self.surface.size()
    }

    /// Resolve and paint one frame into the surface, without flushing.
    pub fn paint_frame(&mut self) -> &Surface {
        self.surface.clear();
        let bounds = Rect::from_origin_size(Point::ORIGIN, self.surface.size());
        self.root.paint(&mut self.surface.region(bounds));
        if let Some(title) = &self.title {
            self.surface.region(bounds).put_str(0, 0, title);
        }
        self.frame += 1;
        &self.surface
    }

    /// Run the frame loop until a key exits or the demo deadline passes.
    ///
    /// Terminal modes are restored on every exit path, including errors.
    pub fn run(&mut self) -> Result<(), AppError> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;

        tracing::info!(size = %self.surface.size(), "run loop started");
        let result = self.run_loop(&mut out);

        let _ = execute!(out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        tracing::info!(frames = self.frame, "run loop exited");

        result
    }

    fn run_loop(&mut self, out: &mut impl Write) -> Result<(), AppError> {
        let deadline = self.demo_time.map(|t| Instant::now() + t);

        loop {
            self.paint_frame();
            self.flush(out)?;

            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let ctrl_c = key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL);
                        if ctrl_c && self.handle_sigint {
                            tracing::debug!("exit on ctrl-c");
                            return Ok(());
                        }
                        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                            tracing::debug!("exit on key");
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        self.surface = Surface::new(Size::new(width, height));
                    }
                    _ => {}
                }
            }

            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    tracing::debug!("demo deadline reached");
                    return Ok(());
                }
            }
        }
    }

    fn flush(&self, out: &mut impl Write) -> Result<(), AppError> {
        for (y, row) in self.surface.rows().enumerate() {
            queue!(out, MoveTo(0, y as u16), Print(row))?;
        }
        out.flush()?;
        Ok(())
    }
}

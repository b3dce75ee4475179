/// Terminal host: a fixed-rate frame loop driving a fig3d scene
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use fig3d_core::Scene;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod cli;
pub mod renderer;

pub use cli::Cli;
pub use renderer::TerminalRenderer;

/// Elapsed-time source that can be paused without the scene seeing a jump
#[derive(Debug)]
pub struct SceneClock {
    start: Instant,
    paused_total: Duration,
    paused_at: Option<Instant>,
}

impl SceneClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            paused_total: Duration::ZERO,
            paused_at: None,
        }
    }

    /// Running time since start, not counting pauses
    pub fn now(&self) -> Duration {
        self.now_at(Instant::now())
    }

    fn now_at(&self, instant: Instant) -> Duration {
        let frozen = self.paused_at.unwrap_or(instant);
        frozen
            .saturating_duration_since(self.start)
            .saturating_sub(self.paused_total)
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn toggle_pause(&mut self) {
        match self.paused_at.take() {
            Some(paused_at) => self.paused_total += paused_at.elapsed(),
            None => self.paused_at = Some(Instant::now()),
        }
    }
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application struct: calls `update` then `draw` once per frame
pub struct FrameLoop {
    scene: Scene,
    renderer: TerminalRenderer,
    clock: SceneClock,
    running: bool,
    target_frame_time: Duration,
    frame_limit: Option<u64>,
    frames_rendered: u64,
    last_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl FrameLoop {
    /// Frame loop sized to the current terminal
    pub fn new(scene: Scene, target_fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_renderer(
            scene,
            TerminalRenderer::new(width as usize, height.saturating_sub(1) as usize),
            target_fps,
        ))
    }

    pub fn with_renderer(scene: Scene, renderer: TerminalRenderer, target_fps: u32) -> Self {
        Self {
            scene,
            renderer,
            clock: SceneClock::new(),
            running: true,
            target_frame_time: Duration::from_secs(1) / target_fps.max(1),
            frame_limit: None,
            frames_rendered: 0,
            last_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    /// Stop on its own after `frames` frames
    pub fn with_frame_limit(mut self, frames: Option<u64>) -> Self {
        self.frame_limit = frames;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let entered = execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide);

        in_session(entered, || self.main_loop(), restore_terminal)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::ZERO)? {
                self.handle_event(event::read()?)?;
            }

            self.step();
            self.present()?;

            if let Some(limit) = self.frame_limit {
                if self.frames_rendered >= limit {
                    self.running = false;
                }
            }

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }
            self.sample_fps();
        }

        log::info!("frame loop stopped after {} frames", self.frames_rendered);
        Ok(())
    }

    /// Advance the scene and rasterize it; no terminal output
    pub fn step(&mut self) {
        if !self.clock.is_paused() {
            self.scene.update(self.clock.now());
        }
        match self.scene.draw(&mut self.renderer) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        self.frames_rendered += 1;
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('p') | KeyCode::Char(' ') => {
                    self.clock.toggle_pause();
                    log::debug!("paused: {}", self.clock.is_paused());
                }
                KeyCode::Char('o') => {
                    let mode = self.scene.projection_mode().toggled();
                    self.scene.set_projection_mode(mode);
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                self.renderer
                    .resize(width as usize, height.saturating_sub(1) as usize);
                execute!(stdout(), terminal::Clear(terminal::ClearType::All))?;
            }
            _ => {}
        }
        Ok(())
    }

    fn sample_fps(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        if (now - self.last_sample).as_secs() >= 1 {
            self.fps = self.frame_count as f32 / (now - self.last_sample).as_secs_f32();
            self.frame_count = 0;
            self.last_sample = now;
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();

        // Draw UI overlay on the first row, figures below it
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "fig3d | {} figures | FPS: {:.1}{} | P=Pause O=Ortho/Persp Q=Quit",
                self.scene.len(),
                self.fps,
                if self.clock.is_paused() { " [paused]" } else { "" },
            )),
            ResetColor,
            cursor::MoveTo(0, 1)
        )?;

        self.renderer.present(&mut stdout)?;

        stdout.flush()?;
        Ok(())
    }
}

/// Run `body` if `entered` is ok; `leave` runs either way
fn in_session<T>(
    entered: io::Result<()>,
    body: impl FnOnce() -> io::Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = entered.and_then(|()| body());
    let restored = leave();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> io::Result<()> {
    let raw = terminal::disable_raw_mode();
    let screen = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

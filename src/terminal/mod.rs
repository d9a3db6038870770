//! Terminal host: owns the screen, paces frames and feeds resize events to
//! the simulator between frames.

mod canvas;
mod encode;
mod pacer;

use std::io::{self, BufWriter, Stdout, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

pub use canvas::{OverlayText, PixelCanvas};
pub use encode::encode_frame;
pub use pacer::{FpsCounter, FramePacer};

use crate::clock::{Clock, MonotonicClock};
use crate::color::Rgb;
use crate::config::Config;
use crate::error::StarfieldError;
use crate::starfield::Starfield;
use crate::surface::{DrawCommand, Point, Surface};

/// Raw mode plus alternate screen for as long as it lives.
struct Session {
    out: BufWriter<Stdout>,
}

impl Session {
    fn enter() -> std::io::Result<Self> {
        let mut out = BufWriter::with_capacity(1024 * 64, stdout());
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Pixel dimensions of a terminal with `cols x rows` cells.
pub fn pixel_size(cols: u16, rows: u16) -> (usize, usize) {
    (cols as usize, rows as usize * 2)
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Where terminal events come from. Crossterm in the real host.
trait EventSource {
    /// Waits up to `timeout` for an event; a zero timeout only checks.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    fn read(&mut self) -> io::Result<Event>;
}

struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Resize(u16, u16),
}

/// Reads every pending event and waits for more until the next frame is due.
/// Pending events are drained even when the frame is already late.
fn gather_input(pacer: &FramePacer, events: &mut impl EventSource) -> io::Result<Vec<Input>> {
    let mut inputs = Vec::new();
    while events.poll(pacer.remaining(Instant::now()))? {
        match events.read()? {
            Event::Key(key) if is_quit(&key) => {
                inputs.push(Input::Quit);
                break;
            }
            Event::Resize(cols, rows) => inputs.push(Input::Resize(cols, rows)),
            _ => {}
        }
    }
    Ok(inputs)
}

/// Runs the starfield until the user quits. The terminal is restored before
/// returning, error or not.
pub fn run(config: &Config) -> Result<(), StarfieldError> {
    let (cols, rows) = terminal::size()?;
    let (width, height) = pixel_size(cols, rows);

    let clock = MonotonicClock::new();
    let mut starfield = Starfield::new(
        width as f32,
        height as f32,
        clock.now_ms(),
        config.field_settings(),
    )?;
    let mut canvas = PixelCanvas::new(width, height, config.display.glow_scale);

    let mut session = Session::enter()?;
    tracing::info!(cols, rows, frame_rate = config.display.frame_rate, "starfield running");

    let result = drive(&mut session, &mut starfield, &mut canvas, &clock, config);
    drop(session);

    tracing::info!("starfield stopped");
    result
}

fn drive(
    session: &mut Session,
    starfield: &mut Starfield,
    canvas: &mut PixelCanvas,
    clock: &impl Clock,
    config: &Config,
) -> Result<(), StarfieldError> {
    let start = Instant::now();
    let mut pacer = FramePacer::new(config.display.frame_rate, start);
    let mut fps = FpsCounter::new(start);
    let mut output = Vec::with_capacity(canvas.width() * canvas.height() * 25);
    let mut events = CrosstermEvents;

    loop {
        // Events are only handled here, between frames, so a resize never
        // lands halfway through one.
        for input in gather_input(&pacer, &mut events)? {
            match input {
                Input::Quit => return Ok(()),
                Input::Resize(cols, rows) => {
                    let (width, height) = pixel_size(cols, rows);
                    starfield.resize(width as f32, height as f32);
                    canvas.resize(width, height);
                    output.reserve(width * height * 25);
                    execute!(session.out, Clear(ClearType::All))?;
                }
            }
        }

        let now = Instant::now();
        pacer.begin_frame(now);

        canvas.begin_frame();
        starfield.frame(canvas, clock.now_ms());
        let current_fps = fps.tick(now);
        if config.display.show_fps {
            canvas.draw(DrawCommand::Text {
                origin: Point::new(1.0, 0.0),
                color: Rgb::WHITE,
                text: format!("{current_fps} fps"),
            });
        }

        encode_frame(canvas, &mut output)?;
        session.out.write_all(&output)?;
        session.out.flush()?;
    }
}

//! Interactive curve plotter.
//!
//! Draws the selected easing curve in the terminal.
//! LEFT/RIGHT cycle through the curves.
//! +/- change the overshoot/amplitude (step count for flash curves).
//! [/] change the period (weighting for flash curves).
//! Press Q or ESC to quit.

use anyhow::Result;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use easekit::{CurveKind, CurveSpec, EaseParams, preview};
use std::io::{Write, stdout};
use std::panic;
use std::time::Duration;

const PLOT_WIDTH: u16 = 64;
const PLOT_HEIGHT: u16 = 20;
const TOP: u16 = 3;
const LEFT: u16 = 8;

/// Curves worth plotting: everything except the sentinels.
fn plottable() -> Vec<CurveKind> {
    CurveKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_sentinel())
        .collect()
}

struct PlotState {
    curves: Vec<CurveKind>,
    selected: usize,
    params: EaseParams,
}

impl PlotState {
    fn new() -> Self {
        Self {
            curves: plottable(),
            selected: 0,
            params: EaseParams::default(),
        }
    }

    fn kind(&self) -> CurveKind {
        self.curves[self.selected]
    }

    fn next(&mut self) {
        self.selected = (self.selected + 1) % self.curves.len();
        self.reset_params();
    }

    fn previous(&mut self) {
        self.selected = (self.selected + self.curves.len() - 1) % self.curves.len();
        self.reset_params();
    }

    fn reset_params(&mut self) {
        self.params = if self.kind().is_stepped() {
            EaseParams::steps(4.0, 0.0)
        } else {
            EaseParams::default()
        };
    }

    /// Returns false if the key should end the program.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let amplitude_step = if self.kind().is_stepped() { 0.5 } else { 0.1 };
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return false,
            KeyCode::Right => self.next(),
            KeyCode::Left => self.previous(),
            KeyCode::Char('+') | KeyCode::Char('=') if self.kind().uses_amplitude() => {
                self.params.overshoot_or_amplitude += amplitude_step;
            }
            KeyCode::Char('-') if self.kind().uses_amplitude() => {
                self.params.overshoot_or_amplitude -= amplitude_step;
            }
            KeyCode::Char(']') if self.kind().uses_period() => self.params.period += 0.05,
            KeyCode::Char('[') if self.kind().uses_period() => self.params.period -= 0.05,
            _ => {}
        }
        true
    }
}

fn draw(state: &PlotState) -> Result<()> {
    let mut out = stdout();
    out.queue(Clear(ClearType::All))?;

    let kind = state.kind();
    let mut header = format!("{}", kind);
    if kind.uses_amplitude() {
        let label = if kind.is_stepped() { "steps" } else { "amplitude" };
        header.push_str(&format!("  {}: {:.2}", label, state.params.overshoot_or_amplitude));
    }
    if kind.uses_period() {
        let label = if kind.is_stepped() { "weighting" } else { "period" };
        header.push_str(&format!("  {}: {:.2}", label, state.params.period));
    }
    out.queue(MoveTo(0, 0))?
        .queue(Print(header))?
        .queue(MoveTo(0, 1))?
        .queue(Print("LEFT/RIGHT: curve  +/-: amplitude  [/]: period  Q: quit"))?;

    let mut points = preview::sample(&CurveSpec::from(kind), &state.params, PLOT_WIDTH as usize);
    preview::sanitize(&mut points, 0.0);

    // Fit overshooting curves, but always show the [0, 1] band
    let (lo, hi) = preview::bounds(&points).unwrap_or((0.0, 1.0));
    let (lo, hi) = (lo.min(0.0), hi.max(1.0));
    let span = hi - lo;
    let rows = (PLOT_HEIGHT - 1) as f64;
    let row_of = |v: f64| TOP + ((hi - v) / span * rows).round() as u16;

    for (label, v) in [("1.0", 1.0), ("0.0", 0.0)] {
        out.queue(MoveTo(0, row_of(v)))?.queue(Print(label))?;
    }
    for (column, [_, v]) in points.iter().enumerate() {
        out.queue(MoveTo(LEFT + column as u16, row_of(*v)))?
            .queue(Print('*'))?;
    }

    out.flush()?;
    Ok(())
}

fn cleanup_terminal() {
    let _ = stdout().execute(Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn main() -> Result<()> {
    let mut state = PlotState::new();

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    draw(&state)?;

    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            if !state.handle_key(key_event.code) {
                break;
            }
            draw(&state)?;
        }
    }

    cleanup_terminal();
    Ok(())
}

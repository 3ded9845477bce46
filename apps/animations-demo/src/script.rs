//! Scripted interaction for the headless driver.
//!
//! A script is a whitespace separated list of steps:
//!
//! - `tap:<control>` where control is `pulse`, `grow`, `turn`, `change`,
//!   `view` or `pivot`
//! - `step:+1` / `step:-1` for the scale stepper
//! - `drag:<dx>,<dy>` moves the text drag gesture, `release` ends it
//! - `wait:<ms>` pumps frames

use std::fmt;

use kinetic_ui_graphics::Point;

use crate::frame::FrameSnapshot;
use crate::showcase::Showcase;
use crate::state::ShowcaseEvent;

/// Longest accepted `wait:` step.
pub const MAX_WAIT_MILLIS: u64 = 10 * 60 * 1000;

pub const DEFAULT_SCRIPT: &str = "wait:300 tap:grow step:+1 wait:2200 tap:turn wait:1500 \
     tap:change wait:600 tap:view wait:500 drag:40,12 drag:80,-6 wait:200 release wait:1200 \
     tap:pivot wait:600 tap:pivot wait:600";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptStep {
    Event(ShowcaseEvent),
    Wait { millis: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownCommand { token: String },
    UnknownControl { control: String },
    MissingArgument { command: &'static str },
    InvalidNumber { token: String },
    WaitTooLong { millis: u64 },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownCommand { token } => write!(f, "unknown command `{token}`"),
            ScriptError::UnknownControl { control } => write!(f, "unknown control `{control}`"),
            ScriptError::MissingArgument { command } => {
                write!(f, "`{command}` needs an argument")
            }
            ScriptError::InvalidNumber { token } => write!(f, "`{token}` is not a number"),
            ScriptError::WaitTooLong { millis } => {
                write!(f, "wait of {millis}ms exceeds {MAX_WAIT_MILLIS}ms")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    source.split_whitespace().map(parse_step).collect()
}

fn parse_step(token: &str) -> Result<ScriptStep, ScriptError> {
    let (command, argument) = match token.split_once(':') {
        Some((command, argument)) => (command, Some(argument)),
        None => (token, None),
    };
    let step = match command {
        "tap" => {
            let control = require(argument, "tap")?;
            ScriptStep::Event(tap_event(control)?)
        }
        "step" => {
            let delta = require(argument, "step")?;
            ScriptStep::Event(ShowcaseEvent::StepScale(parse_number(delta)?))
        }
        "drag" => {
            let coordinates = require(argument, "drag")?;
            let (dx, dy) = coordinates.split_once(',').ok_or_else(|| ScriptError::InvalidNumber {
                token: coordinates.to_string(),
            })?;
            ScriptStep::Event(ShowcaseEvent::DragChanged(Point::new(
                parse_number(dx)?,
                parse_number(dy)?,
            )))
        }
        "release" => ScriptStep::Event(ShowcaseEvent::DragEnded),
        "wait" => {
            let millis: u64 = parse_number(require(argument, "wait")?)?;
            if millis > MAX_WAIT_MILLIS {
                return Err(ScriptError::WaitTooLong { millis });
            }
            ScriptStep::Wait { millis }
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                token: token.to_string(),
            })
        }
    };
    Ok(step)
}

fn require<'a>(argument: Option<&'a str>, command: &'static str) -> Result<&'a str, ScriptError> {
    argument
        .filter(|argument| !argument.is_empty())
        .ok_or(ScriptError::MissingArgument { command })
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, ScriptError> {
    token
        .trim_start_matches('+')
        .parse()
        .map_err(|_| ScriptError::InvalidNumber {
            token: token.to_string(),
        })
}

fn tap_event(control: &str) -> Result<ShowcaseEvent, ScriptError> {
    let event = match control {
        "pulse" => ShowcaseEvent::TapPulse,
        "grow" => ShowcaseEvent::Grow,
        "turn" => ShowcaseEvent::Turn,
        "change" => ShowcaseEvent::ToggleShape,
        "view" => ShowcaseEvent::ToggleView,
        "pivot" => ShowcaseEvent::ToggleTransition,
        _ => {
            return Err(ScriptError::UnknownControl {
                control: control.to_string(),
            })
        }
    };
    Ok(event)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub events: usize,
    pub frames: u64,
}

/// Run `steps` against `showcase`, calling `on_frame` after every frame.
/// Each event is followed by one frame.
pub fn run_script(
    showcase: &mut Showcase,
    steps: &[ScriptStep],
    mut on_frame: impl FnMut(&FrameSnapshot),
) -> ScriptSummary {
    let mut summary = ScriptSummary::default();
    for step in steps {
        let frames = match *step {
            ScriptStep::Event(event) => {
                showcase.dispatch(event);
                summary.events += 1;
                1
            }
            ScriptStep::Wait { millis } => {
                let interval = showcase.options().frame_interval_nanos.max(1);
                millis
                    .saturating_mul(kinetic_core::NANOS_PER_MILLI)
                    .div_ceil(interval)
            }
        };
        for _ in 0..frames {
            showcase.advance_frame();
            on_frame(&showcase.frame());
        }
        summary.frames += frames;
        log::debug!("{step:?} -> {frames} frames");
    }
    summary
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;

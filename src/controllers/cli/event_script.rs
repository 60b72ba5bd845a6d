//! Text form of [`InputEvent`] for scripting headless renders.
//!
//! ```text
//! click:X,Y          pointer released at screen (X, Y)
//! move:X,Y           pointer moved to screen (X, Y)
//! scroll:DELTA       wheel delta, positive zooms out
//! step-up            double the zoom step
//! step-down          halve the zoom step
//! reset              restore the default view
//! toggle-axes        flip the debug axis overlay
//! resize:W,H         new viewport size
//! submit:HEX,ITERS   colour and iteration submission
//! ```

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::controllers::interactive::events::input_event::InputEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventScriptError {
    UnknownEvent { entry: String },
    MissingArgument { entry: String },
    UnexpectedArgument { entry: String },
    InvalidArgument { entry: String, reason: String },
}

impl fmt::Display for EventScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEvent { entry } => write!(f, "unknown event '{}'", entry),
            Self::MissingArgument { entry } => write!(f, "event '{}' needs an argument", entry),
            Self::UnexpectedArgument { entry } => {
                write!(f, "event '{}' takes no argument", entry)
            }
            Self::InvalidArgument { entry, reason } => {
                write!(f, "invalid argument in event '{}': {}", entry, reason)
            }
        }
    }
}

impl Error for EventScriptError {}

impl FromStr for InputEvent {
    type Err = EventScriptError;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let entry = entry.trim();
        let (name, argument) = match entry.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (entry, None),
        };

        match (name, argument) {
            ("click", Some(argument)) => {
                let (x, y) = parse_pair(entry, argument)?;
                Ok(Self::PointerRelease { x, y })
            }
            ("move", Some(argument)) => {
                let (x, y) = parse_pair(entry, argument)?;
                Ok(Self::PointerMoved { x, y })
            }
            ("scroll", Some(argument)) => {
                let delta: f32 = parse_value(entry, argument)?;
                if !delta.is_finite() {
                    return Err(EventScriptError::InvalidArgument {
                        entry: entry.to_string(),
                        reason: "scroll delta must be finite".to_string(),
                    });
                }
                Ok(Self::Scroll { delta })
            }
            ("resize", Some(argument)) => {
                let (width, height) = parse_pair(entry, argument)?;
                Ok(Self::Resize { width, height })
            }
            ("submit", Some(argument)) => {
                let (hex_rgba, max_iterations) = split_pair(entry, argument)?;
                Ok(Self::SubmitColorAndIterations {
                    hex_rgba: hex_rgba.to_string(),
                    max_iterations: max_iterations.to_string(),
                })
            }
            ("step-up", None) => Ok(Self::KeyZoomStepUp),
            ("step-down", None) => Ok(Self::KeyZoomStepDown),
            ("reset", None) => Ok(Self::KeyReset),
            ("toggle-axes", None) => Ok(Self::ToggleDebugAxes),
            ("click" | "move" | "scroll" | "resize" | "submit", None) => {
                Err(EventScriptError::MissingArgument {
                    entry: entry.to_string(),
                })
            }
            ("step-up" | "step-down" | "reset" | "toggle-axes", Some(_)) => {
                Err(EventScriptError::UnexpectedArgument {
                    entry: entry.to_string(),
                })
            }
            _ => Err(EventScriptError::UnknownEvent {
                entry: entry.to_string(),
            }),
        }
    }
}

fn split_pair<'a>(entry: &str, argument: &'a str) -> Result<(&'a str, &'a str), EventScriptError> {
    argument
        .split_once(',')
        .ok_or_else(|| EventScriptError::InvalidArgument {
            entry: entry.to_string(),
            reason: "expected two comma-separated values".to_string(),
        })
}

fn parse_pair<T>(entry: &str, argument: &str) -> Result<(T, T), EventScriptError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let (first, second) = split_pair(entry, argument)?;

    Ok((parse_value(entry, first)?, parse_value(entry, second)?))
}

fn parse_value<T>(entry: &str, text: &str) -> Result<T, EventScriptError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    text.trim()
        .parse()
        .map_err(|err: T::Err| EventScriptError::InvalidArgument {
            entry: entry.to_string(),
            reason: err.to_string(),
        })
}

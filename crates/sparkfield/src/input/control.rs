use std::fmt;
use std::str::FromStr;

use crate::systems::sparks::Tunable;

/// Commands the spark control protocol understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkOption {
    Limit,
    Spawn,
    Velocity,
    Gravity,
    Size,
    Fade,
    Swade,
    Threshold,
    /// Restore default properties, clear all sparks and stop generation.
    Reset,
    /// Toggle spark generation on or off.
    Spark,
}

impl SparkOption {
    /// Match order for string tokens. `SPARK` is last so that tokens such as
    /// `"SPARK_SIZE"` resolve to the more specific option.
    const TOKENS: [(&'static str, SparkOption); 10] = [
        ("LIMIT", Self::Limit),
        ("SPAWN", Self::Spawn),
        ("VELOCITY", Self::Velocity),
        ("GRAVITY", Self::Gravity),
        ("SIZE", Self::Size),
        ("FADE", Self::Fade),
        ("SWADE", Self::Swade),
        ("THRESHOLD", Self::Threshold),
        ("RESET", Self::Reset),
        ("SPARK", Self::Spark),
    ];

    /// Resolve a string token by substring containment, first match wins.
    /// Returns `None` for tokens that contain no known keyword.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(keyword, _)| token.contains(keyword))
            .map(|&(_, option)| option)
    }

    /// The numeric tunable this option adjusts, if any.
    pub fn tunable(self) -> Option<Tunable> {
        match self {
            Self::Limit => Some(Tunable::Limit),
            Self::Spawn => Some(Tunable::SpawnRate),
            Self::Velocity => Some(Tunable::VelocityRate),
            Self::Gravity => Some(Tunable::Gravity),
            Self::Size => Some(Tunable::Size),
            Self::Fade => Some(Tunable::FadeRate),
            Self::Swade | Self::Threshold | Self::Reset | Self::Spark => None,
        }
    }
}

/// A control token that matched no known option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown spark option: {:?}", self.0)
    }
}

impl std::error::Error for UnknownOption {}

impl FromStr for SparkOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// One (option, value) pair from the host's input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlEvent {
    pub option: SparkOption,
    pub value: f32,
}

impl ControlEvent {
    pub fn new(option: SparkOption, value: f32) -> Self {
        Self { option, value }
    }
}

/// A queue of control events.
/// The input layer pushes events as keys are pressed; the manager drains
/// them once per frame.
pub struct ControlQueue {
    events: Vec<ControlEvent>,
}

impl ControlQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: ControlEvent) {
        self.events.push(event);
    }

    /// Parse and push a string token. Unknown tokens are dropped.
    /// Returns whether the token was queued.
    pub fn push_token(&mut self, token: &str, value: f32) -> bool {
        match SparkOption::from_token(token) {
            Some(option) => {
                self.push(ControlEvent::new(option, value));
                true
            }
            None => {
                log::debug!("ignoring control token {:?}", token);
                false
            }
        }
    }

    /// Drain all pending events in push order.
    pub fn drain(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for ControlQueue {
    fn default() -> Self {
        Self::new()
    }
}

use crate::logging::LogLevel;
use std::sync::Mutex;
use tracing::{debug, error, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    CanonicalHost,
    TrailingSlash,
    CleanUrl,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::CanonicalHost => "canonical_host",
            RuleKind::TrailingSlash => "trailing_slash",
            RuleKind::CleanUrl => "clean_url",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    Redirect,
    Rewrite,
}

impl TransitionAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionAction::Redirect => "redirect",
            TransitionAction::Rewrite => "rewrite",
        }
    }
}

/// A rule that fired, with the value it saw and the value it produced.
///
/// For [`RuleKind::CanonicalHost`] the values are hosts; otherwise uris.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub rule: RuleKind,
    pub action: TransitionAction,
    pub from: String,
    pub to: String,
}

/// Receives every transition the normalizer makes.
///
/// Implementations must not fail or block: the decision is returned whether or
/// not the record lands anywhere.
pub trait TransitionSink {
    fn record(&self, transition: &Transition);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl TransitionSink for NoopSink {
    fn record(&self, _transition: &Transition) {}
}

macro_rules! emit {
    ($level:expr, $($fields:tt)*) => {
        match $level {
            LogLevel::Trace => trace!($($fields)*),
            LogLevel::Debug => debug!($($fields)*),
            LogLevel::Info  => info!($($fields)*),
            LogLevel::Warn  => warn!($($fields)*),
            LogLevel::Error => error!($($fields)*),
        }
    };
}

/// Emits each transition as a structured `tracing` event.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: LogLevel,
}

impl TracingSink {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl TransitionSink for TracingSink {
    fn record(&self, transition: &Transition) {
        let message = match transition.action {
            TransitionAction::Redirect => "redirecting",
            TransitionAction::Rewrite => "rewriting",
        };

        emit!(
            self.level,
            rule = transition.rule.as_str(),
            action = transition.action.as_str(),
            from = %transition.from,
            to = %transition.to,
            "{}",
            message
        );
    }
}

/// Keeps transitions in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub(crate) transitions: Mutex<Vec<Transition>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transitions(&self) -> Vec<Transition> {
        match self.transitions.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transitions().is_empty()
    }
}

impl TransitionSink for RecordingSink {
    fn record(&self, transition: &Transition) {
        // A poisoned lock drops the record rather than failing the request.
        if let Ok(mut guard) = self.transitions.lock() {
            guard.push(transition.clone());
        }
    }
}

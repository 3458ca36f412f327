//! Display surface contract
//!
//! The application core talks to whatever renders its output only through
//! [`DisplaySurface`]. It never holds on to anything it has rendered.

use crate::chart::TrendChart;
use crate::error::Result;
use std::fmt;

/// Transient status shown while and after an action runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Nothing in progress
    Idle,
    /// Work in progress (spinner)
    Busy(String),
    /// Action completed
    Success(String),
    /// Input rejected; nothing was done
    Warning(String),
    /// Action failed
    Error(String),
}

impl Status {
    pub fn busy(msg: impl Into<String>) -> Self {
        Self::Busy(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Message carried by the status, empty for [`Status::Idle`]
    pub fn message(&self) -> &str {
        match self {
            Status::Idle => "",
            Status::Busy(msg) | Status::Success(msg) | Status::Warning(msg) | Status::Error(msg) => {
                msg
            }
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Busy(msg) => write!(f, "⏳ {msg}"),
            Status::Success(msg) => write!(f, "✅ {msg}"),
            Status::Warning(msg) => write!(f, "⚠️  {msg}"),
            Status::Error(msg) => write!(f, "❌ {msg}"),
        }
    }
}

/// Something that can show statuses, answer text and trend charts
pub trait DisplaySurface {
    fn show_status(&mut self, status: Status) -> Result<()>;

    fn render_text(&mut self, text: &str) -> Result<()>;

    /// Draw a line chart of date against price
    fn render_chart(&mut self, chart: &TrendChart) -> Result<()>;
}

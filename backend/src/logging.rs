use chrono::{Local, NaiveTime};
use env_logger::fmt::Formatter;
use log::{Level, Record};
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use crate::config::Settings;

const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Undefined,
    Standard,
    Warn,
    Severe,
}

impl Severity {
    /// Tag printed between the timestamp and the message.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Undefined => "UNDEFINED",
            Severity::Standard => "DEBUG",
            Severity::Warn => "WARN",
            Severity::Severe => "SEVERE",
        }
    }

    pub fn level(self) -> Level {
        match self {
            Severity::Undefined => Level::Trace,
            Severity::Standard => Level::Debug,
            Severity::Warn => Level::Warn,
            Severity::Severe => Level::Error,
        }
    }

    pub fn from_level(level: Level) -> Severity {
        match level {
            Level::Error => Severity::Severe,
            Level::Warn => Severity::Warn,
            Level::Info | Level::Debug => Severity::Standard,
            Level::Trace => Severity::Undefined,
        }
    }

    /// Only warnings and severe errors get a coloured tag.
    pub fn is_highlighted(self) -> bool {
        matches!(self, Severity::Warn | Severity::Severe)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Renders a console line: `[HH:MM:SS LEVEL]: message`.
pub fn format_line(time: NaiveTime, severity: Severity, message: &str) -> String {
    layout(time, severity.tag(), message)
}

fn layout(time: NaiveTime, tag: impl fmt::Display, message: impl fmt::Display) -> String {
    format!("[{} {}]: {}", time.format(TIME_FORMAT), tag, message)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub severity: Severity,
    pub message: String,
    pub time: NaiveTime,
}

impl LogEvent {
    pub fn now(severity: Severity, message: &str) -> LogEvent {
        LogEvent {
            severity,
            message: message.to_string(),
            time: Local::now().time(),
        }
    }

    pub fn line(&self) -> String {
        format_line(self.time, self.severity, &self.message)
    }
}

/// Sink the lifecycle controller writes its progress to.
pub trait Logger {
    fn log(&self, severity: Severity, message: &str);

    fn debug(&self, message: &str) {
        self.log(Severity::Standard, message);
    }
}

/// Forwards to the `log` facade; pair with [`init_console`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, severity: Severity, message: &str) {
        log::log!(severity.level(), "{message}");
    }
}

/// Keeps every event in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryLogger {
    events: Rc<RefCell<Vec<LogEvent>>>,
}

impl MemoryLogger {
    pub fn new() -> MemoryLogger {
        MemoryLogger::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(LogEvent::line).collect()
    }

    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|e| e.severity == severity && e.message.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, severity: Severity, message: &str) {
        self.events.borrow_mut().push(LogEvent::now(severity, message));
    }
}

/// Console line for one record. Only the WARN and SEVERE tags are styled;
/// the style is empty when colour is off.
fn write_record(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let severity = Severity::from_level(record.level());
    let time = Local::now().time();
    let line = if severity.is_highlighted() {
        let style = buf.default_level_style(record.level());
        let tag = format!("{style}{}{style:#}", severity.tag());
        layout(time, tag, record.args())
    } else {
        layout(time, severity.tag(), record.args())
    };
    writeln!(buf, "{line}")
}

/// Console logger configuration: filter from settings, overridden by
/// `RUST_LOG`.
pub fn console_builder(settings: &Settings) -> env_logger::Builder {
    let env = env_logger::Env::default().default_filter_or(settings.log_filter.as_str());
    let mut builder = env_logger::Builder::from_env(env);
    if !settings.colored_log {
        builder.write_style(env_logger::WriteStyle::Never);
    }
    builder.format(write_record);
    builder
}

pub fn init_console(settings: &Settings) -> Result<(), log::SetLoggerError> {
    console_builder(settings).try_init()
}

//! Structured logging.
//!
//! # Responsibilities
//! - Install the process-wide `tracing` subscriber
//! - Render events as `<timestamp> - <message>`
//! - Resolve the log filter from `RUST_LOG` or configuration

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::responder::Timestamp;

/// Event format: `2024-01-01 00:00:00.000 - got request, delay=5`.
///
/// Levels other than INFO are spelled out after the dash.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{} - ", Timestamp::now())?;

        let level = *event.metadata().level();
        if level != Level::INFO {
            write!(writer, "{} ", level)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build the filter: `RUST_LOG` wins, then `configured`, then "info".
pub fn filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(configured: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter(configured))
        .with(tracing_subscriber::fmt::layer().event_format(LineFormat))
        .try_init()
}

/// In-memory log sink rendering with `LineFormat`.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LogCapture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl LogCapture {
    /// Subscriber writing into this capture, up to `level`.
    pub(crate) fn subscriber(&self, level: Level) -> impl Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(level)
            .event_format(LineFormat)
            .with_writer(move || writer.clone())
            .finish()
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce()) -> String {
        let logs = LogCapture::default();
        tracing::subscriber::with_default(logs.subscriber(Level::DEBUG), f);
        logs.contents()
    }

    #[test]
    fn test_info_line_shape() {
        let output = capture(|| tracing::info!("got request, delay={}", 5.5));

        let (timestamp, message) = output.split_once(" - ").unwrap();
        assert_eq!(timestamp.len(), "2024-01-01 00:00:00.000".len());
        assert_eq!(&timestamp[4..5], "-");
        assert_eq!(&timestamp[10..11], " ");
        assert_eq!(&timestamp[19..20], ".");
        assert_eq!(message, "got request, delay=5.5\n");
    }

    #[test]
    fn test_other_levels_are_labelled() {
        let output = capture(|| tracing::warn!("drain timed out"));
        assert!(output.ends_with(" - WARN drain timed out\n"), "{output}");
    }

    #[test]
    fn test_structured_fields_follow_message() {
        let output = capture(|| tracing::debug!(delay = 2, "wait finished"));
        assert!(output.ends_with(" - DEBUG wait finished delay=2\n"), "{output}");
    }
}

//! Console event formatter: `[INFO] message`, `[WARNING] message`, `[ERROR] message`.
//!
//! Used by `main` for every log line. No timestamp or target: the output is read by
//! the person running the tool, between interactive prompts.

use std::fmt;

use tracing_core::{Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Default, Clone, Copy)]
pub struct BracketedLevel;

impl BracketedLevel {
    pub fn new() -> Self {
        Self
    }

    fn tag(level: &Level) -> &'static str {
        if *level == Level::WARN {
            "WARNING"
        } else {
            level.as_str()
        }
    }
}

impl<S, N> FormatEvent<S, N> for BracketedLevel
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing_core::Event<'_>,
    ) -> fmt::Result {
        write!(writer, "[{}] ", Self::tag(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone)]
    struct VecWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for VecWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let sink = Arc::new(Mutex::new(Vec::<u8>::new()));
        let writer = {
            let sink = Arc::clone(&sink);
            move || VecWriter(Arc::clone(&sink))
        };

        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .event_format(BracketedLevel::new())
                .with_writer(writer)
                .with_ansi(false),
        );

        tracing::subscriber::with_default(subscriber, emit);
        let output = String::from_utf8(sink.lock().unwrap().clone()).unwrap();
        output
    }

    #[test]
    fn test_levels_are_bracketed() {
        let output = capture(|| {
            tracing::info!("Loading resume data...");
            tracing::warn!("The settings file was not found");
            tracing::error!("Failed to generate PDF");
        });

        assert_eq!(
            output,
            "[INFO] Loading resume data...\n\
             [WARNING] The settings file was not found\n\
             [ERROR] Failed to generate PDF\n"
        );
    }

    #[test]
    fn test_structured_fields_follow_message() {
        let output = capture(|| tracing::info!(words = 420, "Budget computed"));
        assert_eq!(output, "[INFO] Budget computed words=420\n");
    }
}

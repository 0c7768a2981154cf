//! Event formatter for the two-stream logging setup.

use chrono::Local;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::redact::mask_tokens;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats records as `timestamp [LEVEL] message`, with source file, line,
/// and target appended for DEBUG and TRACE records. The finished line is
/// passed through token redaction before it reaches the stream.
#[derive(Debug, Default, Clone)]
pub struct AdminFormatter;

impl<S, N> FormatEvent<S, N> for AdminFormatter
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
        let meta = event.metadata();

        // Format into a scratch buffer so redaction sees the whole line,
        // including interpolated field values.
        let mut line = String::new();
        {
            let mut buf = Writer::new(&mut line);
            write!(
                buf,
                "{} [{:>5}] ",
                Local::now().format(TIMESTAMP_FORMAT),
                meta.level()
            )?;
            if *meta.level() >= Level::DEBUG {
                write!(
                    buf,
                    "({}.{}, {}) ",
                    meta.file().unwrap_or("<unknown>"),
                    meta.line().unwrap_or(0),
                    meta.target()
                )?;
            }
            ctx.field_format().format_fields(buf.by_ref(), event)?;
        }

        writeln!(writer, "{}", mask_tokens(&line))
    }
}

//! Format utilities (time, writer)

use std::fmt;

use tracing_subscriber::fmt::format::Writer as FmtWriter;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::Writer;

/// Timestamp formatter that can be switched off without changing the layer type
#[derive(Debug, Clone, Copy)]
pub(crate) struct Timer {
    enabled: bool,
}

impl FormatTime for Timer {
    fn format_time(&self, w: &mut FmtWriter<'_>) -> fmt::Result {
        if self.enabled {
            SystemTime.format_time(w)
        } else {
            Ok(())
        }
    }
}

/// Create timer based on the display `time` toggle
pub(crate) const fn make_timer(enabled: bool) -> Timer {
    Timer { enabled }
}

/// Create the writer for the configured destination
pub(crate) fn make_writer(writer: Writer) -> BoxMakeWriter {
    match writer {
        Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
        Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
    }
}

/// Build a text fmt layer (`pretty` or `compact`) with the display options applied
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr, $writer:expr) => {
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_thread_names($display.thread_names)
            .with_timer($crate::format::make_timer($display.time))
    };
}

/// JSON fmt layer (has additional options)
macro_rules! create_json_layer {
    ($display:expr, $writer:expr) => {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer($writer)
            .with_current_span(true)
            .with_span_list($display.span_list)
            .flatten_event($display.flatten)
            .with_ansi(false)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_thread_names($display.thread_names)
            .with_timer($crate::format::make_timer($display.time))
    };
}

pub(crate) use {create_fmt_layer, create_json_layer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_timer_writes_nothing() {
        let mut out = String::new();
        make_timer(false)
            .format_time(&mut FmtWriter::new(&mut out))
            .unwrap();
        assert!(out.is_empty());

        make_timer(true)
            .format_time(&mut FmtWriter::new(&mut out))
            .unwrap();
        assert!(!out.is_empty());
    }
}

//! Format layer construction

use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::registry::LookupSpan;

use crate::config::{Config, Format, Writer};

pub(super) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

pub(super) fn make_writer(writer: Writer) -> BoxMakeWriter {
    match writer {
        Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
        Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
    }
}

/// Build the fmt layer for `config.format` with its display toggles applied.
pub(super) fn fmt_layer<S>(config: &Config) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let display = &config.display;
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(make_writer(config.writer))
        .with_ansi(display.colors)
        .with_target(display.target)
        .with_file(display.source)
        .with_line_number(display.source)
        .with_thread_names(display.thread_names);

    // Every arm is a distinct layer type.
    match (config.format, display.time) {
        (Format::Pretty, true) => layer.pretty().boxed(),
        (Format::Pretty, false) => layer.pretty().without_time().boxed(),
        (Format::Compact, true) => layer.compact().boxed(),
        (Format::Compact, false) => layer.compact().without_time().boxed(),
        (Format::Json, true) => layer
            .json()
            .with_current_span(true)
            .flatten_event(display.flatten)
            .boxed(),
        (Format::Json, false) => layer
            .json()
            .with_current_span(true)
            .flatten_event(display.flatten)
            .without_time()
            .boxed(),
    }
}

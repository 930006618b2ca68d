// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, TracingScope, WriterConfig};
use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
    };
}

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs a subscriber built from `tracing_config`.
///
/// Returns a guard for [`TracingScope::ThreadLocal`]; the subscriber is removed when it
/// is dropped. [`TracingScope::Global`] returns [`None`].
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let scope = tracing_config.scope;
    let layers = try_create_layers(tracing_config)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    match scope {
        TracingScope::Global => {
            subscriber.try_init().into_diagnostic()?;
            Ok(None)
        }
        TracingScope::ThreadLocal => Ok(Some(subscriber.set_default())),
    }
}

/// # Errors
///
/// Propagates failures from the individual layer constructors.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Applies to layers added later that have no filter of their own.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// # Errors
///
/// Currently infallible. The signature matches the other layer constructors.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Buffer(buffer) => {
                let tracing_writer = move || buffer.clone();
                Some(Box::new(
                    fmt_layer
                        .with_ansi(false)
                        .with_writer(tracing_writer)
                        .with_filter(level_filter),
                ))
            }
        },
        WriterConfig::None => None,
    })
}

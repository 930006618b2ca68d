// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          io::Write,
          sync::{Arc, Mutex}};
use tracing_core::LevelFilter;

/// Where the crate's `tracing` events go, and from which level on.
///
/// Use [`init_tracing`](crate::init_tracing) to install it. Embedders that already have
/// a subscriber can skip this entirely; the crate only emits events.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: events below this level are dropped.
/// - `scope`: [`TracingScope`] to install process wide or for the current thread.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
    pub scope: TracingScope,
}

#[derive(Debug, Clone)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
}

#[derive(Clone)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
    /// In-memory sink, mostly for tests that assert on log output.
    Buffer(LogBuffer),
}

impl Debug for DisplayPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayPreference::Stdout => write!(f, "Stdout"),
            DisplayPreference::Stderr => write!(f, "Stderr"),
            DisplayPreference::Buffer(_) => write!(f, "Buffer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    Global,
    /// Only the calling thread, until the returned guard is dropped.
    ThreadLocal,
}

impl TracingConfig {
    /// Debug level events on stderr, installed globally. Stdout is usually the terminal
    /// being driven, so it is not the default.
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
            scope: TracingScope::Global,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level_filter = LevelFilter::from_level(level);
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TracingScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl Default for TracingConfig {
    fn default() -> Self { Self::new_display(DisplayPreference::Stderr) }
}

/// Cloneable handle to a shared byte buffer that log lines are appended to.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Everything written so far. Empty if a writer panicked while holding the lock.
    #[must_use]
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut bytes = self
            .inner
            .lock()
            .map_err(|_| std::io::Error::other("log buffer lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

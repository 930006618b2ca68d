// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Link recognition over decoded line text. Independent of the decoder: the embedder
//! reads a line from its grid and asks [`TextProcessing::find_links`].

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod hyperlink_filter;
mod text_processing;
mod url_filter;

// Re-export.
pub use hyperlink_filter::*;
pub use text_processing::*;
pub use url_filter::*;

//! # Inline Parsing
//!
//! Staged inline parsing over sequences of [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Parsing starts from a single plain span and runs a fixed list of stages
//! ([`parser::PIPELINE`]). Each stage only looks inside plain spans and
//! replaces the whole sequence with a new one:
//!
//! ```text
//! "a `b` **c** [d](e)"
//!   -> code    [plain "a ", code "b", plain " **c** [d](e)"]
//!   -> images  (unchanged)
//!   -> links   [.., plain " **c** ", link "d" (e)]
//!   -> bold    [.., plain " ", bold "c", plain " ", link "d" (e)]
//!   -> italic  (unchanged)
//! ```
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and the closed `SpanKind` enum
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`cursor`**: `Cursor` for literal delimiter search
//! - **`delimited`**: `split_delimited()` for code, bold and italic
//! - **`bracketed`**: image/link extraction and splitting
//! - **`parser`**: `parse_inline()` main entry point and the stage list
//! - **`error`**: `InlineError`
//!
//! ## Raw Zone Precedence
//!
//! Code spans are extracted first: `` `[not a link](x)` `` parses as a single
//! code span, not as text containing a link.

pub mod bracketed;
pub mod cursor;
pub mod delimited;
pub mod error;
pub mod kinds;
pub mod parser;
pub mod types;

pub use bracketed::{extract_images, extract_links, split_images, split_links};
pub use delimited::split_delimited;
pub use error::InlineError;
pub use parser::{PIPELINE, Stage, parse_inline};
pub use types::{KindError, SpanKind, TextSpan};

//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = "`" `` - raw zone, extracted before anything else
//! - **`Strong`**: `DELIM = "**"`
//! - **`Emphasis`**: `DELIM = "*"`
//! - **`Image`**: `![alt](src)`
//! - **`Link`**: `[text](href)`, never preceded by `!`
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser
//! code. The tokenizers call these; they never hardcode `**` or `![`.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use image::Image;
pub use link::Link;
pub use strong::Strong;

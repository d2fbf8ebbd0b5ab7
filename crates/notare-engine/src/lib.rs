pub mod highlight;
pub mod io;
pub mod markup;
pub mod models;
pub mod parsing;


// Re-export key types for easier usage
pub use highlight::{ClassedHighlighter, HighlightError, Highlighter};
pub use markup::{CommonMarkRenderer, MarkupRenderer};
pub use models::*;
pub use parsing::{ParseError, Pipeline, parse_example};

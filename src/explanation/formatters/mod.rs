pub mod markdown;

pub use markdown::MarkdownFormatter;

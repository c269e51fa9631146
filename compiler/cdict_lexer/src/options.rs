//! Scanner configuration.

/// Knobs for one scan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    /// Fold the text after a line-initial `#` / `%:` into one `Directive`
    /// span instead of classifying it token by token.
    pub fold_directives: bool,
    /// Emit `Whitespace` spans. With this off the spans no longer cover
    /// the input, only its significant parts.
    pub keep_whitespace: bool,
    /// Maximum number of lexical warnings kept (0 = unlimited).
    pub warning_limit: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            fold_directives: true,
            keep_whitespace: true,
            warning_limit: 0,
        }
    }
}

impl ScanOptions {
    /// Options for a scan that drops whitespace spans.
    pub fn significant() -> Self {
        ScanOptions {
            keep_whitespace: false,
            ..ScanOptions::default()
        }
    }
}

use thiserror::Error;

/// Errors that abort a document graph build.
///
/// Unresolvable external references are never errors (they synthesize
/// placeholder nodes), and failed source units are reported as snapshot
/// diagnostics rather than build failures.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Two distinct types mapped to the same output location. Fatal: writing
    /// both would silently overwrite one type's documentation.
    #[error("write path collision at `{path}`: `{first}` and `{second}` map to the same output location")]
    WritePathCollision {
        path: String,
        first: String,
        second: String,
    },

    /// The front-end supplied a symbol category outside the supported set.
    /// Never coerced into a supported kind.
    #[error("unsupported symbol category `{category}` for `{name}`")]
    UnsupportedSymbol { name: String, category: String },
}

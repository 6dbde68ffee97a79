use thiserror::Error;

/// Failures surfaced by the request pipeline.
///
/// Every variant is fatal to the invocation; the binary maps them all to
/// exit code 1. Usage errors (a bad `--lookup` invocation) are handled at
/// the CLI layer and never reach this enum.
#[derive(Error, Debug)]
pub enum Error {
    #[error("You must create a .condrc file in $HOME.")]
    MissingConfig,

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bad HTTP Status: {0}")]
    BadStatus(u16),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// All errors that can occur while loading record stores.
#[derive(thiserror::Error, Debug)]
pub enum HubError {
    /// An embedded fixture (or a provider payload) failed to decode.
    #[error("failed to decode {entity} records: {source}")]
    Decode {
        entity: &'static str,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HubError>;

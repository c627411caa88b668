#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("element name must not be empty")]
  EmptyName,

  #[error("unknown element `{0}`")]
  UnknownElement(String),

  #[error("invalid registry configuration: {0}")]
  Config(#[from] serde_json::Error),
}

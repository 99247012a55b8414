use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("password is required")]
    MissingPassword,
    #[error("failed to gather randomness")]
    Entropy(#[from] rand::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    /// Returns a user-friendly error message suitable for displaying in the chat window
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Config(_) => {
                "Desculpe, há um problema de configuração no assistente. Contate o administrador.".to_string()
            }
            ChatError::InvalidArgument(_) => {
                "Desculpe, as regras do assistente estão inválidas. Contate o administrador.".to_string()
            }
            ChatError::Io(_) => {
                "Desculpe, não consegui ler os arquivos do assistente. Tente novamente.".to_string()
            }
            ChatError::Json(_) => {
                "Desculpe, o arquivo de regras do assistente está mal formatado.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;

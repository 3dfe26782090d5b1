// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("Erro ao processar password")]
    PasswordHashingError,

    // Mesma variante para "e-mail não existe" e "senha errada": a resposta
    // não pode denunciar qual dos dois falhou.
    #[error("Usuário ou senha incorretos")]
    CredenciaisInvalidas,

    #[error("Erro na sessão: {0}")]
    SessionError(String),

    #[error("Acesso negado: Usuário não identificado.")]
    NaoAutenticado,

    #[error("{0}")]
    AcessoNegado(String),

    #[error("{0}")]
    Validacao(String),

    #[error("Registro não encontrado.")]
    NaoEncontrado,

    #[error("Erro interno inesperado")]
    InternalServerError,
}

// Como converter AppError numa resposta HTTP (JSON { "error": ... })
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = match &self {
            // Pool esgotado é transitório: o cliente deve tentar de novo.
            AppError::SqlxError(sqlx::Error::PoolTimedOut) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Serviço temporariamente indisponível. Tente novamente.".to_string(),
            ),
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocorreu um erro inesperado no servidor.".to_string(),
            ),
            AppError::EnvVarError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro de configuração.".to_string(),
            ),
            AppError::PasswordHashingError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao processar credenciais.".to_string(),
            ),
            AppError::CredenciaisInvalidas | AppError::NaoAutenticado => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::SessionError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro na gestão da sua sessão.".to_string(),
            ),
            AppError::AcessoNegado(_) => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Validacao(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NaoEncontrado => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocorreu um erro inesperado no servidor.".to_string(),
            ),
        };

        (status, Json(json!({ "error": user_message }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;

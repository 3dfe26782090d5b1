// src/web/mw_professor.rs
use crate::{error::AppError, models::usuario::Papel, web::mw_auth::UsuarioLogado};
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::Response,
};

/// Middleware das rotas de escrita: só professores passam.
/// Deve ser executado *depois* de `exigir_autenticacao`, que é quem
/// resolve o usuário e o deixa nas extensões.
pub async fn exigir_professor(
    Extension(usuario): Extension<UsuarioLogado>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if usuario.0.tipo == Papel::Professor {
        tracing::debug!("Gate professor: acesso concedido para {}.", usuario.0.id);
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Gate professor: acesso negado para o usuário {}.", usuario.0.id);
        Err(AppError::AcessoNegado(
            "Acesso negado. Recurso exclusivo para professores.".to_string(),
        ))
    }
}

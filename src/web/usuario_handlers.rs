// src/web/usuario_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{AtualizarPerfil, FiltroAlunos},
    services::usuario_service,
    state::AppState,
    web::mw_auth::UsuarioLogado,
};
use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use serde_json::{json, Value};

// GET /usuarios/{id}
pub async fn obter_perfil(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let perfil = usuario_service::perfil_publico(&state.db_pool, id).await?;
    Ok(Json(json!({ "message": "success", "data": perfil })))
}

// PUT /usuarios/{id}
pub async fn atualizar_perfil(
    State(state): State<AppState>,
    Extension(usuario): Extension<UsuarioLogado>,
    Path(id): Path<i64>,
    Json(dados): Json<AtualizarPerfil>,
) -> AppResult<Json<Value>> {
    // Cada um só edita o próprio perfil
    if usuario.0.id != id {
        tracing::warn!(
            "Usuário {} tentou editar o perfil {}.",
            usuario.0.id,
            id
        );
        return Err(AppError::AcessoNegado("Acesso negado".to_string()));
    }

    let changes = usuario_service::atualizar_perfil(&state.db_pool, id, &dados).await?;
    Ok(Json(json!({ "message": "success", "changes": changes })))
}

// GET /alunos
pub async fn listar_alunos(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroAlunos>,
) -> AppResult<Json<Value>> {
    let alunos = usuario_service::listar_alunos(&state.db_pool, &filtro).await?;
    Ok(Json(json!({ "message": "success", "data": alunos })))
}

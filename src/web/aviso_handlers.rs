// src/web/aviso_handlers.rs
use crate::{
    error::AppResult,
    models::{
        aviso::{AtualizarAviso, CriarAviso, FiltroAvisos},
        usuario::Papel,
    },
    services::aviso_service,
    state::AppState,
    web::mw_auth::UsuarioLogado,
};
use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use serde_json::{json, Value};

// GET /avisos
pub async fn listar_avisos(
    State(state): State<AppState>,
    Extension(usuario): Extension<UsuarioLogado>,
    Query(mut filtro): Query<FiltroAvisos>,
) -> AppResult<Json<Value>> {
    // Aluno enxerga só o que é dele: os filtros da URL são descartados e a
    // identidade da sessão entra no lugar (o gate já barrou valores alheios)
    if usuario.0.tipo == Papel::Aluno {
        filtro.aluno_id = Some(usuario.0.id);
        filtro.turma = usuario.0.turma.clone();
    }

    let avisos = aviso_service::listar(&state.db_pool, &filtro).await?;
    Ok(Json(json!({ "message": "success", "data": avisos })))
}

// POST /avisos
pub async fn criar_aviso(
    State(state): State<AppState>,
    Json(dados): Json<CriarAviso>,
) -> AppResult<Json<Value>> {
    let id = aviso_service::criar(&state.db_pool, &dados).await?;
    Ok(Json(json!({ "message": "success", "id": id })))
}

// PUT /avisos/{id}
pub async fn atualizar_aviso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dados): Json<AtualizarAviso>,
) -> AppResult<Json<Value>> {
    let changes = aviso_service::atualizar(&state.db_pool, id, &dados).await?;
    Ok(Json(json!({ "message": "success", "changes": changes })))
}

// DELETE /avisos/{id}
pub async fn apagar_aviso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let changes = aviso_service::apagar(&state.db_pool, id).await?;
    Ok(Json(json!({ "message": "deleted", "changes": changes })))
}

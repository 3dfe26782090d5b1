// src/web/evento_handlers.rs
use crate::{
    error::AppResult,
    models::evento::{DadosEvento, FiltroEventos},
    services::evento_service,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

// GET /eventos
pub async fn listar_eventos(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroEventos>,
) -> AppResult<Json<Value>> {
    let eventos = evento_service::listar(&state.db_pool, &filtro).await?;
    Ok(Json(json!({ "message": "success", "data": eventos })))
}

// POST /eventos
pub async fn criar_evento(
    State(state): State<AppState>,
    Json(dados): Json<DadosEvento>,
) -> AppResult<Json<Value>> {
    let id = evento_service::criar(&state.db_pool, &dados).await?;
    Ok(Json(json!({ "message": "success", "id": id })))
}

// PUT /eventos/{id}
pub async fn atualizar_evento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dados): Json<DadosEvento>,
) -> AppResult<Json<Value>> {
    let changes = evento_service::atualizar(&state.db_pool, id, &dados).await?;
    Ok(Json(json!({ "message": "success", "changes": changes })))
}

// DELETE /eventos/{id}
pub async fn apagar_evento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let changes = evento_service::apagar(&state.db_pool, id).await?;
    Ok(Json(json!({ "message": "deleted", "changes": changes })))
}

// src/web/suporte_handlers.rs
use crate::{
    error::AppResult,
    models::suporte::{CriarMensagemSuporte, FiltroSuporte, ResponderSuporte},
    services::suporte_service,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

// POST /suporte
pub async fn criar_mensagem(
    State(state): State<AppState>,
    Json(dados): Json<CriarMensagemSuporte>,
) -> AppResult<Json<Value>> {
    let id = suporte_service::criar(&state.db_pool, &dados).await?;
    Ok(Json(json!({ "message": "success", "id": id })))
}

// GET /suporte
pub async fn listar_mensagens(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroSuporte>,
) -> AppResult<Json<Value>> {
    let mensagens = suporte_service::listar(&state.db_pool, &filtro).await?;
    Ok(Json(json!({ "message": "success", "data": mensagens })))
}

// PUT /suporte/{id}
pub async fn responder_mensagem(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dados): Json<ResponderSuporte>,
) -> AppResult<Json<Value>> {
    let changes = suporte_service::responder(&state.db_pool, id, &dados).await?;
    Ok(Json(json!({ "message": "success", "changes": changes })))
}

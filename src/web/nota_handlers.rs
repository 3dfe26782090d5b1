// src/web/nota_handlers.rs
use crate::{
    error::AppResult,
    models::nota::{FiltroNotas, LancarNota},
    services::nota_service,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

// GET /notas
pub async fn listar_notas(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroNotas>,
) -> AppResult<Json<Value>> {
    let notas = nota_service::listar(&state.db_pool, &filtro).await?;
    Ok(Json(json!({ "message": "success", "data": notas })))
}

// POST /notas
pub async fn lancar_nota(
    State(state): State<AppState>,
    Json(dados): Json<LancarNota>,
) -> AppResult<Json<Value>> {
    nota_service::lancar(&state.db_pool, &dados).await?;
    Ok(Json(json!({ "message": "success" })))
}

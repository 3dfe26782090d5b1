// src/web/materia_handlers.rs
use crate::{
    error::AppResult,
    models::materia::{DadosMateria, FiltroMaterias, SeedMaterias},
    services::materia_service,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

// GET /materias
pub async fn listar_materias(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroMaterias>,
) -> AppResult<Json<Value>> {
    let materias = materia_service::listar(&state.db_pool, &filtro).await?;
    Ok(Json(json!({ "message": "success", "data": materias })))
}

// POST /materias
pub async fn criar_materia(
    State(state): State<AppState>,
    Json(dados): Json<DadosMateria>,
) -> AppResult<Json<Value>> {
    let id = materia_service::criar(&state.db_pool, &dados).await?;
    Ok(Json(json!({ "message": "success", "id": id })))
}

// PUT /materias/{id}
pub async fn atualizar_materia(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dados): Json<DadosMateria>,
) -> AppResult<Json<Value>> {
    let changes = materia_service::atualizar(&state.db_pool, id, &dados).await?;
    Ok(Json(json!({ "message": "success", "changes": changes })))
}

// DELETE /materias/{id}
pub async fn apagar_materia(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let changes = materia_service::apagar(&state.db_pool, id).await?;
    Ok(Json(json!({ "message": "deleted", "changes": changes })))
}

// POST /materias/seed
pub async fn semear_materias(
    State(state): State<AppState>,
    Json(dados): Json<SeedMaterias>,
) -> AppResult<Json<Value>> {
    let professor = materia_service::nome_professor(dados.professor.as_deref());
    materia_service::semear_padrao(&state.db_pool, &professor).await?;
    Ok(Json(json!({
        "message": "success",
        "professor": professor,
        "inseridas": materia_service::MATERIAS_PADRAO.len(),
    })))
}

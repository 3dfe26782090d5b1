// src/web/frequencia_handlers.rs
use crate::{
    error::AppResult,
    models::{
        frequencia::{FiltroFrequencia, LancarFrequencia},
        usuario::Papel,
    },
    services::frequencia_service,
    state::AppState,
    web::mw_auth::UsuarioLogado,
};
use axum::{
    extract::{Extension, Query, State},
    Json,
};
use serde_json::{json, Value};

// GET /frequencia
pub async fn listar_frequencia(
    State(state): State<AppState>,
    Extension(usuario): Extension<UsuarioLogado>,
    Query(mut filtro): Query<FiltroFrequencia>,
) -> AppResult<Json<Value>> {
    // Aluno só vê a própria frequência; os demais filtros (disciplina,
    // data, turma) continuam valendo por cima disso
    if usuario.0.tipo == Papel::Aluno {
        filtro.aluno_id = Some(usuario.0.id);
    }

    let registros = frequencia_service::listar(&state.db_pool, &filtro).await?;
    Ok(Json(json!({ "message": "success", "data": registros })))
}

// POST /frequencia
pub async fn lancar_frequencia(
    State(state): State<AppState>,
    Json(dados): Json<LancarFrequencia>,
) -> AppResult<Json<Value>> {
    frequencia_service::lancar(&state.db_pool, &dados).await?;
    Ok(Json(json!({ "message": "success" })))
}

// src/services/evento_service.rs
use crate::{
    error::{AppError, AppResult},
    models::evento::{DadosEvento, Evento, FiltroEventos},
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Lista eventos em ordem cronológica. Com filtro de turma entram também
/// os eventos globais (turma NULL ou vazia).
pub async fn listar(db_pool: &SqlitePool, filtro: &FiltroEventos) -> AppResult<Vec<Evento>> {
    let mut consulta: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM eventos");
    if let Some(turma) = &filtro.turma {
        consulta
            .push(" WHERE turma = ")
            .push_bind(turma)
            .push(" OR turma IS NULL OR turma = ''");
    }
    consulta.push(" ORDER BY data ASC");

    let eventos = consulta
        .build_query_as::<Evento>()
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} eventos.", eventos.len());
    Ok(eventos)
}

pub async fn criar(db_pool: &SqlitePool, dados: &DadosEvento) -> AppResult<i64> {
    let resultado = sqlx::query(
        "INSERT INTO eventos (titulo, descricao, data, categoria, tipo, turma, cor, materia) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&dados.titulo)
    .bind(&dados.descricao)
    .bind(&dados.data)
    .bind(&dados.categoria)
    .bind(&dados.tipo)
    .bind(&dados.turma)
    .bind(&dados.cor)
    .bind(&dados.materia)
    .execute(db_pool)
    .await?;

    let id = resultado.last_insert_rowid();
    tracing::info!("✅ Evento {} criado.", id);
    Ok(id)
}

pub async fn atualizar(db_pool: &SqlitePool, id: i64, dados: &DadosEvento) -> AppResult<u64> {
    let rows_affected = sqlx::query(
        "UPDATE eventos SET titulo = ?, descricao = ?, data = ?, categoria = ?, tipo = ?, \
         turma = ?, cor = ?, materia = ? WHERE id = ?",
    )
    .bind(&dados.titulo)
    .bind(&dados.descricao)
    .bind(&dados.data)
    .bind(&dados.categoria)
    .bind(&dados.tipo)
    .bind(&dados.turma)
    .bind(&dados.cor)
    .bind(&dados.materia)
    .bind(id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: evento {} não encontrado.", id);
        return Err(AppError::NaoEncontrado);
    }
    Ok(rows_affected)
}

pub async fn apagar(db_pool: &SqlitePool, id: i64) -> AppResult<u64> {
    let rows_affected = sqlx::query("DELETE FROM eventos WHERE id = ?")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao apagar: evento {} não encontrado.", id);
        return Err(AppError::NaoEncontrado);
    }
    tracing::info!("Evento {} apagado.", id);
    Ok(rows_affected)
}

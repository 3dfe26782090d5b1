// src/services/frequencia_service.rs
use crate::{
    error::AppResult,
    models::frequencia::{FiltroFrequencia, Frequencia, LancarFrequencia},
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Lança (ou relança) a presença de um aluno. A chave natural é
/// (aluno_id, disciplina, data): em conflito só o status é sobrescrito,
/// a tripla original permanece.
pub async fn lancar(db_pool: &SqlitePool, dados: &LancarFrequencia) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO frequencia (aluno_id, disciplina, data, status, turma) \
         VALUES (?, ?, ?, ?, ?) \
         ON CONFLICT (aluno_id, disciplina, data) DO UPDATE SET status = excluded.status",
    )
    .bind(dados.aluno_id)
    .bind(&dados.disciplina)
    .bind(&dados.data)
    .bind(&dados.status)
    .bind(&dados.turma)
    .execute(db_pool)
    .await?;

    tracing::info!(
        "Frequência lançada: aluno {} em '{}' ({}).",
        dados.aluno_id,
        dados.disciplina,
        dados.data
    );
    Ok(())
}

pub async fn listar(
    db_pool: &SqlitePool,
    filtro: &FiltroFrequencia,
) -> AppResult<Vec<Frequencia>> {
    let mut consulta: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT * FROM frequencia WHERE 1=1");
    if let Some(aluno_id) = filtro.aluno_id {
        consulta.push(" AND aluno_id = ").push_bind(aluno_id);
    }
    if let Some(turma) = &filtro.turma {
        consulta.push(" AND turma = ").push_bind(turma);
    }
    if let Some(disciplina) = &filtro.disciplina {
        consulta.push(" AND disciplina = ").push_bind(disciplina);
    }
    if let Some(data) = &filtro.data {
        consulta.push(" AND data = ").push_bind(data);
    }
    consulta.push(" ORDER BY data DESC");

    let registros = consulta
        .build_query_as::<Frequencia>()
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} registros de frequência.", registros.len());
    Ok(registros)
}

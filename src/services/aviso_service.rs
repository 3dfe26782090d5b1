// src/services/aviso_service.rs
use crate::{
    error::{AppError, AppResult},
    models::aviso::{AtualizarAviso, Aviso, CriarAviso, FiltroAvisos},
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Autor atribuído quando o professor não assina o aviso.
pub const AUTOR_PADRAO: &str = "Prof. Isaack";

/// Lista avisos aplicando a regra de direcionamento: com qualquer filtro
/// presente, entram os avisos do próprio aluno, os da turma e os globais
/// (sem aluno e sem turma). Sem filtros, devolve tudo.
pub async fn listar(db_pool: &SqlitePool, filtro: &FiltroAvisos) -> AppResult<Vec<Aviso>> {
    let mut consulta: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM avisos");
    if filtro.aluno_id.is_some() || filtro.turma.is_some() {
        consulta
            .push(" WHERE (aluno_id = ")
            .push_bind(filtro.aluno_id)
            .push(") OR (turma = ")
            .push_bind(filtro.turma.as_deref())
            .push(") OR (aluno_id IS NULL AND turma IS NULL)");
    }

    let avisos = consulta.build_query_as::<Aviso>().fetch_all(db_pool).await?;
    tracing::debug!("Encontrados {} avisos.", avisos.len());
    Ok(avisos)
}

pub async fn criar(db_pool: &SqlitePool, dados: &CriarAviso) -> AppResult<i64> {
    let autor = match dados.autor.as_deref() {
        Some(autor) if !autor.is_empty() => autor,
        _ => AUTOR_PADRAO,
    };

    let resultado = sqlx::query(
        "INSERT INTO avisos (titulo, mensagem, categoria, data, turma, aluno_id, autor) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&dados.titulo)
    .bind(&dados.mensagem)
    .bind(&dados.categoria)
    .bind(&dados.data)
    .bind(&dados.turma)
    .bind(dados.aluno_id)
    .bind(autor)
    .execute(db_pool)
    .await?;

    let id = resultado.last_insert_rowid();
    tracing::info!("✅ Aviso {} criado por '{}'.", id, autor);
    Ok(id)
}

pub async fn atualizar(db_pool: &SqlitePool, id: i64, dados: &AtualizarAviso) -> AppResult<u64> {
    let rows_affected = sqlx::query(
        "UPDATE avisos SET titulo = ?, mensagem = ?, categoria = ?, data = ?, turma = ? \
         WHERE id = ?",
    )
    .bind(&dados.titulo)
    .bind(&dados.mensagem)
    .bind(&dados.categoria)
    .bind(&dados.data)
    .bind(&dados.turma)
    .bind(id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: aviso {} não encontrado.", id);
        return Err(AppError::NaoEncontrado);
    }
    Ok(rows_affected)
}

pub async fn apagar(db_pool: &SqlitePool, id: i64) -> AppResult<u64> {
    let rows_affected = sqlx::query("DELETE FROM avisos WHERE id = ?")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao apagar: aviso {} não encontrado.", id);
        return Err(AppError::NaoEncontrado);
    }
    tracing::info!("Aviso {} apagado.", id);
    Ok(rows_affected)
}

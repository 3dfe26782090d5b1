// src/services/suporte_service.rs
use crate::{
    error::{AppError, AppResult},
    models::suporte::{CriarMensagemSuporte, FiltroSuporte, MensagemSuporteDetalhada, ResponderSuporte},
};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Abre uma mensagem de suporte. A data é o instante do servidor e o
/// status nasce 'Pendente' (default da tabela).
pub async fn criar(db_pool: &SqlitePool, dados: &CriarMensagemSuporte) -> AppResult<i64> {
    let data = Utc::now().to_rfc3339();
    let resultado = sqlx::query(
        "INSERT INTO mensagens_suporte (aluno_id, assunto, mensagem, data) VALUES (?, ?, ?, ?)",
    )
    .bind(dados.aluno_id)
    .bind(&dados.assunto)
    .bind(&dados.mensagem)
    .bind(&data)
    .execute(db_pool)
    .await?;

    let id = resultado.last_insert_rowid();
    tracing::info!("✅ Mensagem de suporte {} aberta.", id);
    Ok(id)
}

/// Lista as mensagens (mais recentes primeiro) já com os dados do aluno.
pub async fn listar(
    db_pool: &SqlitePool,
    filtro: &FiltroSuporte,
) -> AppResult<Vec<MensagemSuporteDetalhada>> {
    let mut consulta: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT m.id, m.aluno_id, m.assunto, m.mensagem, m.data, m.status, m.resposta, \
         u.nome AS aluno_nome, u.email AS aluno_email, u.turma AS aluno_turma \
         FROM mensagens_suporte m LEFT JOIN usuarios u ON m.aluno_id = u.id",
    );
    if let Some(aluno_id) = filtro.aluno_id {
        consulta.push(" WHERE m.aluno_id = ").push_bind(aluno_id);
    }
    consulta.push(" ORDER BY m.data DESC");

    let mensagens = consulta
        .build_query_as::<MensagemSuporteDetalhada>()
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontradas {} mensagens de suporte.", mensagens.len());
    Ok(mensagens)
}

/// Grava a resposta do professor e promove o status
/// (para 'Respondido', salvo status explícito no corpo).
pub async fn responder(db_pool: &SqlitePool, id: i64, dados: &ResponderSuporte) -> AppResult<u64> {
    let status = match dados.status.as_deref() {
        Some(status) if !status.is_empty() => status,
        _ => "Respondido",
    };

    let rows_affected = sqlx::query(
        "UPDATE mensagens_suporte SET resposta = ?, status = ? WHERE id = ?",
    )
    .bind(&dados.resposta)
    .bind(status)
    .bind(id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao responder: mensagem {} não encontrada.", id);
        return Err(AppError::NaoEncontrado);
    }
    tracing::info!("✅ Mensagem de suporte {} respondida ({}).", id, status);
    Ok(rows_affected)
}

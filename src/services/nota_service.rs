// src/services/nota_service.rs
use crate::{
    error::{AppError, AppResult},
    models::nota::{FiltroNotas, LancarNota, Nota},
};
use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Converte a nota como veio do formulário: nulo ou texto em branco vira
/// NULL (sem nota), número ou texto numérico vira REAL, o resto é recusado.
pub fn normalizar_nota(valor: Option<&Value>) -> AppResult<Option<f64>> {
    match valor {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(texto)) => {
            let texto = texto.trim();
            if texto.is_empty() {
                Ok(None)
            } else {
                texto.parse::<f64>().map(Some).map_err(|_| {
                    AppError::Validacao("Não foi possível salvar a nota.".to_string())
                })
            }
        }
        Some(_) => Err(AppError::Validacao(
            "Não foi possível salvar a nota.".to_string(),
        )),
    }
}

/// Lança o boletim de um aluno numa matéria. A chave natural é
/// (aluno_id, materia): em conflito as DUAS notas são substituídas em
/// bloco, mesmo que só uma tenha vindo no corpo.
pub async fn lancar(db_pool: &SqlitePool, dados: &LancarNota) -> AppResult<()> {
    let nota1 = normalizar_nota(dados.nota1.as_ref())?;
    let nota2 = normalizar_nota(dados.nota2.as_ref())?;

    sqlx::query(
        "INSERT INTO notas (aluno_id, materia, turma, nota1, nota2) VALUES (?, ?, ?, ?, ?) \
         ON CONFLICT (aluno_id, materia) DO UPDATE SET \
         nota1 = excluded.nota1, nota2 = excluded.nota2",
    )
    .bind(dados.aluno_id)
    .bind(&dados.materia)
    .bind(&dados.turma)
    .bind(nota1)
    .bind(nota2)
    .execute(db_pool)
    .await?;

    tracing::info!(
        "Notas lançadas: aluno {} em '{}'.",
        dados.aluno_id,
        dados.materia
    );
    Ok(())
}

pub async fn listar(db_pool: &SqlitePool, filtro: &FiltroNotas) -> AppResult<Vec<Nota>> {
    let mut consulta: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM notas WHERE 1=1");
    if let Some(turma) = &filtro.turma {
        consulta.push(" AND turma = ").push_bind(turma);
    }
    if let Some(materia) = &filtro.materia {
        consulta.push(" AND materia = ").push_bind(materia);
    }
    if let Some(aluno_id) = filtro.aluno_id {
        consulta.push(" AND aluno_id = ").push_bind(aluno_id);
    }

    let notas = consulta.build_query_as::<Nota>().fetch_all(db_pool).await?;
    tracing::debug!("Encontradas {} linhas de notas.", notas.len());
    Ok(notas)
}

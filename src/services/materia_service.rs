// src/services/materia_service.rs
use crate::{
    error::{AppError, AppResult},
    models::materia::{DadosMateria, FiltroMaterias, Materia},
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub const PROFESSOR_PADRAO: &str = "Prof. Isaack";

/// Grade padrão usada pelo seed: (nome, turma, horário).
pub const MATERIAS_PADRAO: &[(&str, &str, &str)] = &[
    ("Teologia Sistemática", "A", "Seg 19:00"),
    ("Hermenêutica", "A", "Ter 19:00"),
    ("Hebraico", "A", "Qua 19:00"),
    ("Teologia Sistemática", "B", "Ter 20:00"),
    ("Grego", "B", "Sex 19:00"),
    ("Homilética", "B", "Qua 20:00"),
];

/// Normaliza o nome do professor: garante o prefixo "Prof." e cai no
/// padrão quando vier vazio.
pub fn nome_professor(professor: Option<&str>) -> String {
    match professor {
        Some(nome) if !nome.trim().is_empty() => {
            let nome = nome.trim();
            if nome.contains("Prof.") {
                nome.to_string()
            } else {
                format!("Prof. {}", nome)
            }
        }
        _ => PROFESSOR_PADRAO.to_string(),
    }
}

pub async fn listar(db_pool: &SqlitePool, filtro: &FiltroMaterias) -> AppResult<Vec<Materia>> {
    let mut consulta: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM materias WHERE 1=1");
    if let Some(turma) = &filtro.turma {
        consulta.push(" AND turma = ").push_bind(turma);
    }
    if let Some(professor) = &filtro.professor {
        consulta
            .push(" AND professor LIKE ")
            .push_bind(format!("%{}%", professor));
    }
    consulta.push(" ORDER BY nome ASC");

    let materias = consulta
        .build_query_as::<Materia>()
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontradas {} matérias.", materias.len());
    Ok(materias)
}

pub async fn criar(db_pool: &SqlitePool, dados: &DadosMateria) -> AppResult<i64> {
    let resultado = sqlx::query(
        "INSERT INTO materias (nome, professor, turma, horario) VALUES (?, ?, ?, ?)",
    )
    .bind(&dados.nome)
    .bind(&dados.professor)
    .bind(&dados.turma)
    .bind(&dados.horario)
    .execute(db_pool)
    .await?;

    let id = resultado.last_insert_rowid();
    tracing::info!("✅ Matéria {} criada.", id);
    Ok(id)
}

pub async fn atualizar(db_pool: &SqlitePool, id: i64, dados: &DadosMateria) -> AppResult<u64> {
    let rows_affected = sqlx::query(
        "UPDATE materias SET nome = ?, professor = ?, turma = ?, horario = ? WHERE id = ?",
    )
    .bind(&dados.nome)
    .bind(&dados.professor)
    .bind(&dados.turma)
    .bind(&dados.horario)
    .bind(id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: matéria {} não encontrada.", id);
        return Err(AppError::NaoEncontrado);
    }
    Ok(rows_affected)
}

pub async fn apagar(db_pool: &SqlitePool, id: i64) -> AppResult<u64> {
    let rows_affected = sqlx::query("DELETE FROM materias WHERE id = ?")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao apagar: matéria {} não encontrada.", id);
        return Err(AppError::NaoEncontrado);
    }
    tracing::info!("Matéria {} apagada.", id);
    Ok(rows_affected)
}

/// Insere a grade padrão por inteiro, atribuída ao professor dado.
pub async fn semear_padrao(db_pool: &SqlitePool, professor: &str) -> AppResult<()> {
    tracing::info!("Semeando a grade padrão para '{}'...", professor);
    for (nome, turma, horario) in MATERIAS_PADRAO {
        sqlx::query("INSERT INTO materias (nome, professor, turma, horario) VALUES (?, ?, ?, ?)")
            .bind(nome)
            .bind(professor)
            .bind(turma)
            .bind(horario)
            .execute(db_pool)
            .await?;
    }
    tracing::info!("✅ {} matérias semeadas.", MATERIAS_PADRAO.len());
    Ok(())
}

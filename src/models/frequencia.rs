// src/models/frequencia.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Frequencia {
    pub id: i64,
    pub aluno_id: i64,
    pub disciplina: String,
    pub data: String,
    pub status: Option<String>,
    pub turma: Option<String>,
}

// Lançamento de presença; (aluno_id, disciplina, data) é a chave natural
#[derive(Debug, Deserialize)]
pub struct LancarFrequencia {
    pub aluno_id: i64,
    pub disciplina: String,
    pub data: String,
    pub status: Option<String>,
    pub turma: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroFrequencia {
    pub aluno_id: Option<i64>,
    pub turma: Option<String>,
    pub disciplina: Option<String>,
    pub data: Option<String>,
}

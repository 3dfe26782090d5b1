// src/models/aviso.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Um aviso pode ser dirigido a um aluno, a uma turma, ou a todos
// (aluno_id e turma ambos NULL).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Aviso {
    pub id: i64,
    pub titulo: Option<String>,
    pub mensagem: Option<String>,
    pub categoria: Option<String>,
    pub data: Option<String>,
    pub turma: Option<String>,
    pub aluno_id: Option<i64>,
    pub autor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CriarAviso {
    pub titulo: Option<String>,
    pub mensagem: Option<String>,
    pub categoria: Option<String>,
    pub data: Option<String>,
    pub turma: Option<String>,
    pub aluno_id: Option<i64>,
    pub autor: Option<String>,
}

// A edição não muda o direcionamento por aluno nem o autor
#[derive(Debug, Deserialize)]
pub struct AtualizarAviso {
    pub titulo: Option<String>,
    pub mensagem: Option<String>,
    pub categoria: Option<String>,
    pub data: Option<String>,
    pub turma: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroAvisos {
    pub aluno_id: Option<i64>,
    pub turma: Option<String>,
}

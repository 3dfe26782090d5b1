// src/models/evento.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Evento {
    pub id: i64,
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub data: Option<String>,
    pub categoria: Option<String>,
    pub tipo: Option<String>,
    pub turma: Option<String>,
    pub cor: Option<String>,
    pub materia: Option<String>,
}

// Corpo de criação e de edição: os oito campos são sempre gravados
// por inteiro, então o mesmo payload serve para os dois
#[derive(Debug, Deserialize)]
pub struct DadosEvento {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub data: Option<String>,
    pub categoria: Option<String>,
    pub tipo: Option<String>,
    pub turma: Option<String>,
    pub cor: Option<String>,
    pub materia: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroEventos {
    pub turma: Option<String>,
}

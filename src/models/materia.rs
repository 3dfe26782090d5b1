// src/models/materia.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Materia {
    pub id: i64,
    pub nome: Option<String>,
    pub professor: Option<String>,
    pub turma: Option<String>,
    pub horario: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DadosMateria {
    pub nome: Option<String>,
    pub professor: Option<String>,
    pub turma: Option<String>,
    pub horario: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroMaterias {
    pub turma: Option<String>,
    pub professor: Option<String>,
}

// Corpo do seed da grade padrão; o nome do professor é opcional
#[derive(Debug, Default, Deserialize)]
pub struct SeedMaterias {
    pub professor: Option<String>,
}

// src/models/nota.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Nota {
    pub id: i64,
    pub aluno_id: i64,
    pub materia: String,
    pub turma: Option<String>,
    pub nota1: Option<f64>,
    pub nota2: Option<f64>,
}

// Lançamento de notas. As notas chegam como vier do formulário (número,
// texto numérico, vazio ou nulo); a normalização acontece no serviço.
#[derive(Debug, Deserialize)]
pub struct LancarNota {
    pub aluno_id: i64,
    pub materia: String,
    pub turma: Option<String>,
    pub nota1: Option<Value>,
    pub nota2: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroNotas {
    pub turma: Option<String>,
    pub materia: Option<String>,
    pub aluno_id: Option<i64>,
}

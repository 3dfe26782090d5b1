// src/models/suporte.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Mensagem de suporte já com os dados do aluno (LEFT JOIN com 'usuarios';
// os campos aluno_* ficam nulos se o aluno tiver sido removido)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MensagemSuporteDetalhada {
    pub id: i64,
    pub aluno_id: Option<i64>,
    pub assunto: Option<String>,
    pub mensagem: Option<String>,
    pub data: Option<String>,
    pub status: Option<String>,
    pub resposta: Option<String>,
    pub aluno_nome: Option<String>,
    pub aluno_email: Option<String>,
    pub aluno_turma: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CriarMensagemSuporte {
    pub aluno_id: Option<i64>,
    pub assunto: Option<String>,
    pub mensagem: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponderSuporte {
    pub resposta: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroSuporte {
    pub aluno_id: Option<i64>,
}

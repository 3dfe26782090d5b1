// src/models/usuario.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Papel do usuário, gravado como TEXT ('aluno' / 'professor') na coluna 'tipo'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Papel {
    Aluno,
    Professor,
}

impl Papel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Papel::Aluno => "aluno",
            Papel::Professor => "professor",
        }
    }
}

// Linha completa da tabela 'usuarios'. Circula apenas dentro do servidor:
// o que sai pela API é sempre UsuarioPublico, sem o hash.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub email: String,
    pub senha: String, // hash bcrypt, nunca a senha em claro
    pub nome: Option<String>,
    pub tipo: Papel,
    pub turma: Option<String>,
    pub foto: Option<String>,
}

// Projeção pública de um usuário (tudo menos a senha)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UsuarioPublico {
    pub id: i64,
    pub email: String,
    pub nome: Option<String>,
    pub tipo: Papel,
    pub turma: Option<String>,
    pub foto: Option<String>,
}

impl From<Usuario> for UsuarioPublico {
    fn from(usuario: Usuario) -> Self {
        UsuarioPublico {
            id: usuario.id,
            email: usuario.email,
            nome: usuario.nome,
            tipo: usuario.tipo,
            turma: usuario.turma,
            foto: usuario.foto,
        }
    }
}

// Aluno como aparece na chamada (GET /alunos)
#[derive(Debug, FromRow, Serialize)]
pub struct AlunoResumo {
    pub id: i64,
    pub nome: Option<String>,
    pub email: String,
    pub turma: Option<String>,
}

// Struct para dados do corpo de login. Clientes antigos mandam "senha",
// os novos mandam "password"; aceitamos os dois.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegistroPayload {
    pub email: String,
    pub senha: String,
    pub nome: Option<String>,
    pub tipo: Option<Papel>,
    pub turma: Option<String>,
}

// Atualização parcial do próprio perfil; campos ausentes ficam como estão
#[derive(Debug, Deserialize)]
pub struct AtualizarPerfil {
    pub nome: Option<String>,
    pub senha: Option<String>,
    pub foto: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltroAlunos {
    pub turma: Option<String>,
}

/// Dados de um usuário criado pelas ferramentas de manutenção (bins).
#[derive(Debug, Clone)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String, // em claro; o serviço gera o hash antes de gravar
    pub tipo: Papel,
    pub turma: String,
}

/// Linha de aluno vinda do arquivo CSV de importação em lote.
#[derive(Debug, Clone, Deserialize)]
pub struct AlunoImportado {
    pub nome: String,
    pub email: String,
    pub turma: String,
}

// src/services/usuario_service.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{AlunoResumo, AtualizarPerfil, FiltroAlunos, Papel, Usuario, UsuarioPublico},
    services::auth_service,
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Domínio anexado a logins e cadastros que chegam sem `@`
/// (ex.: "ana" vira "ana@iva.com").
pub const DOMINIO_PADRAO: &str = "iva.com";

pub fn normalizar_email(email: &str) -> String {
    let email = email.trim();
    if email.contains('@') {
        email.to_string()
    } else {
        format!("{}@{}", email, DOMINIO_PADRAO)
    }
}

/// Busca um usuário pelo seu ID.
pub async fn buscar_por_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Usuario>> {
    tracing::debug!("Buscando usuário por ID: {}", id);
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id, email, senha, nome, tipo, turma, foto FROM usuarios WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;

    if usuario.is_none() {
        tracing::debug!("Usuário {} não encontrado.", id);
    }
    Ok(usuario)
}

/// Busca um usuário pelo e-mail (já normalizado pelo chamador).
pub async fn buscar_por_email(db_pool: &SqlitePool, email: &str) -> AppResult<Option<Usuario>> {
    tracing::debug!("Buscando usuário por e-mail: {}", email);
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id, email, senha, nome, tipo, turma, foto FROM usuarios WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(db_pool)
    .await?;
    Ok(usuario)
}

/// Cadastro público. Duplicidade de e-mail vira a mensagem genérica de
/// validação, sem confirmar ao chamador que o e-mail já existe.
pub async fn registrar(
    db_pool: &SqlitePool,
    email: &str,
    senha: &str,
    nome: Option<&str>,
    tipo: Papel,
    turma: &str,
) -> AppResult<i64> {
    let email = normalizar_email(email);
    tracing::info!("Tentando cadastrar usuário: {}", email);
    let senha_hash = auth_service::hash_password(senha).await?;

    let resultado = sqlx::query(
        "INSERT INTO usuarios (email, senha, nome, tipo, turma) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&email)
    .bind(&senha_hash)
    .bind(nome)
    .bind(tipo)
    .bind(turma)
    .execute(db_pool)
    .await;

    match resultado {
        Ok(r) => {
            let id = r.last_insert_rowid();
            tracing::info!("✅ Usuário '{}' cadastrado com ID {}.", email, id);
            Ok(id)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Falha ao cadastrar: e-mail '{}' já existe.", email);
            Err(AppError::Validacao(
                "Não foi possível criar o usuário. O e-mail pode já estar em uso.".to_string(),
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// Perfil público de um usuário (sem o hash da senha).
pub async fn perfil_publico(db_pool: &SqlitePool, id: i64) -> AppResult<UsuarioPublico> {
    tracing::debug!("Buscando perfil público do usuário {}", id);
    sqlx::query_as::<_, UsuarioPublico>(
        "SELECT id, email, nome, tipo, turma, foto FROM usuarios WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?
    .ok_or(AppError::NaoEncontrado)
}

/// Lista os alunos da chamada, opcionalmente restrita a uma turma.
pub async fn listar_alunos(
    db_pool: &SqlitePool,
    filtro: &FiltroAlunos,
) -> AppResult<Vec<AlunoResumo>> {
    let mut consulta: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT id, nome, email, turma FROM usuarios WHERE tipo = 'aluno'");
    if let Some(turma) = &filtro.turma {
        consulta.push(" AND turma = ").push_bind(turma);
    }
    consulta.push(" ORDER BY nome ASC");

    let alunos = consulta
        .build_query_as::<AlunoResumo>()
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} alunos.", alunos.len());
    Ok(alunos)
}

/// Atualização parcial do próprio perfil (nome, senha e/ou foto).
/// Sem nenhum campo no corpo devolve 0 sem tocar no banco.
pub async fn atualizar_perfil(
    db_pool: &SqlitePool,
    id: i64,
    dados: &AtualizarPerfil,
) -> AppResult<u64> {
    // O hash é gerado antes de montar a query, fora de qualquer transação
    let senha_hash = match &dados.senha {
        Some(senha) => Some(auth_service::hash_password(senha).await?),
        None => None,
    };

    let mut consulta: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE usuarios SET ");
    let mut tem_campo = false;
    {
        let mut campos = consulta.separated(", ");
        if let Some(nome) = &dados.nome {
            campos.push("nome = ").push_bind_unseparated(nome);
            tem_campo = true;
        }
        if let Some(hash) = &senha_hash {
            campos.push("senha = ").push_bind_unseparated(hash);
            tem_campo = true;
        }
        if let Some(foto) = &dados.foto {
            campos.push("foto = ").push_bind_unseparated(foto);
            tem_campo = true;
        }
    }

    if !tem_campo {
        tracing::debug!("Atualização do perfil {} sem campos, nada a fazer.", id);
        return Ok(0);
    }

    consulta.push(" WHERE id = ").push_bind(id);
    let rows_affected = consulta.build().execute(db_pool).await?.rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar perfil: usuário '{}' não encontrado.", id);
        return Err(AppError::NaoEncontrado);
    }
    tracing::info!("✅ Perfil atualizado com sucesso para o usuário {}.", id);
    Ok(rows_affected)
}

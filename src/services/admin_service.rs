// src/services/admin_service.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{AlunoImportado, NovoUsuario, Papel},
    services::{auth_service, usuario_service},
};
use sqlx::SqlitePool;

/// Cria o administrador principal, ou atualiza o existente com o mesmo
/// e-mail. O conflito sobrescreve nome, senha e tipo; a turma gravada
/// na primeira criação é preservada.
pub async fn criar_ou_atualizar_admin(db_pool: &SqlitePool, admin: &NovoUsuario) -> AppResult<i64> {
    tracing::info!("Criando/atualizando usuário admin: {}", admin.email);
    let senha_hash = auth_service::hash_password(&admin.senha).await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO usuarios (nome, email, senha, tipo, turma) VALUES (?, ?, ?, ?, ?) \
         ON CONFLICT (email) DO UPDATE SET \
         nome = excluded.nome, senha = excluded.senha, tipo = excluded.tipo \
         RETURNING id",
    )
    .bind(&admin.nome)
    .bind(&admin.email)
    .bind(&senha_hash)
    .bind(admin.tipo)
    .bind(&admin.turma)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Admin '{}' garantido com ID {}.", admin.email, id);
    Ok(id)
}

/// Operação destrutiva de manutenção: remove TODOS os usuários (e os dados
/// que os referenciam), zera a numeração e recria só o admin. Tudo numa
/// única transação: ou o wipe e o reseed entram juntos, ou nada entra.
pub async fn limpar_e_recriar_admin(db_pool: &SqlitePool, admin: &NovoUsuario) -> AppResult<i64> {
    let senha_hash = auth_service::hash_password(&admin.senha).await?;

    let mut tx = db_pool.begin().await?;
    tracing::info!("🧹 Limpando a tabela 'usuarios' e os dados dependentes...");

    let resultado = async {
        sqlx::query("DELETE FROM frequencia").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM notas").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM mensagens_suporte").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM usuarios").execute(&mut *tx).await?;
        // Zera o AUTOINCREMENT para o admin renascer com ID 1
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'usuarios'")
            .execute(&mut *tx)
            .await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO usuarios (nome, email, senha, tipo, turma) VALUES (?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(&admin.nome)
        .bind(&admin.email)
        .bind(&senha_hash)
        .bind(admin.tipo)
        .bind(&admin.turma)
        .fetch_one(&mut *tx)
        .await?;

        Ok::<i64, AppError>(id)
    }
    .await;

    match resultado {
        Ok(id) => {
            tx.commit().await?;
            tracing::info!("✅ Base limpa; admin '{}' recriado com ID {}.", admin.email, id);
            Ok(id)
        }
        Err(e) => {
            tx.rollback().await?;
            tracing::error!("❌ Erro durante a limpeza; nenhuma alteração foi salva.");
            Err(e)
        }
    }
}

/// Cria um usuário avulso (ferramenta de manutenção). Diferente do
/// cadastro público, aceita qualquer papel e turma vindos do operador.
pub async fn criar_usuario_manual(db_pool: &SqlitePool, usuario: &NovoUsuario) -> AppResult<i64> {
    tracing::info!("Criando usuário manual: {}", usuario.email);
    let senha_hash = auth_service::hash_password(&usuario.senha).await?;

    let resultado = sqlx::query(
        "INSERT INTO usuarios (nome, email, senha, tipo, turma) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&usuario.nome)
    .bind(&usuario.email)
    .bind(&senha_hash)
    .bind(usuario.tipo)
    .bind(&usuario.turma)
    .execute(db_pool)
    .await;

    match resultado {
        Ok(r) => {
            let id = r.last_insert_rowid();
            tracing::info!("✅ Usuário '{}' criado com ID {}.", usuario.email, id);
            Ok(id)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Falha ao criar: e-mail '{}' já existe.", usuario.email);
            Err(AppError::Validacao(
                "Não foi possível criar o usuário. O e-mail pode já estar em uso.".to_string(),
            ))
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Default)]
pub struct ResumoImportacao {
    pub importados: u32,
    pub falhas: u32,
}

/// Importa alunos em lote, todos com a mesma senha inicial. Upsert por
/// e-mail: quem já existe tem nome, turma e senha atualizados. Erro numa
/// linha não interrompe as demais; o resumo contabiliza os dois lados.
pub async fn importar_alunos(
    db_pool: &SqlitePool,
    alunos: &[AlunoImportado],
    senha_inicial: &str,
) -> AppResult<ResumoImportacao> {
    let senha_hash = auth_service::hash_password(senha_inicial).await?;
    let mut resumo = ResumoImportacao::default();

    for aluno in alunos {
        let email = usuario_service::normalizar_email(&aluno.email);
        let resultado = sqlx::query(
            "INSERT INTO usuarios (nome, email, senha, tipo, turma) VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (email) DO UPDATE SET \
             nome = excluded.nome, turma = excluded.turma, senha = excluded.senha",
        )
        .bind(&aluno.nome)
        .bind(&email)
        .bind(&senha_hash)
        .bind(Papel::Aluno)
        .bind(&aluno.turma)
        .execute(db_pool)
        .await;

        match resultado {
            Ok(_) => {
                tracing::info!("✅ Aluno '{}' ({}) importado/atualizado.", aluno.nome, email);
                resumo.importados += 1;
            }
            Err(e) => {
                tracing::error!("❌ Erro ao importar aluno '{}' ({}): {}", aluno.nome, email, e);
                resumo.falhas += 1;
            }
        }
    }

    Ok(resumo)
}

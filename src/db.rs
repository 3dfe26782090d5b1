// src/db.rs
use crate::error::AppResult;
use crate::services::{auth_service, materia_service};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration; // Usar std::time::Duration aqui

pub async fn create_db_pool() -> AppResult<SqlitePool> {
    dotenvy::dotenv().ok(); // Carrega .env
    let database_url = std::env::var("DATABASE_URL")?; // Lê URL da DB

    tracing::info!("Ligando à base de dados: {}", database_url);

    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    // Cria o pool (conjunto de conexões reutilizáveis)
    let pool = SqlitePoolOptions::new()
        .max_connections(20) // Número máximo de conexões simultâneas
        .idle_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(2)) // Estourou? O erro vira 503 na borda HTTP
        .connect_with(options)
        .await?; // Conecta e retorna erro se falhar

    tracing::info!("Executando migrações da base de dados...");
    // Executa automaticamente os ficheiros SQL em ./migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}

/// Usuários de demonstração garantidos em toda inicialização (senha padrão
/// "senha123"). O `ON CONFLICT DO NOTHING` preserva quem já existe.
const USUARIOS_DEMO: &[(&str, &str, &str, &str)] = &[
    ("aluno@iva.com", "Gabriel (Novo)", "aluno", "A"),
    ("veterano@iva.com", "Veterano", "aluno", "B"),
    ("isaack@iva.com", "Prof. Isaack", "professor", ""),
    ("maria@iva.com", "Maria Silva", "aluno", "A"),
    ("joao@vale.com", "João Santos", "aluno", "B"),
    ("amorosomhott@iva.com", "Amoroso Mhota", "aluno", "B"),
];

// Presenças de exemplo do primeiro aluno, para a tela de frequência não
// nascer vazia num banco novo.
const FREQUENCIA_DEMO: &[(i64, &str, &str, &str, &str)] = &[
    (1, "Teologia Sistemática", "2023-11-01", "Presente", "A"),
    (1, "Teologia Sistemática", "2023-11-08", "Presente", "A"),
    (1, "Hermenêutica", "2023-11-02", "Falta", "A"),
    (1, "Hebraico", "2023-11-03", "Presente", "A"),
];

pub async fn semear_dados_iniciais(pool: &SqlitePool) -> AppResult<()> {
    tracing::info!("Garantindo dados iniciais da base de dados...");

    let hash_padrao = auth_service::hash_password("senha123").await?;

    for (email, nome, tipo, turma) in USUARIOS_DEMO {
        sqlx::query(
            "INSERT INTO usuarios (email, senha, nome, tipo, turma) VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(email)
        .bind(&hash_padrao)
        .bind(nome)
        .bind(tipo)
        .bind(turma)
        .execute(pool)
        .await?;
    }

    let total_materias: i64 = sqlx::query_scalar("SELECT count(*) FROM materias")
        .fetch_one(pool)
        .await?;
    if total_materias == 0 {
        tracing::info!("Tabela 'materias' vazia, populando a grade padrão...");
        materia_service::semear_padrao(pool, materia_service::PROFESSOR_PADRAO).await?;
    }

    for (aluno_id, disciplina, data, status, turma) in FREQUENCIA_DEMO {
        sqlx::query(
            "INSERT INTO frequencia (aluno_id, disciplina, data, status, turma) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (aluno_id, disciplina, data) DO NOTHING",
        )
        .bind(aluno_id)
        .bind(disciplina)
        .bind(data)
        .bind(status)
        .bind(turma)
        .execute(pool)
        .await?;
    }

    tracing::info!("Dados iniciais garantidos.");
    Ok(())
}

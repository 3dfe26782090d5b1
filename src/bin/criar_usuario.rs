// src/bin/criar_usuario.rs
//
// Cria um usuário avulso (aluno ou professor) direto no banco.
// Uso: USUARIO_EMAIL=... USUARIO_SENHA=... [USUARIO_NOME=...]
//      [USUARIO_TIPO=aluno|professor] [USUARIO_TURMA=A] cargo run --bin criar_usuario
use portal_iva::{
    db,
    models::usuario::{NovoUsuario, Papel},
    services::{admin_service, usuario_service},
};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let email = env::var("USUARIO_EMAIL")
        .map_err(|_| anyhow::anyhow!("Defina USUARIO_EMAIL no ambiente ou no .env"))?;
    let tipo = match env::var("USUARIO_TIPO").as_deref() {
        Ok("professor") => Papel::Professor,
        _ => Papel::Aluno,
    };

    let usuario = NovoUsuario {
        nome: env::var("USUARIO_NOME").unwrap_or_default(),
        email: usuario_service::normalizar_email(&email),
        senha: env::var("USUARIO_SENHA")
            .map_err(|_| anyhow::anyhow!("Defina USUARIO_SENHA no ambiente ou no .env"))?,
        tipo,
        turma: env::var("USUARIO_TURMA").unwrap_or_else(|_| "A".to_string()),
    };

    let pool = db::create_db_pool().await?;
    let id = admin_service::criar_usuario_manual(&pool, &usuario).await?;

    println!("--------------------------------------------------");
    println!("✅ Usuário criado com ID: {}", id);
    println!("   > Login: {}", usuario.email);
    println!("   > Tipo:  {} / Turma: {}", usuario.tipo.as_str(), usuario.turma);
    println!("--------------------------------------------------");
    Ok(())
}

// src/bin/criar_admin.rs
//
// Cria (ou atualiza) o administrador principal do portal.
// Uso: ADMIN_EMAIL=... ADMIN_SENHA=... cargo run --bin criar_admin
use portal_iva::{
    db,
    models::usuario::{NovoUsuario, Papel},
    services::admin_service,
};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let admin = NovoUsuario {
        nome: env::var("ADMIN_NOME").unwrap_or_else(|_| "Administrador".to_string()),
        email: env::var("ADMIN_EMAIL")
            .map_err(|_| anyhow::anyhow!("Defina ADMIN_EMAIL no ambiente ou no .env"))?,
        senha: env::var("ADMIN_SENHA")
            .map_err(|_| anyhow::anyhow!("Defina ADMIN_SENHA no ambiente ou no .env"))?,
        tipo: Papel::Professor, // admin entra como professor para ter acesso total
        turma: String::new(),   // admin não pertence a nenhuma turma
    };

    let pool = db::create_db_pool().await?;
    let id = admin_service::criar_ou_atualizar_admin(&pool, &admin).await?;

    println!("--------------------------------------------------");
    println!("✅ Sucesso! Usuário Admin criado/atualizado com ID: {}", id);
    println!("   > Nome:  {}", admin.nome);
    println!("   > Login: {}", admin.email);
    println!("--------------------------------------------------");
    Ok(())
}

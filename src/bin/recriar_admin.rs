// src/bin/recriar_admin.rs
//
// ATENÇÃO: operação destrutiva. Remove TODOS os usuários (e frequência,
// notas e mensagens de suporte junto) e recria apenas o administrador.
// Uso: ADMIN_EMAIL=... ADMIN_SENHA=... cargo run --bin recriar_admin
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
        tipo: Papel::Professor,
        turma: String::new(),
    };

    println!("⚠️  Limpando TODOS os usuários e recriando apenas o admin...");

    let pool = db::create_db_pool().await?;
    match admin_service::limpar_e_recriar_admin(&pool, &admin).await {
        Ok(id) => {
            println!("--------------------------------------------------");
            println!("🎉 OPERAÇÃO CONCLUÍDA!");
            println!("✅ Admin recriado com ID: {}", id);
            println!("   > Login: {}", admin.email);
            println!("⚠️  Todos os outros usuários foram removidos.");
            println!("--------------------------------------------------");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Erro durante a operação: {}", e);
            eprintln!("   Nenhuma alteração foi salva.");
            std::process::exit(1);
        }
    }
}

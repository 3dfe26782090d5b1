// src/bin/importar_alunos.rs
use clap::Parser;
use portal_iva::{db, models::usuario::AlunoImportado, services::admin_service};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Importa alunos em lote a partir de um arquivo CSV (colunas: nome,email,turma).
/// Quem já existe tem nome, turma e senha atualizados para os valores do arquivo.
#[derive(Parser, Debug)]
#[command(name = "importar_alunos", about, long_about = None)]
struct Args {
    /// Arquivo CSV com os alunos
    arquivo: PathBuf,

    /// Turma a importar; linhas de outras turmas são ignoradas
    #[arg(short, long)]
    turma: String,

    /// Senha inicial dos alunos importados
    #[arg(short, long, default_value = "senha123")]
    senha: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut leitor = csv::Reader::from_path(&args.arquivo)?;
    let mut alunos: Vec<AlunoImportado> = Vec::new();
    for registro in leitor.deserialize::<AlunoImportado>() {
        let aluno = registro?;
        if aluno.turma == args.turma {
            alunos.push(aluno);
        }
    }

    if alunos.is_empty() {
        println!(
            "🟡 Nenhum aluno da turma '{}' encontrado em {}.",
            args.turma,
            args.arquivo.display()
        );
        return Ok(());
    }

    println!(
        "Iniciando a importação de {} alunos para a turma {}...",
        alunos.len(),
        args.turma
    );

    let pool = db::create_db_pool().await?;
    let resumo = admin_service::importar_alunos(&pool, &alunos, &args.senha).await?;

    println!("--- Resumo da Importação ---");
    println!("Alunos processados para a turma {}: {}", args.turma, alunos.len());
    println!("Importados/atualizados: {}", resumo.importados);
    println!("Com erro: {}", resumo.falhas);
    Ok(())
}

// tests/admin_scripts.rs
//
// Os fluxos dos binários de manutenção, exercitados na camada de serviço.
mod common;

use common::pool_de_teste;
use portal_iva::{
    db,
    error::AppError,
    models::usuario::{AlunoImportado, NovoUsuario, Papel},
    services::{admin_service, auth_service, usuario_service},
};

fn novo_usuario(nome: &str, email: &str, senha: &str, tipo: Papel, turma: &str) -> NovoUsuario {
    NovoUsuario {
        nome: nome.to_string(),
        email: email.to_string(),
        senha: senha.to_string(),
        tipo,
        turma: turma.to_string(),
    }
}

/// Rodar o criar-admin duas vezes não duplica a conta: a segunda execução
/// sobrescreve nome e senha, mas preserva a turma original.
#[tokio::test]
async fn admin_upsert_sobrescreve_credenciais() {
    let pool = pool_de_teste().await;

    let primeira = novo_usuario("Administrador", "admin@iva.com", "primeira1", Papel::Professor, "A");
    let id_original = admin_service::criar_ou_atualizar_admin(&pool, &primeira)
        .await
        .unwrap();

    let segunda = NovoUsuario {
        nome: "Admin Renomeado".to_string(),
        senha: "segunda22".to_string(),
        turma: "B".to_string(),
        ..primeira.clone()
    };
    let id_repetido = admin_service::criar_ou_atualizar_admin(&pool, &segunda)
        .await
        .unwrap();
    assert_eq!(id_original, id_repetido);

    let total: i64 = sqlx::query_scalar("SELECT count(*) FROM usuarios")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 1);

    let admin = usuario_service::buscar_por_email(&pool, "admin@iva.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(admin.nome.as_deref(), Some("Admin Renomeado"));
    assert_eq!(admin.tipo, Papel::Professor);
    // A senha nova vale, a antiga morreu
    assert!(auth_service::verify_password("segunda22", &admin.senha).await.unwrap());
    assert!(!auth_service::verify_password("primeira1", &admin.senha).await.unwrap());
    // A turma gravada na primeira criação não é sobrescrita
    assert_eq!(admin.turma.as_deref(), Some("A"));
}

/// Importação em lote: e-mail sem arroba ganha o domínio padrão, todos
/// entram como alunos com a senha inicial, e reimportar atualiza em vez
/// de duplicar.
#[tokio::test]
async fn importacao_atualiza_e_normaliza() {
    let pool = pool_de_teste().await;

    let lote = [
        AlunoImportado {
            nome: "Ana".to_string(),
            email: "ana".to_string(), // sem arroba
            turma: "A".to_string(),
        },
        AlunoImportado {
            nome: "Bia".to_string(),
            email: "bia@vale.com".to_string(),
            turma: "A".to_string(),
        },
    ];
    let resumo = admin_service::importar_alunos(&pool, &lote, "senha123")
        .await
        .unwrap();
    assert_eq!(resumo.importados, 2);
    assert_eq!(resumo.falhas, 0);

    let ana = usuario_service::buscar_por_email(&pool, "ana@iva.com")
        .await
        .unwrap()
        .expect("e-mail sem arroba ganha o domínio padrão");
    assert_eq!(ana.tipo, Papel::Aluno);
    assert!(auth_service::verify_password("senha123", &ana.senha).await.unwrap());

    // Mesma Ana de novo, com nome, turma e senha inicial diferentes
    let relote = [AlunoImportado {
        nome: "Ana Clara".to_string(),
        email: "ana@iva.com".to_string(),
        turma: "B".to_string(),
    }];
    let resumo = admin_service::importar_alunos(&pool, &relote, "outraSenha")
        .await
        .unwrap();
    assert_eq!(resumo.importados, 1);

    let total: i64 = sqlx::query_scalar("SELECT count(*) FROM usuarios")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 2);

    let ana = usuario_service::buscar_por_email(&pool, "ana@iva.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ana.nome.as_deref(), Some("Ana Clara"));
    assert_eq!(ana.turma.as_deref(), Some("B"));
    assert!(auth_service::verify_password("outraSenha", &ana.senha).await.unwrap());
}

/// O reset completo: apaga usuários e dados dependentes, zera a numeração
/// e recria o admin com ID 1.
#[tokio::test]
async fn recriar_admin_zera_a_base() {
    let pool = pool_de_teste().await;

    for i in 1..=3 {
        let aluno = novo_usuario(
            "Aluno",
            &format!("aluno{}@iva.com", i),
            "senha123",
            Papel::Aluno,
            "A",
        );
        admin_service::criar_usuario_manual(&pool, &aluno).await.unwrap();
    }
    sqlx::query(
        "INSERT INTO frequencia (aluno_id, disciplina, data, status, turma) \
         VALUES (1, 'Grego', '2024-05-01', 'Presente', 'A')",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO notas (aluno_id, materia, turma, nota1) VALUES (1, 'Grego', 'A', 8.0)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO mensagens_suporte (aluno_id, assunto, mensagem, data) \
         VALUES (1, 'Boleto', 'Não abre.', '2024-05-01')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let admin = novo_usuario("Administrador", "admin@iva.com", "admin123", Papel::Professor, "");
    let id = admin_service::limpar_e_recriar_admin(&pool, &admin).await.unwrap();
    assert_eq!(id, 1, "a numeração deve recomeçar do 1");

    for tabela in ["frequencia", "notas", "mensagens_suporte"] {
        let total: i64 = sqlx::query_scalar(&format!("SELECT count(*) FROM {}", tabela))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 0, "a tabela '{}' deveria estar vazia", tabela);
    }
    let total: i64 = sqlx::query_scalar("SELECT count(*) FROM usuarios")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 1);

    let renascido = usuario_service::buscar_por_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(renascido.email, "admin@iva.com");
    assert_eq!(renascido.tipo, Papel::Professor);
}

/// Se o reset falha no meio, nada muda: até os DELETEs que já tinham
/// rodado dentro da transação são desfeitos.
#[tokio::test]
async fn recriar_admin_interrompido_preserva_estado() {
    let pool = pool_de_teste().await;

    let aluno = novo_usuario("Aluno", "aluno@iva.com", "senha123", Papel::Aluno, "A");
    admin_service::criar_usuario_manual(&pool, &aluno).await.unwrap();
    sqlx::query(
        "INSERT INTO frequencia (aluno_id, disciplina, data, status, turma) \
         VALUES (1, 'Grego', '2024-05-01', 'Presente', 'A')",
    )
    .execute(&pool)
    .await
    .unwrap();

    // Sabota a tabela 'notas' para o wipe quebrar depois de já ter
    // apagado a frequência
    sqlx::query("ALTER TABLE notas RENAME TO notas_quebrada")
        .execute(&pool)
        .await
        .unwrap();

    let admin = novo_usuario("Administrador", "admin@iva.com", "admin123", Papel::Professor, "");
    let resultado = admin_service::limpar_e_recriar_admin(&pool, &admin).await;
    assert!(resultado.is_err());

    let usuarios: i64 = sqlx::query_scalar("SELECT count(*) FROM usuarios")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(usuarios, 1, "o aluno original deve continuar lá");
    let frequencia: i64 = sqlx::query_scalar("SELECT count(*) FROM frequencia")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(frequencia, 1, "o DELETE parcial deve ter sido desfeito");
}

/// O seed de arranque pode rodar quantas vezes for: usuários e presenças
/// de demonstração não duplicam, e a grade só entra com a tabela vazia.
#[tokio::test]
async fn seeds_iniciais_sao_idempotentes() {
    let pool = pool_de_teste().await;

    db::semear_dados_iniciais(&pool).await.unwrap();
    db::semear_dados_iniciais(&pool).await.unwrap();

    let usuarios: i64 = sqlx::query_scalar("SELECT count(*) FROM usuarios")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(usuarios, 6);
    let materias: i64 = sqlx::query_scalar("SELECT count(*) FROM materias")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(materias, 6);
    let frequencia: i64 = sqlx::query_scalar("SELECT count(*) FROM frequencia")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(frequencia, 4);
}

/// O usuário avulso nunca guarda a senha em claro, e e-mail repetido é
/// recusado como validação.
#[tokio::test]
async fn criar_usuario_manual_gera_hash() {
    let pool = pool_de_teste().await;

    let usuario = novo_usuario("João", "joao@iva.com", "minhaSenha1", Papel::Aluno, "A");
    let id = admin_service::criar_usuario_manual(&pool, &usuario).await.unwrap();

    let salvo = usuario_service::buscar_por_id(&pool, id).await.unwrap().unwrap();
    assert_ne!(salvo.senha, "minhaSenha1");
    assert!(salvo.senha.starts_with("$2"));
    assert!(auth_service::verify_password("minhaSenha1", &salvo.senha).await.unwrap());

    let repetido = admin_service::criar_usuario_manual(&pool, &usuario).await;
    assert!(matches!(repetido, Err(AppError::Validacao(_))));
}

// tests/auth_rotas.rs
mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

/// Cadastro sem '@' ganha o domínio institucional, sem tipo vira aluno,
/// e o login devolve o mesmo usuário sem expor o hash da senha.
#[tokio::test]
async fn cadastro_normaliza_email_e_aplica_padroes() {
    let pool = pool_de_teste().await;
    let app = app_de_teste(pool.clone());

    let resposta = enviar(
        &app,
        requisicao(
            "POST",
            "/register",
            None,
            Some(json!({ "email": "ana", "senha": "segredo1", "turma": "A" })),
        ),
    )
    .await;
    assert_eq!(resposta.status(), StatusCode::OK);
    let corpo = corpo_json(resposta).await;
    assert_eq!(corpo["message"], "success");
    let id = corpo["id"].as_i64().unwrap();

    let (email, tipo, turma) = sqlx::query_as::<_, (String, String, Option<String>)>(
        "SELECT email, tipo, turma FROM usuarios WHERE id = ?",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(email, "ana@iva.com");
    assert_eq!(tipo, "aluno");
    assert_eq!(turma.as_deref(), Some("A"));

    let resposta = enviar(
        &app,
        requisicao(
            "POST",
            "/login",
            None,
            Some(json!({ "email": "ana", "password": "segredo1" })),
        ),
    )
    .await;
    assert_eq!(resposta.status(), StatusCode::OK);
    let corpo = corpo_json(resposta).await;
    assert_eq!(corpo["user"]["id"].as_i64(), Some(id));
    assert_eq!(corpo["user"]["tipo"], "aluno");
    assert!(
        corpo["user"].get("senha").is_none(),
        "o hash da senha não pode sair pela API"
    );
}

/// Clientes antigos mandam a senha no campo 'senha' em vez de 'password'.
#[tokio::test]
async fn login_aceita_campo_senha_legado() {
    let pool = pool_de_teste().await;
    let app = app_de_teste(pool);

    registrar_e_logar(&app, "joao@vale.com", "segredo1", "aluno", "B").await;

    let resposta = enviar(
        &app,
        requisicao(
            "POST",
            "/login",
            None,
            Some(json!({ "email": "joao@vale.com", "senha": "segredo1" })),
        ),
    )
    .await;
    assert_eq!(resposta.status(), StatusCode::OK);
}

/// E-mail inexistente e senha errada têm de produzir exatamente a mesma
/// resposta, senão dá para sondar quais e-mails estão cadastrados.
#[tokio::test]
async fn falhas_de_login_sao_indistinguiveis() {
    let pool = pool_de_teste().await;
    let app = app_de_teste(pool);

    registrar_e_logar(&app, "maria@iva.com", "segredo1", "aluno", "A").await;

    let senha_errada = enviar(
        &app,
        requisicao(
            "POST",
            "/login",
            None,
            Some(json!({ "email": "maria@iva.com", "password": "outra" })),
        ),
    )
    .await;
    let email_inexistente = enviar(
        &app,
        requisicao(
            "POST",
            "/login",
            None,
            Some(json!({ "email": "fantasma@iva.com", "password": "outra" })),
        ),
    )
    .await;

    assert_eq!(senha_errada.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(email_inexistente.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        corpo_json(senha_errada).await,
        corpo_json(email_inexistente).await
    );
}

/// Cadastro repetido responde com a mensagem genérica, sem confirmar que
/// o e-mail já existe.
#[tokio::test]
async fn cadastro_com_email_repetido_e_recusado() {
    let pool = pool_de_teste().await;
    let app = app_de_teste(pool);

    registrar_e_logar(&app, "ana@iva.com", "segredo1", "aluno", "A").await;

    let resposta = enviar(
        &app,
        requisicao(
            "POST",
            "/register",
            None,
            Some(json!({ "email": "ana@iva.com", "senha": "outra" })),
        ),
    )
    .await;
    assert_eq!(resposta.status(), StatusCode::BAD_REQUEST);
    let corpo = corpo_json(resposta).await;
    assert_eq!(
        corpo["error"],
        "Não foi possível criar o usuário. O e-mail pode já estar em uso."
    );
}

/// Sem cookie de sessão, leitura e escrita protegidas respondem 401.
#[tokio::test]
async fn rotas_protegidas_exigem_sessao() {
    let pool = pool_de_teste().await;
    let app = app_de_teste(pool);

    let leitura = enviar(&app, requisicao("GET", "/avisos", None, None)).await;
    assert_eq!(leitura.status(), StatusCode::UNAUTHORIZED);
    let corpo = corpo_json(leitura).await;
    assert_eq!(corpo["error"], "Acesso negado: Usuário não identificado.");

    let escrita = enviar(
        &app,
        requisicao(
            "POST",
            "/frequencia",
            None,
            Some(json!({
                "aluno_id": 1, "disciplina": "Grego", "data": "2024-03-01", "status": "Presente"
            })),
        ),
    )
    .await;
    assert_eq!(escrita.status(), StatusCode::UNAUTHORIZED);
}

/// Logout apaga a sessão no servidor: o mesmo cookie deixa de valer.
#[tokio::test]
async fn logout_invalida_a_sessao() {
    let pool = pool_de_teste().await;
    let app = app_de_teste(pool);

    let (_, cookie) = registrar_e_logar(&app, "ana@iva.com", "segredo1", "aluno", "A").await;

    let antes = enviar(&app, requisicao("GET", "/avisos", Some(&cookie), None)).await;
    assert_eq!(antes.status(), StatusCode::OK);

    let logout = enviar(&app, requisicao("GET", "/logout", Some(&cookie), None)).await;
    assert_eq!(logout.status(), StatusCode::OK);

    let depois = enviar(&app, requisicao("GET", "/avisos", Some(&cookie), None)).await;
    assert_eq!(depois.status(), StatusCode::UNAUTHORIZED);
}

// tests/common/mod.rs
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use portal_iva::{state::AppState, web};
use serde_json::{json, Value};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;
use tower_sessions::{cookie::Key, MemoryStore, SessionManagerLayer};

/// Banco SQLite em memória já migrado. Uma conexão só: cada conexão
/// ':memory:' nova abriria um banco vazio próprio.
pub async fn pool_de_teste() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("pool SQLite em memória");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrações de teste");
    pool
}

/// Router completo, com sessões em memória e cookie assinado como em produção.
pub fn app_de_teste(pool: SqlitePool) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_signed(Key::generate());
    web::routes::create_router(AppState { db_pool: pool }).layer(session_layer)
}

pub fn requisicao(
    metodo: &str,
    caminho: &str,
    cookie: Option<&str>,
    corpo: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(metodo).uri(caminho);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match corpo {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("montar requisição com corpo"),
        None => builder.body(Body::empty()).expect("montar requisição"),
    }
}

pub async fn enviar(app: &Router, requisicao: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(requisicao)
        .await
        .expect("resposta do router")
}

pub async fn corpo_json(resposta: Response<Body>) -> Value {
    let bytes = resposta
        .into_body()
        .collect()
        .await
        .expect("ler corpo da resposta")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("corpo JSON válido")
}

/// Extrai o par nome=valor do cookie de sessão devolvido no login.
pub fn cookie_de(resposta: &Response<Body>) -> String {
    resposta
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie presente")
        .to_str()
        .expect("cookie em UTF-8")
        .split(';')
        .next()
        .expect("par nome=valor do cookie")
        .to_string()
}

/// Cadastra um usuário e faz login, devolvendo (id, cookie de sessão).
pub async fn registrar_e_logar(
    app: &Router,
    email: &str,
    senha: &str,
    tipo: &str,
    turma: &str,
) -> (i64, String) {
    let resposta = enviar(
        app,
        requisicao(
            "POST",
            "/register",
            None,
            Some(json!({ "email": email, "senha": senha, "tipo": tipo, "turma": turma })),
        ),
    )
    .await;
    assert_eq!(resposta.status(), StatusCode::OK, "cadastro de {}", email);
    let corpo = corpo_json(resposta).await;
    let id = corpo["id"].as_i64().expect("id do cadastro");

    let cookie = logar(app, email, senha).await;
    (id, cookie)
}

/// Faz login e devolve o cookie de sessão.
pub async fn logar(app: &Router, email: &str, senha: &str) -> String {
    let resposta = enviar(
        app,
        requisicao(
            "POST",
            "/login",
            None,
            Some(json!({ "email": email, "password": senha })),
        ),
    )
    .await;
    assert_eq!(resposta.status(), StatusCode::OK, "login de {}", email);
    cookie_de(&resposta)
}

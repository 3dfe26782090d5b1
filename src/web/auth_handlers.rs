// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{LoginPayload, Papel, RegistroPayload, UsuarioPublico},
    services::{auth_service, usuario_service},
    state::AppState,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tower_sessions::Session;

// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> AppResult<Json<Value>> {
    let email = usuario_service::normalizar_email(&payload.email);
    tracing::info!("Tentativa de login para: {}", email);

    // 1. A senha pode vir em 'password' ou 'senha'
    let senha = payload
        .password
        .as_deref()
        .or(payload.senha.as_deref())
        .ok_or(AppError::CredenciaisInvalidas)?;

    // 2. Busca o usuário. E-mail desconhecido e senha errada produzem a
    // MESMA resposta, para não denunciar quais e-mails existem.
    let usuario = match usuario_service::buscar_por_email(&state.db_pool, &email).await? {
        Some(usuario) => usuario,
        None => {
            tracing::warn!("Login recusado para: {}", email);
            return Err(AppError::CredenciaisInvalidas);
        }
    };

    // 3. Verifica a senha contra o hash guardado
    if !auth_service::verify_password(senha, &usuario.senha).await? {
        tracing::warn!("Login recusado para: {}", email);
        return Err(AppError::CredenciaisInvalidas);
    }

    // 4. Autentica a sessão
    session.cycle_id().await // Gera novo ID de sessão (segurança)
        .map_err(|e| AppError::SessionError(format!("Falha ao rodar ID: {}", e)))?;
    session.insert("user_id", usuario.id).await
        .map_err(|e| AppError::SessionError(format!("Falha ao inserir na sessão: {}", e)))?;

    tracing::info!("✅ Login bem-sucedido para: {}", email);
    let publico = UsuarioPublico::from(usuario);
    Ok(Json(json!({ "message": "success", "user": publico })))
}

// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(payload): Json<RegistroPayload>,
) -> AppResult<Json<Value>> {
    let tipo = payload.tipo.unwrap_or(Papel::Aluno);
    let turma = payload.turma.as_deref().unwrap_or("A"); // Turma A se não informada

    let id = usuario_service::registrar(
        &state.db_pool,
        &payload.email,
        &payload.senha,
        payload.nome.as_deref(),
        tipo,
        turma,
    )
    .await?;

    Ok(Json(json!({ "message": "success", "id": id })))
}

// GET /logout
pub async fn handle_logout(session: Session) -> AppResult<Json<Value>> {
    let user_id: Option<i64> = session.get("user_id").await.ok().flatten();

    // Apaga todos os dados da sessão atual
    session.delete().await
        .map_err(|e| AppError::SessionError(format!("Falha ao apagar sessão: {}", e)))?;

    if let Some(id) = user_id {
        tracing::info!("🚪 Usuário {} desligado.", id);
    } else {
        tracing::info!("🚪 Sessão anônima desligada.");
    }

    Ok(Json(json!({ "message": "success" })))
}

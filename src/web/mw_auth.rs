// src/web/mw_auth.rs
use crate::{
    error::AppError,
    models::usuario::{Papel, Usuario},
    services::usuario_service,
    state::AppState,
};
use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use tower_sessions::Session;

// Usuário resolvido pelo gate, posto nas extensões da requisição para os
// handlers e para o middleware de professor (que assim não volta ao banco)
#[derive(Clone, Debug)]
pub struct UsuarioLogado(pub Usuario);

/// Middleware de autorização de TODAS as rotas protegidas: resolve o
/// chamador pela sessão e aplica as regras de visibilidade de aluno
/// antes de qualquer handler rodar.
pub async fn exigir_autenticacao(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Tenta obter o 'user_id' da sessão (cookie assinado já validado pela camada)
    let user_id = match session.get::<i64>("user_id").await {
        Ok(Some(id)) => id,
        Ok(None) => {
            tracing::debug!("Gate: requisição sem sessão autenticada.");
            return Err(AppError::NaoAutenticado);
        }
        Err(e) => {
            tracing::error!("Gate: erro ao ler sessão: {:?}", e);
            return Err(AppError::SessionError(format!("Erro ao verificar sessão: {}", e)));
        }
    };

    // Sessão válida mas usuário sumiu do banco (ex.: wipe de manutenção)
    let usuario = usuario_service::buscar_por_id(&state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Gate: sessão aponta para usuário inexistente ({}).", user_id);
            AppError::NaoAutenticado
        })?;

    // REGRAS PARA ALUNOS: aluno não consulta dados de outro aluno nem de
    // outra turma, não importa o que venha na query string.
    if usuario.tipo == Papel::Aluno {
        let params = parametros_da_query(&request);
        if let Some(aluno_param) = params.get("aluno_id") {
            if aluno_param.parse::<i64>().ok() != Some(usuario.id) {
                tracing::warn!(
                    "Gate: aluno {} tentou consultar aluno_id={}.",
                    usuario.id,
                    aluno_param
                );
                return Err(AppError::AcessoNegado(
                    "Acesso Negado: Você não pode acessar dados de outro aluno.".to_string(),
                ));
            }
        }
        if let Some(turma_param) = params.get("turma") {
            if usuario.turma.as_deref() != Some(turma_param.as_str()) {
                tracing::warn!(
                    "Gate: aluno {} tentou consultar turma={}.",
                    usuario.id,
                    turma_param
                );
                return Err(AppError::AcessoNegado(
                    "Acesso Negado: Você não pertence a esta turma.".to_string(),
                ));
            }
        }
    }

    tracing::debug!(
        "Gate: usuário {} autenticado ({}). Prosseguindo...",
        usuario.id,
        usuario.tipo.as_str()
    );
    request.extensions_mut().insert(UsuarioLogado(usuario));
    Ok(next.run(request).await)
}

// Query string como mapa simples; querystring ilegível conta como vazia
// (o extractor do handler é quem recusa o valor malformado)
fn parametros_da_query(request: &Request) -> HashMap<String, String> {
    Query::<HashMap<String, String>>::try_from_uri(request.uri())
        .map(|Query(params)| params)
        .unwrap_or_default()
}

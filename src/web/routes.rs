// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        auth_handlers, aviso_handlers, evento_handlers, frequencia_handlers, materia_handlers,
        mw_auth, mw_professor, nota_handlers, suporte_handlers, usuario_handlers,
    },
};
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route("/login", post(auth_handlers::handle_login))
        .route("/register", post(auth_handlers::handle_register))
        .route("/logout", get(auth_handlers::handle_logout));

    // --- Rotas de leitura e uso geral ---
    // Exigem apenas login (o gate já aplica as regras de aluno)
    let caller_routes = Router::new()
        .route(
            "/usuarios/{id}",
            get(usuario_handlers::obter_perfil).put(usuario_handlers::atualizar_perfil),
        )
        .route("/alunos", get(usuario_handlers::listar_alunos))
        .route("/avisos", get(aviso_handlers::listar_avisos))
        .route("/eventos", get(evento_handlers::listar_eventos))
        .route("/materias", get(materia_handlers::listar_materias))
        .route("/frequencia", get(frequencia_handlers::listar_frequencia))
        .route("/notas", get(nota_handlers::listar_notas))
        .route(
            "/suporte",
            get(suporte_handlers::listar_mensagens).post(suporte_handlers::criar_mensagem),
        );

    // --- Rotas de escrita ---
    // Exigem login E papel de professor
    let professor_routes = Router::new()
        .route("/avisos", post(aviso_handlers::criar_aviso))
        .route(
            "/avisos/{id}",
            put(aviso_handlers::atualizar_aviso).delete(aviso_handlers::apagar_aviso),
        )
        .route("/eventos", post(evento_handlers::criar_evento))
        .route(
            "/eventos/{id}",
            put(evento_handlers::atualizar_evento).delete(evento_handlers::apagar_evento),
        )
        .route("/materias", post(materia_handlers::criar_materia))
        .route("/materias/seed", post(materia_handlers::semear_materias))
        .route(
            "/materias/{id}",
            put(materia_handlers::atualizar_materia).delete(materia_handlers::apagar_materia),
        )
        .route("/frequencia", post(frequencia_handlers::lancar_frequencia))
        .route("/notas", post(nota_handlers::lancar_nota))
        .route("/suporte/{id}", put(suporte_handlers::responder_mensagem))
        // Aplica APENAS o gate de professor aqui (o de autenticação vem do router pai)
        .route_layer(middleware::from_fn(mw_professor::exigir_professor));

    // --- Rotas Autenticadas (Combinando tudo) ---
    let authenticated_routes = Router::new()
        .merge(caller_routes)
        .merge(professor_routes)
        // Aplica o gate geral a TODAS as rotas definidas ACIMA neste router
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            mw_auth::exigir_autenticacao,
        ));

    // --- Router Final ---
    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .with_state(app_state)
}

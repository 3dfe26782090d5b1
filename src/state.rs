// src/state.rs
use sqlx::SqlitePool;

// Estado partilhado com todos os handlers. O pool entra pronto (injetado no
// arranque ou pelos testes), nenhum módulo abre conexão própria.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}

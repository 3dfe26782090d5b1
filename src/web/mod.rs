// src/web/mod.rs
pub mod auth_handlers;
pub mod aviso_handlers;
pub mod evento_handlers;
pub mod frequencia_handlers;
pub mod materia_handlers;
pub mod mw_auth;
pub mod mw_professor;
pub mod nota_handlers;
pub mod routes;
pub mod suporte_handlers;
pub mod usuario_handlers;

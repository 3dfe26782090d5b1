// src/services/mod.rs
pub mod admin_service;
pub mod auth_service;
pub mod aviso_service;
pub mod evento_service;
pub mod frequencia_service;
pub mod materia_service;
pub mod nota_service;
pub mod suporte_service;
pub mod usuario_service;

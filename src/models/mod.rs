// src/models/mod.rs
pub mod aviso;
pub mod evento;
pub mod frequencia;
pub mod materia;
pub mod nota;
pub mod suporte;
pub mod usuario;

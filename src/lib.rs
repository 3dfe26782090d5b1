// src/lib.rs

// --- Declaração dos Módulos ---
// Em biblioteca para os binários de manutenção e os testes de integração
// montarem o mesmo router e os mesmos serviços do servidor.
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

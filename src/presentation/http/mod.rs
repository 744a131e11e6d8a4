// src/presentation/http/mod.rs
pub mod controllers;
pub mod cors;
pub mod error;
pub mod routes;
pub mod state;

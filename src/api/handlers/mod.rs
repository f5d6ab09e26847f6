// src/api/handlers/mod.rs
pub mod generator;
pub mod health;
pub mod security;

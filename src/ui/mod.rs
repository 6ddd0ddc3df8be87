//! Módulo de interfaz de usuario.

pub mod logger;
pub mod tables;

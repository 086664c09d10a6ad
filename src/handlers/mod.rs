// src/handlers/mod.rs

pub mod pages;
pub mod result;

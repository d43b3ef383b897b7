// src/utils/mod.rs

pub mod hash;
pub mod jwt;
pub mod quiz;
pub mod trivia;

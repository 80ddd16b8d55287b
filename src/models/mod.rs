// src/models/mod.rs

pub mod level;
pub mod question;
pub mod result;
pub mod statistics;
pub mod submission;

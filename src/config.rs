// src/config.rs

use std::env;
use dotenvy::dotenv;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://test_results.db?mode=rwc";
pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";
pub const DEFAULT_SERVER_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// JSON question bank loaded into an empty store at startup.
    pub questions_path: String,
    pub rust_log: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let questions_path = env::var("QUESTIONS_PATH")
            .unwrap_or_else(|_| DEFAULT_QUESTIONS_PATH.to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        Self {
            database_url,
            questions_path,
            rust_log,
            server_port,
        }
    }
}

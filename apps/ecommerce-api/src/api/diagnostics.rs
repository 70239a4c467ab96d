//! Diagnostic endpoint reporting store connectivity.
//!
//! Unlike the rest of the API this endpoint never fails: every internal
//! error is caught and rendered as a status string, and the response is
//! always 200. It is a health report, not an operational endpoint.

use axum::{extract::State, Json};
use database::DocumentStore;
use serde::Serialize;
use std::sync::Arc;

/// How many collection names the report lists at most.
const MAX_COLLECTIONS: usize = 10;

/// How much of an error message the report keeps.
const MAX_ERROR_CHARS: usize = 50;

#[derive(Serialize)]
pub struct DatabaseReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn database_report<S: DocumentStore>(
    State(store): State<Arc<S>>,
) -> Json<DatabaseReport> {
    let mut report = DatabaseReport {
        backend: "Running".to_string(),
        database: "Not Available".to_string(),
        database_url: env_flag("DATABASE_URL"),
        database_name: env_flag("DATABASE_NAME"),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if store.is_connected() {
        report.connection_status = "Connected".to_string();
        match store.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = "Connected & Working".to_string();
            }
            Err(e) => {
                report.database = format!("Connected but Error: {}", truncate(&e.to_string()));
            }
        }
    }

    Json(report)
}

fn env_flag(key: &str) -> String {
    if std::env::var(key).is_ok() {
        "Set".to_string()
    } else {
        "Not Set".to_string()
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_messages_intact() {
        assert_eq!(truncate("boom"), "boom");
    }

    #[test]
    fn test_truncate_cuts_long_messages() {
        let long = "x".repeat(200);
        assert_eq!(truncate(&long).len(), MAX_ERROR_CHARS);
    }

    #[test]
    fn test_env_flag() {
        temp_env::with_vars([("DIAG_PROBE_VAR", Some("1"))], || {
            assert_eq!(env_flag("DIAG_PROBE_VAR"), "Set");
        });
        temp_env::with_vars([("DIAG_PROBE_VAR", None::<&str>)], || {
            assert_eq!(env_flag("DIAG_PROBE_VAR"), "Not Set");
        });
    }
}

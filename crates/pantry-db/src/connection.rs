//! Connection to the SurrealDB instance holding pantry data.
//!
//! One namespace/database pair stores every organization; rows are
//! separated by their `organization_id` field, not by database.

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

/// Where the pantry data lives and how to sign in to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// WebSocket address of the SurrealDB server (e.g., `127.0.0.1:8000`).
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// Root credentials; migrations define tables and indexes.
    pub username: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "pantry".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    /// Load configuration from `PANTRY_DB_URL`, `PANTRY_DB_NAMESPACE`,
    /// `PANTRY_DB_DATABASE`, `PANTRY_DB_USERNAME` and
    /// `PANTRY_DB_PASSWORD`, falling back to the defaults for anything
    /// unset.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = var("PANTRY_DB_URL") {
            config.url = url;
        }
        if let Some(namespace) = var("PANTRY_DB_NAMESPACE") {
            config.namespace = namespace;
        }
        if let Some(database) = var("PANTRY_DB_DATABASE") {
            config.database = database;
        }
        if let Some(username) = var("PANTRY_DB_USERNAME") {
            config.username = username;
        }
        if let Some(password) = var("PANTRY_DB_PASSWORD") {
            config.password = password;
        }

        config
    }
}

/// Live connection to the pantry store.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Sign in as root and select the pantry namespace and database.
    ///
    /// Does not run migrations; call [`run_migrations`](crate::run_migrations)
    /// on [`client`](Self::client) before serving dashboards.
    pub async fn connect(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to pantry store"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!(namespace = %config.namespace, "Pantry store ready");

        Ok(Self { db })
    }

    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn unset_variables_keep_defaults() {
        let config = DbConfig::from_vars(|_| None);
        assert_eq!(config, DbConfig::default());
        assert_eq!(config.namespace, "pantry");
    }

    #[test]
    fn variables_override_each_field() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PANTRY_DB_URL", "db.internal:8000"),
            ("PANTRY_DB_NAMESPACE", "pantry_staging"),
            ("PANTRY_DB_DATABASE", "dashboards"),
            ("PANTRY_DB_USERNAME", "admin"),
            ("PANTRY_DB_PASSWORD", "s3cret"),
        ]);

        let config = DbConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(
            config,
            DbConfig {
                url: "db.internal:8000".into(),
                namespace: "pantry_staging".into(),
                database: "dashboards".into(),
                username: "admin".into(),
                password: "s3cret".into(),
            }
        );
    }

    #[test]
    fn partial_overrides_leave_other_fields_alone() {
        let config = DbConfig::from_vars(|key| {
            (key == "PANTRY_DB_DATABASE").then(|| "dashboards".to_string())
        });
        assert_eq!(config.database, "dashboards");
        assert_eq!(config.url, DbConfig::default().url);
        assert_eq!(config.username, "root");
    }
}

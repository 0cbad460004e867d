use async_trait::async_trait;
use ip_gate_application::ports::RestrictionRepository;
use ip_gate_domain::{Category, DomainError, RestrictionRule, RuleState, Scope};
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

type RestrictionRow = (String, String, Option<String>, Option<i64>);

pub struct SqliteRestrictionRepository {
    pool: SqlitePool,
}

impl SqliteRestrictionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_rule(row: RestrictionRow) -> Option<RestrictionRule> {
        let (category, scope, value, code) = row;

        let category = match category.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                warn!(error = %e, "Ignoring restriction row");
                return None;
            }
        };
        let scope = match scope.parse::<Scope>() {
            Ok(scope) => scope,
            Err(e) => {
                warn!(error = %e, "Ignoring restriction row");
                return None;
            }
        };
        let code = code.and_then(|c| u16::try_from(c).ok());

        Some(RestrictionRule::new(
            category,
            scope,
            value.as_deref().unwrap_or(""),
            code,
        ))
    }
}

#[async_trait]
impl RestrictionRepository for SqliteRestrictionRepository {
    #[instrument(skip(self))]
    async fn get_enabled(&self) -> Result<Vec<RestrictionRule>, DomainError> {
        let rows = sqlx::query_as::<_, RestrictionRow>(
            "SELECT category, scope, value, code FROM restrictions WHERE state = ? ORDER BY id ASC",
        )
        .bind(RuleState::Enabled.to_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query enabled restrictions");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(Self::row_to_rule).collect())
    }
}

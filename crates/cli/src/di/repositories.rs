use ip_gate_infrastructure::repositories::SqliteRestrictionRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub restriction: Arc<SqliteRestrictionRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            restriction: Arc::new(SqliteRestrictionRepository::new(pool)),
        }
    }
}

//! PostgreSQL-backed [`RecordStore`].
//!
//! Every operation checks out one connection from the pool and holds it for
//! the duration of the call. The connection goes back to the pool when the
//! guard drops, so early returns and errors release it as well.

use async_trait::async_trait;
use registrar_config::DatabaseConfig;
use registrar_models::{GradeRow, GradesByStudent, Student, group_grades};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, instrument};

use crate::{RecordStore, StoreError};

#[derive(Clone, Debug)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Opens the pool. Called once at startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await?;

        info!(
            max_connections = config.max_connections,
            "PostgreSQL pool ready"
        );

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Waits for checked-out connections to come back, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    #[instrument(skip(self))]
    async fn get_all_students(&self) -> Result<Vec<Student>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let students =
            sqlx::query_as::<_, Student>("SELECT sid, name, age FROM student ORDER BY sid ASC")
                .fetch_all(&mut *conn)
                .await?;

        Ok(students)
    }

    #[instrument(skip(self))]
    async fn get_student_by_id(&self, sid: &str) -> Result<Option<Student>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let student =
            sqlx::query_as::<_, Student>("SELECT sid, name, age FROM student WHERE sid = $1")
                .bind(sid)
                .fetch_optional(&mut *conn)
                .await?;

        Ok(student)
    }

    #[instrument(skip(self, name))]
    async fn update_student(&self, sid: &str, name: &str, age: i32) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("UPDATE student SET name = $1, age = $2 WHERE sid = $3")
            .bind(name)
            .bind(age)
            .bind(sid)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            info!(sid, "No student matched update");
        }

        Ok(())
    }

    #[instrument(skip(self, name))]
    async fn add_student(&self, sid: &str, name: &str, age: i32) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("INSERT INTO student (sid, name, age) VALUES ($1, $2, $3)")
            .bind(sid)
            .bind(name)
            .bind(age)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return StoreError::DuplicateStudent(sid.to_string());
                    }
                }
                StoreError::Sql(e)
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_all_grades(&self) -> Result<GradesByStudent, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, GradeRow>(
            r#"
            SELECT s.name AS student_name, m.name AS module_name, g.grade
            FROM student s
            LEFT JOIN grade g ON s.sid = g.sid
            LEFT JOIN module m ON g.mid = m.mid
            ORDER BY s.name ASC, g.grade ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(group_grades(rows))
    }

    #[instrument(skip(self))]
    async fn lecturer_has_modules(&self, lecturer_id: &str) -> Result<bool, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let has_modules = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM module WHERE lecturer = $1)",
        )
        .bind(lecturer_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(has_modules)
    }
}

// src/database.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tracing::info;

use crate::pipeline::AnalysisBundle;

/// Identity fields supplied by the user alongside the upload; analyses are
/// keyed by (name, email, mobile, timestamp).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateIdentity {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredAnalysis {
    pub id: i64,
    pub session_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub resume_data: String,
    pub analysis: String,
    pub recommendations: String,
    pub job_description: Option<String>,
    pub overall_score: i64,
    pub ats_score: i64,
    pub experience_level: String,
    pub primary_field: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredFeedback {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub score: i64,
    pub category: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct DatabaseConfig {
    pub database_path: PathBuf,
    pub pool: Option<SqlitePool>,
}

impl DatabaseConfig {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            database_path,
            pool: None,
        }
    }

    /// Initialize the database connection pool
    pub async fn init_pool(&mut self) -> Result<()> {
        if let Some(parent) = self.database_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create database directory")?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", self.database_path.display());

        let pool = SqlitePool::connect(&database_url)
            .await
            .context("Failed to connect to SQLite database")?;
        self.pool = Some(pool);

        info!("Database connection pool initialized: {}", database_url);
        Ok(())
    }

    /// Get the database pool
    pub fn pool(&self) -> Result<&SqlitePool> {
        self.pool
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Database pool not initialized. Call init_pool() first."))
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        let pool = self.pool()?;
        migrate(pool).await
    }
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS analyses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id TEXT NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            mobile TEXT NOT NULL,
            resume_data TEXT NOT NULL,
            analysis TEXT NOT NULL,
            recommendations TEXT NOT NULL,
            job_description TEXT,
            overall_score INTEGER NOT NULL,
            ats_score INTEGER NOT NULL,
            experience_level TEXT NOT NULL,
            primary_field TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_analyses_email
        ON analyses(email);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_analyses_field
        ON analyses(primary_field);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS feedback (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            score INTEGER NOT NULL,
            category TEXT,
            comments TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_feedback_score
        ON feedback(score);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database migrations completed successfully");
    Ok(())
}

pub struct AnalysisRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AnalysisRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist one analysis bundle. The record, analysis and
    /// recommendations are stored as JSON blobs; the score/field/level
    /// columns are denormalized for aggregation.
    pub async fn store(
        &self,
        identity: &CandidateIdentity,
        bundle: &AnalysisBundle,
        job_description: Option<&str>,
    ) -> Result<i64> {
        let resume_json = serde_json::to_string(&bundle.record)
            .context("Failed to serialize resume record")?;
        let analysis_json = serde_json::to_string(&bundle.analysis)
            .context("Failed to serialize analysis")?;
        let recommendations_json = serde_json::to_string(&bundle.recommendations)
            .context("Failed to serialize recommendations")?;

        let result = sqlx::query(
            r#"
            INSERT INTO analyses
                (session_id, name, email, mobile, resume_data, analysis, recommendations,
                 job_description, overall_score, ats_score, experience_level, primary_field,
                 created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&bundle.session_id)
        .bind(&identity.name)
        .bind(&identity.email)
        .bind(&identity.mobile)
        .bind(&resume_json)
        .bind(&analysis_json)
        .bind(&recommendations_json)
        .bind(job_description)
        .bind(bundle.analysis.overall_score as i64)
        .bind(bundle.analysis.ats_score as i64)
        .bind(bundle.record.level().as_str())
        .bind(bundle.record.field_tag())
        .bind(Utc::now())
        .execute(self.pool)
        .await?;

        let analysis_id = result.last_insert_rowid();
        info!(
            "Stored analysis {} for {} (session: {})",
            analysis_id, identity.email, bundle.session_id
        );
        Ok(analysis_id)
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<StoredAnalysis>> {
        let analyses = sqlx::query_as::<_, StoredAnalysis>(
            r#"
            SELECT id, session_id, name, email, mobile, resume_data, analysis,
                   recommendations, job_description, overall_score, ats_score,
                   experience_level, primary_field, created_at
            FROM analyses
            ORDER BY created_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(analyses)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM analyses")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    pub async fn field_distribution(&self) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT primary_field, COUNT(*) as count
            FROM analyses
            GROUP BY primary_field
            ORDER BY count DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn level_distribution(&self) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT experience_level, COUNT(*) as count
            FROM analyses
            GROUP BY experience_level
            ORDER BY count DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn average_scores(&self) -> Result<(f64, f64)> {
        let (overall, ats): (Option<f64>, Option<f64>) =
            sqlx::query_as("SELECT AVG(overall_score), AVG(ats_score) FROM analyses")
                .fetch_one(self.pool)
                .await?;

        Ok((overall.unwrap_or(0.0), ats.unwrap_or(0.0)))
    }
}

pub struct FeedbackRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FeedbackRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn store(
        &self,
        name: &str,
        email: &str,
        score: i64,
        category: Option<&str>,
        comments: Option<&str>,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO feedback (name, email, score, category, comments, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(score)
        .bind(category)
        .bind(comments)
        .bind(Utc::now())
        .execute(self.pool)
        .await?;

        info!("Stored feedback from {} (score: {})", email, score);
        Ok(result.last_insert_rowid())
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<StoredFeedback>> {
        let feedback = sqlx::query_as::<_, StoredFeedback>(
            r#"
            SELECT id, name, email, score, category, comments, created_at
            FROM feedback
            ORDER BY created_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(feedback)
    }

    pub async fn average_score(&self) -> Result<f64> {
        let (avg,): (Option<f64>,) = sqlx::query_as("SELECT AVG(score) FROM feedback")
            .fetch_one(self.pool)
            .await?;
        Ok(avg.unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::recommendations;
    use crate::types::{ResumeAnalysis, ResumeRecord};

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        migrate(&pool).await.expect("migrations");
        pool
    }

    fn sample_bundle() -> AnalysisBundle {
        let mut record = ResumeRecord::default();
        record.primary_field = Some("data_science".to_string());
        record.experience_level = Some(crate::types::ExperienceLevel::Mid);
        let analysis = ResumeAnalysis {
            overall_score: 81,
            ats_score: 74,
            ..Default::default()
        };
        let recommendations = recommendations::generate(&record, &analysis);
        AnalysisBundle {
            session_id: "test-session".to_string(),
            record,
            analysis,
            recommendations,
        }
    }

    #[tokio::test]
    async fn store_and_list_round_trip() {
        let pool = memory_pool().await;
        let repo = AnalysisRepository::new(&pool);

        let identity = CandidateIdentity {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            mobile: "0765550123".to_string(),
        };

        let id = repo
            .store(&identity, &sample_bundle(), Some("ML role"))
            .await
            .expect("store succeeds");
        assert!(id > 0);

        let recent = repo.list_recent(10).await.expect("list succeeds");
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].primary_field, "data_science");
        assert_eq!(recent[0].overall_score, 81);

        // Stored blob deserializes back into a record.
        let record: ResumeRecord = serde_json::from_str(&recent[0].resume_data).unwrap();
        assert_eq!(record.primary_field.as_deref(), Some("data_science"));
    }

    #[tokio::test]
    async fn aggregates_reflect_stored_rows() {
        let pool = memory_pool().await;
        let repo = AnalysisRepository::new(&pool);

        let identity = CandidateIdentity {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            mobile: "0765550124".to_string(),
        };

        repo.store(&identity, &sample_bundle(), None).await.unwrap();
        repo.store(&identity, &sample_bundle(), None).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(
            repo.field_distribution().await.unwrap(),
            vec![("data_science".to_string(), 2)]
        );
        let (overall, ats) = repo.average_scores().await.unwrap();
        assert_eq!(overall, 81.0);
        assert_eq!(ats, 74.0);
    }

    #[tokio::test]
    async fn feedback_round_trip() {
        let pool = memory_pool().await;
        let repo = FeedbackRepository::new(&pool);

        repo.store("Jo", "jo@example.com", 4, Some("AI Accuracy"), Some("Solid"))
            .await
            .unwrap();
        repo.store("Sam", "sam@example.com", 5, None, None).await.unwrap();

        let all = repo.list_recent(10).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(repo.average_score().await.unwrap(), 4.5);
    }
}

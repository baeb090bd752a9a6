// src/admin_cli.rs
use crate::database::{AnalysisRepository, DatabaseConfig, FeedbackRepository};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "resume-admin")]
#[command(about = "Inspect stored resume analyses and feedback")]
pub struct AdminCli {
    #[command(subcommand)]
    pub command: AdminCommand,

    #[arg(long, default_value = "resume_analyzer.db")]
    pub database_path: PathBuf,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List recent analyses
    List {
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// List recent feedback
    Feedback {
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Show aggregate statistics
    Stats,
    /// Initialize the database
    Init,
}

pub async fn handle_admin_command(cli: AdminCli) -> Result<()> {
    let mut db_config = DatabaseConfig::new(cli.database_path.clone());
    db_config.init_pool().await?;
    db_config.migrate().await?;

    let pool = db_config.pool()?;
    let analyses = AnalysisRepository::new(pool);
    let feedback = FeedbackRepository::new(pool);

    match cli.command {
        AdminCommand::List { limit } => {
            let rows = analyses.list_recent(limit).await?;
            if rows.is_empty() {
                info!("No analyses stored yet");
                return Ok(());
            }
            info!("Recent analyses ({}):", rows.len());
            for row in rows {
                info!(
                    "  [{}] {} <{}> field={} level={} overall={} ats={} at={}",
                    row.id,
                    row.name,
                    row.email,
                    row.primary_field,
                    row.experience_level,
                    row.overall_score,
                    row.ats_score,
                    row.created_at
                );
            }
        }

        AdminCommand::Feedback { limit } => {
            let rows = feedback.list_recent(limit).await?;
            if rows.is_empty() {
                info!("No feedback stored yet");
                return Ok(());
            }
            info!("Recent feedback ({}):", rows.len());
            for row in rows {
                info!(
                    "  [{}] {} <{}> score={} category={} at={}",
                    row.id,
                    row.name,
                    row.email,
                    row.score,
                    row.category.as_deref().unwrap_or("-"),
                    row.created_at
                );
            }
        }

        AdminCommand::Stats => {
            let total = analyses.count().await?;
            let (overall, ats) = analyses.average_scores().await?;
            let feedback_avg = feedback.average_score().await?;

            info!("Total analyses: {}", total);
            info!("Average overall score: {:.1}", overall);
            info!("Average ATS score: {:.1}", ats);
            info!("Average feedback score: {:.1}", feedback_avg);

            let fields = analyses.field_distribution().await?;
            if !fields.is_empty() {
                info!("Field distribution:");
                for (field, count) in fields {
                    info!("  {}: {}", field, count);
                }
            }

            let levels = analyses.level_distribution().await?;
            if !levels.is_empty() {
                info!("Experience level distribution:");
                for (level, count) in levels {
                    info!("  {}: {}", level, count);
                }
            }
        }

        AdminCommand::Init => {
            info!("Database initialized at {}", cli.database_path.display());
        }
    }

    Ok(())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::AnalysisResult;
use crate::report::SymptomReport;

/// Envelope a record-keeping collaborator may persist. The engine never stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub report: SymptomReport,
    pub analysis: AnalysisResult,
}

impl ReportRecord {
    pub fn new(report: SymptomReport, analysis: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            report,
            analysis,
        }
    }
}

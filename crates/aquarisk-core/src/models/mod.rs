pub mod analysis_result;
pub mod degradation_event;
pub mod disease_match;
pub mod environment;
pub mod forecast_report;
pub mod report_record;
pub mod risk;

pub use analysis_result::AnalysisResult;
pub use degradation_event::DegradationEvent;
pub use disease_match::DiseaseMatch;
pub use environment::{EnvironmentalInputs, ForecastRequest, Season};
pub use forecast_report::{DiseaseOutlook, DiseaseProjection, ForecastReport, ForecastSource, MonthlyRisk};
pub use report_record::ReportRecord;
pub use risk::{ConfidenceBand, RiskFactor, RiskLevel, SeasonalTrend, Trend};

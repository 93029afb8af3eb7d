pub mod coach_stats;
pub mod formations;
pub mod report;

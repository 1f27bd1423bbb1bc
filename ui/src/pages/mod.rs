pub mod analyzer;
pub mod not_found;

pub use analyzer::AnalyzerPage;
pub use not_found::NotFoundPage;

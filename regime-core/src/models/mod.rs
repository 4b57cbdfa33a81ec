mod financial_profile;
mod locality;
mod projection_point;
mod recommendation;
mod regime;
mod tax_bracket;
mod tax_calculation;
mod tax_comparison;

pub use financial_profile::FinancialProfile;
pub use locality::Locality;
pub use projection_point::ProjectionPoint;
pub use recommendation::{Recommendation, RecommendationCategory, RecommendationPriority};
pub use regime::Regime;
pub use tax_bracket::TaxBracket;
pub use tax_calculation::TaxCalculationResult;
pub use tax_comparison::TaxComparison;

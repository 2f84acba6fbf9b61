use crate::catalog::{UseCaseCatalog, UseCaseCategory};
use crate::config::RoiAssumptions;
use crate::profile::{CompanyProfile, CurrentSituation};
use crate::scoring::pain::compute_pain_scores;
use crate::scoring::{PainScores, Recommendation};

const INDUSTRY_FIT_WEIGHT: f64 = 0.4;
const PAIN_RELEVANCE_WEIGHT: f64 = 0.6;

/// How acutely a category addresses the company's pain profile.
pub fn pain_relevance(category: UseCaseCategory, scores: &PainScores) -> f64 {
    match category {
        UseCaseCategory::Automation => scores.efficiency,
        UseCaseCategory::CustomerInteraction => scores.customer_service,
        UseCaseCategory::DataAnalytics => (scores.efficiency + scores.scaling) / 2.0,
    }
}

/// Ranks the catalog against a company/situation pair and returns the top
/// entries by combined fit-and-pain score. Ties keep catalog order.
pub fn recommend_use_cases(
    catalog: &UseCaseCatalog,
    company: &CompanyProfile,
    situation: &CurrentSituation,
    assumptions: &RoiAssumptions,
) -> Vec<Recommendation> {
    let scores = compute_pain_scores(situation);

    let mut recommendations: Vec<Recommendation> = catalog
        .use_cases()
        .iter()
        .map(|use_case| {
            let industry_fit =
                use_case.fit_for(company.industry, assumptions.recommender_fit_fallback);
            let pain_relevance = pain_relevance(use_case.category, &scores);
            Recommendation {
                use_case: use_case.id,
                name: use_case.name.clone(),
                category: use_case.category,
                score: industry_fit * INDUSTRY_FIT_WEIGHT + pain_relevance * PAIN_RELEVANCE_WEIGHT,
                industry_fit,
                pain_relevance,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(assumptions.recommendation_limit);
    recommendations
}

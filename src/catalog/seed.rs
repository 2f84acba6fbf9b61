use crate::catalog::{AiUseCase, BenefitProfile, UseCaseCategory, UseCaseId};
use crate::profile::Industry;

/// Seeded catalog entries. The cost, benefit, and fit figures are calibration
/// data that downstream scenario expectations depend on.
pub fn default_use_cases() -> Vec<AiUseCase> {
    vec![
        AiUseCase::new(
            UseCaseId::DocProcessing,
            "Intelligente Dokumentenverarbeitung",
            UseCaseCategory::Automation,
            "Automatische Extraktion von Daten aus Rechnungen, Verträgen, E-Mails",
            10_000.0,
            350.0,
        )
        .with_benefits(BenefitProfile {
            time_savings_percentage: 80.0,
            error_reduction_percentage: 90.0,
            ..BenefitProfile::default()
        })
        .with_industry_fit([
            (Industry::Finance, 0.9),
            (Industry::Healthcare, 0.8),
            (Industry::Logistics, 0.8),
            (Industry::Services, 0.7),
            (Industry::Manufacturing, 0.6),
            (Industry::Retail, 0.6),
            (Industry::It, 0.7),
            (Industry::Other, 0.7),
        ]),
        AiUseCase::new(
            UseCaseId::WorkflowAutomation,
            "Workflow-Automatisierung",
            UseCaseCategory::Automation,
            "Automatische Weiterleitung und Bearbeitung von Anfragen",
            17_500.0,
            550.0,
        )
        .with_benefits(BenefitProfile {
            time_savings_percentage: 65.0,
            productivity_increase: 40.0,
            ..BenefitProfile::default()
        })
        .with_industry_fit([
            (Industry::Services, 0.9),
            (Industry::Finance, 0.8),
            (Industry::Healthcare, 0.8),
            (Industry::It, 0.9),
            (Industry::Logistics, 0.7),
            (Industry::Manufacturing, 0.6),
            (Industry::Retail, 0.7),
            (Industry::Other, 0.7),
        ]),
        AiUseCase::new(
            UseCaseId::Chatbot,
            "Intelligenter Chatbot/Virtual Assistant",
            UseCaseCategory::CustomerInteraction,
            "24/7 Kundensupport für häufige Anfragen",
            6_500.0,
            275.0,
        )
        .with_benefits(BenefitProfile {
            response_time_improvement: 85.0,
            customer_satisfaction_increase: 15.0,
            time_savings_percentage: 70.0,
            ..BenefitProfile::default()
        })
        .with_industry_fit([
            (Industry::Retail, 0.9),
            (Industry::Services, 0.9),
            (Industry::Finance, 0.8),
            (Industry::It, 0.8),
            (Industry::Healthcare, 0.7),
            (Industry::Logistics, 0.6),
            (Industry::Manufacturing, 0.5),
            (Industry::Other, 0.7),
        ]),
        AiUseCase::new(
            UseCaseId::PredictiveAnalytics,
            "Predictive Analytics für Verkaufsprognosen",
            UseCaseCategory::DataAnalytics,
            "Vorhersage von Verkaufstrends und Nachfrage",
            21_000.0,
            650.0,
        )
        .with_benefits(BenefitProfile {
            productivity_increase: 25.0,
            conversion_rate_increase: 8.0,
            ..BenefitProfile::default()
        })
        .with_industry_fit([
            (Industry::Retail, 0.9),
            (Industry::Manufacturing, 0.8),
            (Industry::Logistics, 0.8),
            (Industry::Finance, 0.7),
            (Industry::Services, 0.6),
            (Industry::It, 0.7),
            (Industry::Healthcare, 0.5),
            (Industry::Other, 0.6),
        ]),
        AiUseCase::new(
            UseCaseId::PersonalizedRecommendations,
            "Personalisierte Produktempfehlungen",
            UseCaseCategory::CustomerInteraction,
            "KI-basierte Empfehlungen für Cross-/Upselling",
            14_000.0,
            500.0,
        )
        .with_benefits(BenefitProfile {
            conversion_rate_increase: 22.0,
            customer_satisfaction_increase: 12.0,
            ..BenefitProfile::default()
        })
        .with_industry_fit([
            (Industry::Retail, 1.0),
            (Industry::Services, 0.8),
            (Industry::Finance, 0.7),
            (Industry::It, 0.6),
            (Industry::Healthcare, 0.4),
            (Industry::Logistics, 0.3),
            (Industry::Manufacturing, 0.3),
            (Industry::Other, 0.5),
        ]),
        AiUseCase::new(
            UseCaseId::AutomatedReporting,
            "Automatisierte Berichtserstellung",
            UseCaseCategory::DataAnalytics,
            "KI-generierte Berichte und Dashboards",
            10_500.0,
            425.0,
        )
        .with_benefits(BenefitProfile {
            time_savings_percentage: 90.0,
            productivity_increase: 30.0,
            ..BenefitProfile::default()
        })
        .with_industry_fit([
            (Industry::Finance, 0.9),
            (Industry::Manufacturing, 0.8),
            (Industry::Services, 0.8),
            (Industry::It, 0.9),
            (Industry::Healthcare, 0.7),
            (Industry::Logistics, 0.7),
            (Industry::Retail, 0.7),
            (Industry::Other, 0.7),
        ]),
    ]
}

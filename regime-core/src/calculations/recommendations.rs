//! Deduction-utilisation recommendations.
//!
//! Rules are data: each [`RecommendationRule`] pairs a trigger with a savings
//! estimate and a description template, and [`recommend`] evaluates every
//! rule in [`RULES`] the same way. Savings use a flat
//! [`ILLUSTRATIVE_MARGINAL_RATE`] rather than the marginal rate implied by
//! the slabs, so they are estimates for ranking, not exact tax deltas.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::format_inr;
use crate::calculations::regimes::{HOME_LOAN_INTEREST_CAP, NPS_CAP, SECTION_80C_CAP, SECTION_80D_CAP};
use crate::{
    FinancialProfile, Recommendation, RecommendationCategory, RecommendationPriority,
    TaxCalculationResult,
};

/// Flat rate used to turn an unused deduction into an estimated saving.
pub const ILLUSTRATIVE_MARGINAL_RATE: Decimal = dec!(0.30);

/// Ceiling on the estimated saving from restructuring salary to include HRA.
pub const HRA_RESTRUCTURE_SAVINGS_CAP: Decimal = dec!(60000);

/// Inputs every rule sees.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub profile: &'a FinancialProfile,
    pub old_regime: &'a TaxCalculationResult,
    pub new_regime: &'a TaxCalculationResult,
}

/// One declarative recommendation rule.
#[derive(Clone, Copy)]
pub struct RecommendationRule {
    pub id: &'static str,
    pub title: &'static str,
    pub category: RecommendationCategory,
    pub priority: RecommendationPriority,
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub savings: fn(&RuleContext<'_>) -> Decimal,
    pub describe: fn(&RuleContext<'_>, Decimal) -> String,
}

impl RecommendationRule {
    /// A recommendation when the rule triggers for `ctx`.
    pub fn evaluate(
        &self,
        ctx: &RuleContext<'_>,
    ) -> Option<Recommendation> {
        if !(self.applies)(ctx) {
            return None;
        }
        let potential_savings = (self.savings)(ctx);

        Some(Recommendation {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: (self.describe)(ctx, potential_savings),
            potential_savings,
            category: self.category,
            priority: self.priority,
        })
    }
}

impl std::fmt::Debug for RecommendationRule {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("category", &self.category)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

fn shortfall(
    claimed: Decimal,
    cap: Decimal,
) -> Decimal {
    cap - claimed
}

fn section_80c_shortfall(ctx: &RuleContext<'_>) -> Decimal {
    shortfall(ctx.profile.section_80c_investment, SECTION_80C_CAP)
}

fn section_80d_shortfall(ctx: &RuleContext<'_>) -> Decimal {
    shortfall(ctx.profile.section_80d_premium, SECTION_80D_CAP)
}

fn nps_shortfall(ctx: &RuleContext<'_>) -> Decimal {
    shortfall(ctx.profile.nps_contribution, NPS_CAP)
}

/// The five rules, in id order.
pub const RULES: [RecommendationRule; 5] = [
    RecommendationRule {
        id: "r1",
        title: "Maximize Section 80C Investments",
        category: RecommendationCategory::Investment,
        priority: RecommendationPriority::High,
        applies: |ctx| ctx.profile.section_80c_investment < SECTION_80C_CAP,
        savings: |ctx| section_80c_shortfall(ctx) * ILLUSTRATIVE_MARGINAL_RATE,
        describe: |ctx, savings| {
            format!(
                "Invest {} more in ELSS, PPF, or Life Insurance to save up to {} in taxes.",
                format_inr(section_80c_shortfall(ctx)),
                format_inr(savings)
            )
        },
    },
    RecommendationRule {
        id: "r2",
        title: "Health Insurance Premium Deduction",
        category: RecommendationCategory::Insurance,
        priority: RecommendationPriority::High,
        applies: |ctx| ctx.profile.section_80d_premium < SECTION_80D_CAP,
        savings: |ctx| section_80d_shortfall(ctx) * ILLUSTRATIVE_MARGINAL_RATE,
        describe: |ctx, savings| {
            format!(
                "Invest {} more in health insurance to claim under Section 80D and save {}.",
                format_inr(section_80d_shortfall(ctx)),
                format_inr(savings)
            )
        },
    },
    RecommendationRule {
        id: "r3",
        title: "Additional NPS Contribution (80CCD(1B))",
        category: RecommendationCategory::Investment,
        priority: RecommendationPriority::Medium,
        applies: |ctx| ctx.profile.nps_contribution < NPS_CAP,
        savings: |ctx| nps_shortfall(ctx) * ILLUSTRATIVE_MARGINAL_RATE,
        describe: |ctx, savings| {
            format!(
                "Invest {} in NPS for additional tax benefit under Section 80CCD(1B) and save {}.",
                format_inr(nps_shortfall(ctx)),
                format_inr(savings)
            )
        },
    },
    RecommendationRule {
        id: "r4",
        title: "Claim HRA Exemption",
        category: RecommendationCategory::Deduction,
        priority: RecommendationPriority::High,
        applies: |ctx| {
            ctx.profile.annual_rent_paid > Decimal::ZERO
                && ctx.profile.house_rent_allowance_received.is_zero()
        },
        savings: |ctx| {
            (ctx.profile.annual_rent_paid * ILLUSTRATIVE_MARGINAL_RATE).min(HRA_RESTRUCTURE_SAVINGS_CAP)
        },
        describe: |_, _| {
            "You are paying rent but not claiming HRA. Update your salary structure to include \
             HRA component for tax savings."
                .to_string()
        },
    },
    RecommendationRule {
        id: "r5",
        title: "Home Loan Interest Deduction",
        category: RecommendationCategory::Deduction,
        priority: RecommendationPriority::Medium,
        applies: |ctx| {
            let interest = ctx.profile.home_loan_interest_paid;
            interest > Decimal::ZERO
                && interest < HOME_LOAN_INTEREST_CAP
                && ctx.old_regime.total_tax < ctx.new_regime.total_tax
        },
        savings: |ctx| ctx.profile.home_loan_interest_paid * ILLUSTRATIVE_MARGINAL_RATE,
        describe: |_, _| {
            "Continue claiming home loan interest under Section 24(b). You are saving \
             significantly with the old regime."
                .to_string()
        },
    },
];

/// Every triggered rule, largest estimated saving first.
///
/// Ties keep rule order. An empty list means every tracked deduction is
/// already used in full.
pub fn recommend(
    profile: &FinancialProfile,
    old_regime: &TaxCalculationResult,
    new_regime: &TaxCalculationResult,
) -> Vec<Recommendation> {
    let ctx = RuleContext {
        profile,
        old_regime,
        new_regime,
    };

    let mut recommendations: Vec<Recommendation> =
        RULES.iter().filter_map(|rule| rule.evaluate(&ctx)).collect();
    recommendations.sort_by(|a, b| b.potential_savings.cmp(&a.potential_savings));
    recommendations
}

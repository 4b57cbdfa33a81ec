//! Regime tax computation and comparison.
//!
//! Leaf functions ([`slab`], [`exemption`]) feed the two regime evaluators in
//! [`regimes`]; [`comparison`] runs both and attaches the output of
//! [`recommendations`]; [`projection`] re-runs the evaluators over derived
//! what-if profiles.

pub mod common;
pub mod comparison;
pub mod exemption;
pub mod projection;
pub mod recommendations;
pub mod regimes;
pub mod slab;

pub use comparison::compare;
pub use exemption::compute_housing_exemption;
pub use projection::{Projection, ProjectionParams, ScenarioImpact, WhatIfScenario, project, simulate};
pub use recommendations::recommend;
pub use regimes::{DeductionBreakdown, NewRegime, OldRegime, RegimeEvaluator, evaluator};
pub use slab::compute_slab_tax;

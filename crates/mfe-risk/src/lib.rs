//! Risk tier, gain zone and trade priority classification.
//!
//! Derives the auxiliary categorical fields of a panel record from fixed
//! threshold rules:
//! - Risk tier: curated low-risk / high-risk instrument sets
//! - Zone: absolute gain percentage bands
//! - Priority: ordered rule ladder, assertiveness floor applied last

pub mod classifier;
pub mod config;
pub mod error;

pub use classifier::{
    priority_for, zone_for_gain, Classification, Classifier, PriorityInput, PriorityRule,
    PRIORITY_RULES,
};
pub use config::ClassifierConfig;
pub use error::{RiskError, RiskResult};

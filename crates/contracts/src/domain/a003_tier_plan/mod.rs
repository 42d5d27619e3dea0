pub mod aggregate;

pub use aggregate::{
    CreateFeatureDto, CreateLimitDto, CreateTierPlanDto, FeatureDraft, LimitDraft,
    TierFeatureDto, TierLimitDto, TierPlanDto, UpdateFeatureDto, UpdateLimitDto,
};

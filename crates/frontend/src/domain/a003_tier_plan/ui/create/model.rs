use contracts::domain::a003_tier_plan::{CreateTierPlanDto, FeatureDraft, LimitDraft};
use contracts::enums::RecordStatus;

const DEFAULT_MONTHLY_DAYS: u32 = 30;
const DEFAULT_YEARLY_DAYS: u32 = 365;

/// Editable state of the new-tier form; numbers stay text until submit.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPlanForm {
    pub title: String,
    pub description: String,
    pub monthly_price: String,
    pub yearly_price: String,
    pub monthly_days: String,
    pub yearly_days: String,
    pub status: RecordStatus,
    pub badge_url: String,
    pub limits: Vec<LimitDraft>,
    pub features: Vec<FeatureDraft>,
}

impl Default for TierPlanForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            monthly_price: String::new(),
            yearly_price: String::new(),
            monthly_days: DEFAULT_MONTHLY_DAYS.to_string(),
            yearly_days: DEFAULT_YEARLY_DAYS.to_string(),
            status: RecordStatus::Active,
            badge_url: String::new(),
            limits: vec![LimitDraft::default()],
            features: vec![FeatureDraft::default()],
        }
    }
}

fn parse_price(label: &str, raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("{} is required", label));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(format!("{} must be a non-negative number", label)),
    }
}

fn parse_days(label: &str, raw: &str, default: u32) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    match raw.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!("{} must be a whole number of days", label)),
    }
}

impl TierPlanForm {
    /// Request body, or the first validation message
    pub fn build(&self) -> Result<CreateTierPlanDto, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".into());
        }
        let monthly_price = parse_price("Monthly price", &self.monthly_price)?;
        let yearly_price = parse_price("Yearly price", &self.yearly_price)?;
        let monthly_duration_in_days =
            parse_days("Monthly duration", &self.monthly_days, DEFAULT_MONTHLY_DAYS)?;
        let yearly_duration_in_days =
            parse_days("Yearly duration", &self.yearly_days, DEFAULT_YEARLY_DAYS)?;

        Ok(CreateTierPlanDto {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            monthly_price,
            yearly_price,
            monthly_duration_in_days,
            yearly_duration_in_days,
            status: self.status,
            tier_badge_url: self.badge_url.trim().to_string(),
            tier_plan_limits: self
                .limits
                .iter()
                .filter(|l| l.is_complete())
                .map(|l| LimitDraft {
                    limits_name: l.limits_name.trim().to_string(),
                    limits_value: l.limits_value.trim().to_string(),
                })
                .collect(),
            features: self
                .features
                .iter()
                .filter(|f| f.is_complete())
                .map(|f| FeatureDraft {
                    feature_name: f.feature_name.trim().to_string(),
                    feature_description: f.feature_description.trim().to_string(),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TierPlanForm {
        TierPlanForm {
            title: " Gold ".into(),
            monthly_price: "999".into(),
            yearly_price: "9999.5".into(),
            ..Default::default()
        }
    }

    #[test]
    fn title_and_prices_are_required() {
        let mut form = filled();
        form.title = "  ".into();
        assert_eq!(form.build().unwrap_err(), "Title is required");

        let mut form = filled();
        form.yearly_price.clear();
        assert_eq!(form.build().unwrap_err(), "Yearly price is required");

        let mut form = filled();
        form.monthly_price = "-5".into();
        assert!(form.build().unwrap_err().starts_with("Monthly price"));
    }

    #[test]
    fn blank_durations_fall_back_to_defaults() {
        let mut form = filled();
        form.monthly_days.clear();
        form.yearly_days = " ".into();
        let body = form.build().unwrap();
        assert_eq!(body.title, "Gold");
        assert_eq!(body.monthly_duration_in_days, 30);
        assert_eq!(body.yearly_duration_in_days, 365);
        assert_eq!(body.yearly_price, 9999.5);
    }

    #[test]
    fn incomplete_rows_are_dropped() {
        let mut form = filled();
        form.limits = vec![
            LimitDraft { limits_name: "MAX_LISTINGS".into(), limits_value: " 50 ".into() },
            LimitDraft { limits_name: "LEADS".into(), limits_value: String::new() },
        ];
        form.features.push(FeatureDraft {
            feature_name: "Priority support".into(),
            feature_description: String::new(),
        });

        let body = form.build().unwrap();
        assert_eq!(body.tier_plan_limits.len(), 1);
        assert_eq!(body.tier_plan_limits[0].limits_value, "50");
        assert_eq!(body.features.len(), 1);
        assert_eq!(body.features[0].feature_name, "Priority support");
    }
}

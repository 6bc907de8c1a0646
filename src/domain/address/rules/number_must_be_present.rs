use crate::domain::business_rule_interface::BusinessRuleInterface;

pub struct NumberMustBePresent {
    pub number: Option<i64>,
}

impl BusinessRuleInterface for NumberMustBePresent {
    fn is_broken(&self) -> bool {
        self.number.is_none()
    }

    fn message(&self) -> String {
        "Number cannot be empty".to_string()
    }
}

use crate::infrastructure::error::{AppError, AppResult};

pub trait BusinessRuleInterface {
    fn is_broken(&self) -> bool;

    fn message(&self) -> String;

    fn check_broken(&self) -> AppResult<()> {
        if self.is_broken() {
            return Err(AppError::ValidationError { reasons: vec![self.message()] });
        }
        Ok(())
    }
}

/// Evaluates every rule and reports all broken ones in a single error.
pub fn check_all(rules: &[&dyn BusinessRuleInterface]) -> AppResult<()> {
    let reasons: Vec<String> = rules
        .iter()
        .filter(|rule| rule.is_broken())
        .map(|rule| rule.message())
        .collect();

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError { reasons })
    }
}

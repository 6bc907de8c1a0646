use crate::domain::business_rule_interface::BusinessRuleInterface;

pub struct TextMustNotBeEmpty<'a> {
    pub value: Option<&'a str>,
    pub field_name: &'static str,
}

impl<'a> TextMustNotBeEmpty<'a> {
    pub fn new(value: Option<&'a str>, field_name: &'static str) -> Self {
        Self { value, field_name }
    }
}

impl BusinessRuleInterface for TextMustNotBeEmpty<'_> {
    fn is_broken(&self) -> bool {
        self.value.map_or(true, str::is_empty)
    }

    fn message(&self) -> String {
        format!("{} cannot be empty", self.field_name)
    }
}

use std::collections::HashMap;

/// principal input element id
pub const AMOUNT_INPUT_ID: &str = "id_amount";
/// annual interest rate input element id
pub const INTEREST_RATE_INPUT_ID: &str = "id_interest_rate";
/// tenure input element id
pub const TENURE_INPUT_ID: &str = "id_tenure_months";
/// container toggled between shown and hidden
pub const CALCULATIONS_CONTAINER_ID: &str = "loan-calculations";

/// display fields written by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    Interest,
    Total,
    Monthly,
}

impl DisplayField {
    pub const ALL: [DisplayField; 3] = [DisplayField::Interest, DisplayField::Total, DisplayField::Monthly];

    pub fn element_id(&self) -> &'static str {
        match self {
            DisplayField::Interest => "calculated-interest",
            DisplayField::Total => "calculated-total",
            DisplayField::Monthly => "calculated-monthly",
        }
    }
}

/// rendering surface for calculator output
pub trait CalculationView {
    fn set_text(&mut self, field: DisplayField, text: &str);

    fn set_visible(&mut self, visible: bool);
}

/// in-memory view, for headless rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryView {
    pub texts: HashMap<DisplayField, String>,
    pub visible: bool,
    pub renders: u32,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: DisplayField) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }
}

impl CalculationView for MemoryView {
    fn set_text(&mut self, field: DisplayField, text: &str) {
        self.texts.insert(field, text.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids() {
        let ids: Vec<_> = DisplayField::ALL.iter().map(|f| f.element_id()).collect();
        assert_eq!(ids, vec!["calculated-interest", "calculated-total", "calculated-monthly"]);
    }
}

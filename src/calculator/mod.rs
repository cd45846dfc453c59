pub mod parse;
pub mod view;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::format::format_currency;

pub use parse::{parse_amount, parse_float_prefix, parse_int_prefix, parse_rate, parse_tenure};
pub use view::{
    CalculationView, DisplayField, MemoryView, AMOUNT_INPUT_ID, CALCULATIONS_CONTAINER_ID,
    INTEREST_RATE_INPUT_ID, TENURE_INPUT_ID,
};

const MONTHS_PER_YEAR: i64 = 12;

/// the three free-text loan form fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLoanForm {
    pub amount: String,
    pub interest_rate: String,
    pub tenure_months: String,
}

impl RawLoanForm {
    pub fn new(amount: &str, interest_rate: &str, tenure_months: &str) -> Self {
        Self {
            amount: amount.to_string(),
            interest_rate: interest_rate.to_string(),
            tenure_months: tenure_months.to_string(),
        }
    }

    /// parse each field with its fallback
    pub fn parse(&self) -> LoanQuoteInput {
        LoanQuoteInput {
            amount: parse_amount(&self.amount),
            interest_rate: parse_rate(&self.interest_rate),
            tenure_months: parse_tenure(&self.tenure_months),
        }
    }
}

/// parsed calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuoteInput {
    pub amount: Money,
    pub interest_rate: Rate,
    pub tenure_months: i64,
}

impl LoanQuoteInput {
    pub fn compute(&self) -> Option<LoanQuoteResult> {
        compute(self.amount, self.interest_rate, self.tenure_months)
    }
}

/// simple interest quote, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuoteResult {
    pub interest: Money,
    pub total_amount: Money,
    pub monthly_installment: Money,
}

impl LoanQuoteResult {
    pub fn value(&self, field: DisplayField) -> Money {
        match field {
            DisplayField::Interest => self.interest,
            DisplayField::Total => self.total_amount,
            DisplayField::Monthly => self.monthly_installment,
        }
    }
}

/// compute a simple interest quote
///
/// `interest = amount * rate * (tenure / 12)`, `total = amount + interest`,
/// `monthly = total / tenure`. Returns `None` unless `amount > 0` and
/// `tenure_months > 0`, or when the figures overflow a `Decimal`.
pub fn compute(amount: Money, interest_rate: Rate, tenure_months: i64) -> Option<LoanQuoteResult> {
    if !amount.is_positive() || tenure_months <= 0 {
        return None;
    }

    let months = Decimal::from(tenure_months);

    // divide by 12 last; whole-year tenures stay exact
    let interest = amount
        .checked_mul(interest_rate.as_decimal())?
        .checked_mul(months)?
        .checked_div(Decimal::from(MONTHS_PER_YEAR))?;
    let total_amount = amount.checked_add(interest)?;
    let monthly_installment = total_amount.checked_div(months)?;

    Some(LoanQuoteResult {
        interest,
        total_amount,
        monthly_installment,
    })
}

/// visibility of the calculations container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayState {
    #[default]
    Hidden,
    Shown,
}

/// drives a [`CalculationView`] from loan form input events
#[derive(Debug, Default)]
pub struct LoanTotalsCalculator {
    state: DisplayState,
}

impl LoanTotalsCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// recompute from the current form values and re-render
    ///
    /// Every call is a full recompute. While hidden the text fields are left
    /// untouched; only the container visibility changes.
    pub fn on_input<V: CalculationView>(&mut self, form: &RawLoanForm, view: &mut V) -> DisplayState {
        let input = form.parse();

        self.state = match input.compute() {
            Some(result) => {
                for field in DisplayField::ALL {
                    view.set_text(field, &format_currency(result.value(field)));
                }
                view.set_visible(true);
                DisplayState::Shown
            }
            None => {
                view.set_visible(false);
                DisplayState::Hidden
            }
        };

        debug!(
            "loan calculator: amount={} rate={} tenure={} -> {:?}",
            input.amount, input.interest_rate, input.tenure_months, self.state
        );
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: Decimal) -> Money {
        Money::from_decimal(d)
    }

    #[test]
    fn test_reference_quote() {
        let result = compute(money(dec!(1000)), Rate::from_percent(dec!(12)), 12).unwrap();

        assert_eq!(result.interest.as_decimal(), dec!(120));
        assert_eq!(result.total_amount.as_decimal(), dec!(1120));
        assert_eq!(result.monthly_installment.round_dp(2).as_decimal(), dec!(93.33));
    }

    #[test]
    fn test_zero_amount_hidden() {
        assert!(compute(Money::ZERO, Rate::from_percent(dec!(10)), 12).is_none());
    }

    #[test]
    fn test_gate_ignores_rate() {
        for rate in [dec!(0), dec!(5), dec!(250)] {
            let rate = Rate::from_percent(rate);
            assert!(compute(money(dec!(-50)), rate, 12).is_none());
            assert!(compute(money(dec!(5000)), rate, 0).is_none());
            assert!(compute(money(dec!(5000)), rate, -6).is_none());
        }
    }

    #[test]
    fn test_totals_are_exact() {
        let cases = [
            (dec!(1000), dec!(12), 12),
            (dec!(25000), dec!(18.5), 7),
            (dec!(0.01), dec!(99.99), 60),
            (dec!(150000), dec!(0), 36),
            (dec!(7777.77), dec!(3.25), 1),
        ];

        for (amount, rate, tenure) in cases {
            let amount = money(amount);
            let result = compute(amount, Rate::from_percent(rate), tenure).unwrap();

            assert_eq!(result.total_amount, amount + result.interest);
            assert_eq!(
                result.monthly_installment,
                result.total_amount / Decimal::from(tenure)
            );
        }
    }

    #[test]
    fn test_zero_rate_spreads_principal() {
        let result = compute(money(dec!(1200)), Rate::ZERO, 12).unwrap();
        assert!(result.interest.is_zero());
        assert_eq!(result.monthly_installment.as_decimal(), dec!(100));
    }

    #[test]
    fn test_overflow_hides_instead_of_panicking() {
        let huge = money(Decimal::MAX);
        assert!(compute(huge, Rate::from_percent(dec!(100)), 120).is_none());
    }

    #[test]
    fn test_form_parse_fallbacks() {
        let input = RawLoanForm::new("abc", "", "").parse();
        assert_eq!(input.amount, Money::ZERO);
        assert_eq!(input.interest_rate, Rate::ZERO);
        assert_eq!(input.tenure_months, 1);
        assert!(input.compute().is_none());
    }

    #[test]
    fn test_zero_tenure_text_is_shown_as_one_month() {
        let input = RawLoanForm::new("1000", "12", "0").parse();
        let result = input.compute().unwrap();

        assert_eq!(input.tenure_months, 1);
        assert_eq!(result.interest.as_decimal(), dec!(10));
        assert_eq!(result.monthly_installment.as_decimal(), dec!(1010));
    }

    #[test]
    fn test_calculator_shows_and_renders() {
        let mut calculator = LoanTotalsCalculator::new();
        let mut view = MemoryView::new();
        assert_eq!(calculator.state(), DisplayState::Hidden);

        let state = calculator.on_input(&RawLoanForm::new("1000", "12", "12"), &mut view);

        assert_eq!(state, DisplayState::Shown);
        assert!(view.visible);
        assert_eq!(view.text(DisplayField::Interest), Some("₹120.00"));
        assert_eq!(view.text(DisplayField::Total), Some("₹1,120.00"));
        assert_eq!(view.text(DisplayField::Monthly), Some("₹93.33"));
    }

    #[test]
    fn test_calculator_hides_without_clearing_text() {
        let mut calculator = LoanTotalsCalculator::new();
        let mut view = MemoryView::new();

        calculator.on_input(&RawLoanForm::new("1000", "12", "12"), &mut view);
        let state = calculator.on_input(&RawLoanForm::new("", "12", "12"), &mut view);

        assert_eq!(state, DisplayState::Hidden);
        assert!(!view.visible);
        assert_eq!(view.text(DisplayField::Total), Some("₹1,120.00"));
    }

    #[test]
    fn test_calculator_recomputes_every_event() {
        let mut calculator = LoanTotalsCalculator::new();
        let mut view = MemoryView::new();
        let form = RawLoanForm::new("2400", "10", "24");

        calculator.on_input(&form, &mut view);
        let first = view.clone();
        calculator.on_input(&form, &mut view);

        assert_eq!(view.texts, first.texts);
        assert_eq!(view.renders, 2);
    }

    #[test]
    fn test_negative_tenure_hidden() {
        let mut calculator = LoanTotalsCalculator::new();
        let mut view = MemoryView::new();

        let state = calculator.on_input(&RawLoanForm::new("1000", "12", "-3"), &mut view);

        assert_eq!(state, DisplayState::Hidden);
        assert!(view.texts.is_empty());
    }
}

/// form events - drive the calculator the way a loan form does
use loan_tracker::{DisplayField, LoanTotalsCalculator, MemoryView, RawLoanForm};

fn main() {
    println!("=== form events example ===\n");

    let mut calculator = LoanTotalsCalculator::new();
    let mut view = MemoryView::new();

    // typing into the form one field at a time
    let keystrokes = [
        RawLoanForm::new("", "", ""),
        RawLoanForm::new("50000", "", ""),
        RawLoanForm::new("50000", "14", ""),
        RawLoanForm::new("50000", "14", "18"),
        RawLoanForm::new("50000", "14", "-1"),
    ];

    for form in &keystrokes {
        let state = calculator.on_input(form, &mut view);
        println!("{:?} -> {:?}", form, state);
        if view.visible {
            for field in DisplayField::ALL {
                println!("  #{} = {}", field.element_id(), view.text(field).unwrap_or(""));
            }
        }
    }
}

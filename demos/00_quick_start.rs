/// quick start - compute and format a loan quote
use loan_tracker::{compute, format_currency, Decimal, Money, Rate};

fn main() {
    // ₹1,000 at 12% for a year
    let quote = compute(
        Money::from_major(1_000),
        Rate::from_percent(Decimal::from(12)),
        12,
    );

    match quote {
        Some(q) => {
            println!("interest: {}", format_currency(q.interest));
            println!("total:    {}", format_currency(q.total_amount));
            println!("monthly:  {}", format_currency(q.monthly_installment));
        }
        None => println!("nothing to show"),
    }
}

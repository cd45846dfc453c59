/// export table - sort a rendered table and write it as CSV
use loan_tracker::{sort_rows, CsvExport, SortKind, Table, TrackerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let header = vec!["Borrower".to_string(), "Outstanding".to_string(), "Due".to_string()];
    let mut body: Vec<Vec<String>> = vec![
        vec!["Ravi \"RK\" Kumar".into(), "₹12,500.00".into(), "2024-03-05".into()],
        vec!["Anita".into(), "₹950.00".into(), "2024-02-01".into()],
        vec!["Bala".into(), "₹1,20,000.00".into(), "2024-02-20".into()],
    ];

    sort_rows(&mut body, 1, SortKind::Number);

    let mut table = Table::new();
    table.push_row(header);
    for row in body {
        table.push_row(row);
    }

    let config = TrackerConfig::load(std::path::Path::new("loan-tracker.toml"))?;
    let export = CsvExport::from_config(&table, &config);
    println!("{}", export.content);

    let path = export.write_to_dir(&std::env::temp_dir())?;
    println!("\nwritten to {}", path.display());
    Ok(())
}

pub mod actions;
pub mod calculator;
pub mod client;
pub mod config;
pub mod cookies;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod format;
pub mod logging;
pub mod messages;
pub mod sort;

// re-export key types
pub use actions::{confirm_action, confirm_delete, Confirm, InstallmentActions, MarkPaidOutcome};
pub use calculator::{
    compute, CalculationView, DisplayField, DisplayState, LoanQuoteInput, LoanQuoteResult,
    LoanTotalsCalculator, MemoryView, RawLoanForm,
};
pub use client::{LoanTrackerClient, MarkPaidResponse, ServerQuote};
pub use config::TrackerConfig;
pub use cookies::get_cookie;
pub use decimal::{Money, Rate};
pub use errors::{Result, TrackerError};
pub use export::{export_table_to_csv, CsvExport, Table};
pub use format::{format_currency, format_whole_currency, normalize_currency_input};
pub use messages::{Message, MessageBoard, MessageKind, MessageSink};
pub use sort::{sort_rows, SortKind};

// re-export external dependencies that users will need
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;

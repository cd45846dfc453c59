/// mark paid - confirm, post to the tracker, show the banner, reload
use std::env;

use loan_tracker::messages::TimedMessageSink;
use loan_tracker::{
    InstallmentActions, LoanTrackerClient, MessageBoard, SafeTimeProvider, TimeSource,
    TrackerConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TrackerConfig::default().with_env_overrides()?;
    loan_tracker::logging::initialize(config.level_filter()?, None)?;

    let installment_id: u64 = env::args().nth(1).unwrap_or_else(|| "1".to_string()).parse()?;
    let cookies = env::var("LOAN_TRACKER_COOKIES").unwrap_or_default();

    let client = LoanTrackerClient::from_config(&config)?;
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut board = MessageBoard::new(config.auto_dismiss());

    let outcome = {
        let sink = TimedMessageSink { board: &mut board, time: &time };
        let mut actions = InstallmentActions::new(
            &client,
            |prompt: &str| {
                println!("{prompt} [auto-confirmed]");
                true
            },
            sink,
            || println!("reloading page"),
        )
        .with_cookie_header_named(&cookies, &config.csrf_cookie_name);
        actions.mark_paid(installment_id).await
    };

    println!("outcome: {:?}", outcome);
    println!("{}", board.render_html());
    Ok(())
}

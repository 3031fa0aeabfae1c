//! Provisioning CLI: purge an event's cards, generate a fresh unique set,
//! store it, and print the sheet layout for printing.

use bingo_backend::config::db::DbProfile;
use bingo_backend::error::AppError;
use bingo_backend::infra::db::connect_db;
use bingo_backend::services::provisioning::{
    self, ProvisionSpec, ProvisionSummary, DEFAULT_CARDS_PER_SHEET, DEFAULT_SHEETS,
};
use clap::Parser;
use sea_orm::TransactionTrait;

#[derive(Parser)]
#[command(name = "card-press")]
#[command(about = "Bingo card provisioning tool")]
struct Args {
    /// Event name the cards belong to
    event: String,

    /// Cards per printed sheet (clamped to 1..=6)
    #[arg(short, long, default_value_t = DEFAULT_CARDS_PER_SHEET)]
    cards_per_sheet: u32,

    /// Number of sheets to produce
    #[arg(short, long, default_value_t = DEFAULT_SHEETS)]
    sheets: u32,

    /// Prize label stamped on every card
    #[arg(short, long, default_value = "")]
    prize: String,
}

async fn run(args: Args) -> Result<ProvisionSummary, AppError> {
    let spec = ProvisionSpec::new(args.event, args.cards_per_sheet, args.sheets)
        .with_prize(args.prize);

    let conn = connect_db(DbProfile::Prod).await?;

    // All-or-nothing: a failed generation must not leave the event purged.
    let txn = conn.begin().await.map_err(AppError::from)?;
    let summary = provisioning::provision_event(&txn, &mut rand::rng(), &spec).await?;
    txn.commit().await.map_err(AppError::from)?;

    Ok(summary)
}

fn print_layout(summary: &ProvisionSummary) {
    println!(
        "Event '{}': {} cards across {} sheet(s) ({} per sheet, {} old card(s) purged)",
        summary.event,
        summary.cards_created,
        summary.sheets,
        summary.cards_per_sheet,
        summary.purged
    );

    let rows = provisioning::sheet_rows(summary.cards_per_sheet);
    println!("Sheet layout ({} row(s) per sheet):", rows.len());

    let mut position = 1;
    for (idx, cards_in_row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(*cards_in_row as usize);
        for _ in 0..*cards_in_row {
            let round = provisioning::round_for_position(position);
            let color = provisioning::ROUND_COLORS[(round - 1) as usize];
            cells.push(format!("C{position} (round {round}, {color})"));
            position += 1;
        }
        println!("  row {}: {}", idx + 1, cells.join("  "));
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("card_press=info,bingo_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => print_layout(&summary),
        Err(e) => {
            eprintln!("Provisioning failed: {e}");
            std::process::exit(1);
        }
    }
}

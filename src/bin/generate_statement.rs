use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rusqlite::{Connection, OpenFlags};
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use card_statement::{
    CardId, CustomerId, Error, StatementConfig, StatementSummary, generate_statement,
};

/// Generate a credit card statement from the card issuer's SQLite database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database with the customer, card, transaction
    /// and reward tables.
    #[arg(long)]
    db_path: PathBuf,

    /// The ID of the customer the statement is addressed to.
    #[arg(long)]
    customer_id: CustomerId,

    /// The ID of the customer's credit card.
    #[arg(long)]
    card_id: CardId,

    /// File path to write the statement document to, e.g. 'statements/statement.html'.
    #[arg(long, short)]
    output_path: PathBuf,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();
    let result = run(&args);
    let status = report(
        result,
        &args.output_path,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );

    ExitCode::from(status)
}

fn run(args: &Args) -> Result<StatementSummary, Error> {
    let connection = open_read_only(&args.db_path)?;

    let result = generate_statement(
        args.customer_id,
        args.card_id,
        &args.output_path,
        &connection,
        &StatementConfig::default(),
    );

    // The connection is released here whether or not generation succeeded.
    if let Err((_, error)) = connection.close() {
        tracing::warn!("Could not close the database at {:?}: {error}", args.db_path);
    }

    result
}

/// Print the outcome of a run and return the process exit status: 0 on
/// success, 1 on any error.
fn report(
    result: Result<StatementSummary, Error>,
    output_path: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    match result {
        Ok(summary) => {
            let output_path = output_path
                .canonicalize()
                .unwrap_or_else(|_| output_path.to_path_buf());

            let printed = print_summary(&summary, &output_path, out);
            if let Err(error) = printed {
                tracing::warn!("Could not print the statement summary: {error}");
            }

            0
        }
        Err(error) => {
            if let Err(write_error) = writeln!(err, "Error occurred: {error}") {
                tracing::warn!("Could not print the error \"{error}\": {write_error}");
            }

            1
        }
    }
}

fn print_summary(
    summary: &StatementSummary,
    output_path: &Path,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "Statement generated successfully!")?;
    writeln!(
        out,
        "New balance: {}, due {}",
        summary.new_balance, summary.due_date
    )?;
    writeln!(out, "Statement location: {}", output_path.display())
}

/// Open the database without creating it, since a missing file means the
/// path is wrong rather than that the store is empty.
fn open_read_only(db_path: &Path) -> Result<Connection, Error> {
    if !db_path.is_file() {
        return Err(Error::SqlError(rusqlite::Error::InvalidPath(
            db_path.to_path_buf(),
        )));
    }

    tracing::debug!("Opening database at {db_path:?}");

    Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(Error::SqlError)
}

fn setup_logging() {
    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    let env_filter = EnvFilter::builder()
        .with_default_directive(filter::LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(env_filter))
        .init();
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sdv_compare::client::{
    HttpCompareClient, SdvSession, load_document_from_path, render_actions, render_discrepancies,
    render_document_panel,
};

/// Compare a source document with a case report form through an SDV compare server
#[derive(Debug, Parser)]
#[command(name = "sdv-cli", version, about)]
struct Cli {
    /// Source document (JSON)
    source: PathBuf,

    /// Case report form (JSON)
    case_report: PathBuf,

    /// Base URL of the compare server
    #[arg(long, env = "SDV_SERVER", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Only display the documents
    #[arg(long)]
    no_compare: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut session = SdvSession::new();
    session.set_source(load_document_from_path(&cli.source));
    session.set_case_report(load_document_from_path(&cli.case_report));

    println!("{}", render_document_panel("Source Documentation", session.source()));
    println!("{}", render_document_panel("Case Report Form", session.case_report()));

    if !cli.no_compare && session.can_compare() {
        let transport = HttpCompareClient::new(&cli.server)?;
        session.compare(&transport).await;

        let findings = render_discrepancies(session.discrepancies());
        if !findings.is_empty() {
            println!("{findings}");
        }
    }

    print!("{}", render_actions(&session));
    Ok(())
}

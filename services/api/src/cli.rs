use crate::demo::{run_demo, run_screen_report, DemoArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use evalia::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Evalia Screening Service",
    about = "Run and demonstrate the applicant roster screening service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an applicant roster CSV and print the screening report
    Screen(ScreenArgs),
    /// Run a screening demo over built-in sample applicants
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Screen(args) => run_screen_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

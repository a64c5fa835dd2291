use std::process::ExitCode;

use mc_installer::build_info::BuildInfo;
use mc_installer::cli::Cli;
use mc_installer::runners;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse_args();

    if cli.version {
        return match runners::run_version(&BuildInfo::current()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                runners::report_fatal(&e);
                ExitCode::FAILURE
            }
        };
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("FATAL: Failed to create Tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(runners::run_install(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            runners::report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

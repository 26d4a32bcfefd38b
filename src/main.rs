use dateconv::application::ConvertFileService;
use dateconv::cli::{format_tag_list, Cli};
use dateconv::domain::DateConverter;
use dateconv::error::DateConvError;
use env_logger::Env;

/// Environment variable holding the log filter (env_logger syntax)
const LOG_ENV: &str = "DATECONV_LOG";

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();

    let cli = match Cli::parse_with_tags() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            // Usage errors also list the format tags
            let _ = e.print();
            eprint!("\n{}", format_tag_list());
            std::process::exit(DateConvError::Usage(e.to_string()).exit_code());
        }
    };

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DateConvError> {
    let converter = DateConverter::new(&cli.input_format, &cli.output_format)?;
    let service = ConvertFileService::new(converter);
    service.execute(&cli.input_file, &cli.output_file)?;
    Ok(())
}

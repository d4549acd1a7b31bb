use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;
use structopt_flags::LogLevel;

use vacuum_map::app::VacuumMapApp;
use vacuum_map::cli::Opt;

fn main() {
    let opt = Opt::from_args();

    TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let app = VacuumMapApp::new(opt.to_app_config());

    if let Err(err) = app.run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

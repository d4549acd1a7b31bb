use crate::layout::Size;
use std::path::PathBuf;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug)]
pub struct AppConfig {
    pub grid_size: usize,
    pub cell_size: u32,
    pub window: Size,
    pub map: Option<PathBuf>,
    pub font: Option<PathBuf>,
    pub vsync: bool,
    pub fullscreen: bool,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Vacuum Map",
    about = "Paint a vacuum/obstacle grid map, export it to JSON or PNG, load it back"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(short, long, default_value = "32", help = "Cells per grid side")]
    grid_size: usize,

    #[structopt(short, long, default_value = "15", help = "Cell edge length in pixels")]
    cell_size: u32,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "800x600",
        help = "Window size"
    )]
    window: Size,

    #[structopt(parse(from_os_str), short, long, help = "JSON map to load at startup")]
    map: Option<PathBuf>,

    #[structopt(parse(from_os_str), long, help = "TTF font used for on-screen labels")]
    font: Option<PathBuf>,

    #[structopt(long, help = "Turns on vsync")]
    vsync: bool,

    #[structopt(short, long, help = "Runs the application in full screen")]
    fullscreen: bool,
}

impl Opt {
    pub fn to_app_config(self) -> AppConfig {
        AppConfig {
            grid_size: self.grid_size,
            cell_size: self.cell_size,
            window: self.window,
            map: self.map,
            font: self.font,
            vsync: self.vsync,
            fullscreen: self.fullscreen,
        }
    }
}

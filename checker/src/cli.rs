use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(help = "The reference document (HTML)")]
    pub input: PathBuf,

    #[arg(
        long,
        value_name = "ID",
        default_value = dt_botapi::DEFAULT_CONTENT_ROOT_ID,
        help = "The id of the element holding the sections"
    )]
    pub content_root: String,

    #[arg(long, help = "Print the number of types and methods of every section")]
    pub summary: bool,
}

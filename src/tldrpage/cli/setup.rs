use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tldrpage", bin_name = "tldrpage", version)]
#[command(
    about = "Show short usage pages for command-line tools",
    long_about = None,
    after_help = "Examples:\n  \
        tldrpage tar               # show usage of tar\n  \
        tldrpage -l ja -p osx ls   # prefer Japanese, macOS pages\n  \
        tldrpage --edit tldrpage   # write your own page\n  \
        tldrpage --update          # download or refresh pages with git"
)]
pub struct Cli {
    /// Command to show the page for
    #[arg(value_name = "COMMAND")]
    pub name: Option<String>,

    /// Target platform directory (e.g. linux, osx, windows)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Preferred language as an ISO 639-1 code (e.g. ja, fr)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Upstream repository URL
    #[arg(short, long, value_name = "URL")]
    pub remote: Option<String>,

    /// Download or update pages from the upstream repository with git
    #[arg(short, long, conflicts_with_all = ["name", "edit", "dirs"])]
    pub update: bool,

    /// Edit your own page for COMMAND with $EDITOR
    #[arg(short, long, value_name = "COMMAND", conflicts_with_all = ["name", "dirs"])]
    pub edit: Option<String>,

    /// Print the candidate directories with their index
    #[arg(long)]
    pub dirs: bool,

    /// Search only the candidate directory with this index (see --dirs)
    #[arg(long, value_name = "INDEX")]
    pub index: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ferry")]
#[command(about = "Copy files and directory trees for build pipelines")]
#[command(after_help = "Exit status is 0 on success and 1 on a fatal error; \
fatal errors print to stderr with an errno-style prefix (e.g. \"ENOENT: ...\").")]
pub struct Cli {
    /// Source file, symlink, or directory
    pub source: String,
    /// Destination path (an existing directory receives source's basename)
    pub destination: String,
    /// Recurse into directory sources
    #[arg(long, short = 'r')]
    pub recursive: bool,
    /// Overwrite existing destination files (the default behavior)
    #[arg(long, short = 'f')]
    pub force: bool,
    /// Never overwrite existing destination files; overrides --force
    #[arg(long, short = 'n')]
    pub no_clobber: bool,
    /// Mirror source timestamps onto copied files
    #[arg(long, short = 'p')]
    pub preserve_times: bool,
    /// Log and skip entries that fail during a recursive copy
    #[arg(long)]
    pub continue_on_error: bool,
    /// Number of retries for failed filesystem operations (0-255, default: 0)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8))]
    pub retries: u8,
    /// Resolve and report without copying anything
    #[arg(long)]
    pub dry_run: bool,
    /// Report each copied entry on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
    /// Print the outcome as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

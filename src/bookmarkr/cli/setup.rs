use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bookmarkr",
    bin_name = "bookmarkr",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Track the books you read, one page at a time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Books,
    Quotes,
    Views,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Books => "Book Commands:",
            CommandGroup::Quotes => "Quotes:",
            CommandGroup::Views => "Views:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "search" | "list" | "progress" | "edit" | "delete" => {
                Some(CommandGroup::Books)
            }
            "quote" => Some(CommandGroup::Quotes),
            "home" | "genres" | "stats" | "calendar" | "day" => Some(CommandGroup::Views),
            "doctor" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Books,
            CommandGroup::Quotes,
            CommandGroup::Views,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("bookmarkr {version}\n"));
    output.push_str("Track the books you read, one page at a time\n");
    output.push('\n');
    output.push_str("Usage: bookmarkr [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("      --no-color   Disable colored output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, using clap's built-in rendering
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Books(c) => match c {
            BookCommands::Add { .. } => "add",
            BookCommands::Search { .. } => "search",
            BookCommands::List { .. } => "list",
            BookCommands::Progress { .. } => "progress",
            BookCommands::Edit { .. } => "edit",
            BookCommands::Delete { .. } => "delete",
        },
        Commands::Quote { .. } => "quote",
        Commands::Views(c) => match c {
            ViewCommands::Home => "home",
            ViewCommands::Genres => "genres",
            ViewCommands::Stats => "stats",
            ViewCommands::Calendar { .. } => "calendar",
            ViewCommands::Day { .. } => "day",
        },
        Commands::Misc(c) => match c {
            MiscCommands::Doctor => "doctor",
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Books(BookCommands),

    /// Save, list and manage quotes
    #[command(alias = "q", display_order = 20)]
    Quote {
        #[command(subcommand)]
        action: QuoteCommands,
    },

    #[command(flatten)]
    Views(ViewCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Add a book by hand, or from a catalog search with --from-catalog
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Title words (joined with spaces)
        #[arg(num_args = 0.., required_unless_present = "from_catalog")]
        title: Vec<String>,

        /// Author
        #[arg(short, long, required_unless_present = "from_catalog")]
        author: Option<String>,

        /// Total number of pages
        #[arg(short, long, required_unless_present = "from_catalog")]
        pages: Option<u32>,

        /// Page you are on
        #[arg(long, default_value_t = 0)]
        current: u32,

        /// reading, finished or want
        #[arg(short, long, default_value = "reading")]
        status: String,

        /// Genre (e.g. fiction, self-help)
        #[arg(short, long)]
        genre: Option<String>,

        /// Cover image file or URL
        #[arg(long)]
        cover: Option<String>,

        /// Search the catalog and add one of its results
        #[arg(long, value_name = "QUERY", conflicts_with_all = ["author", "pages"])]
        from_catalog: Option<String>,

        /// Which catalog result to add (1-based)
        #[arg(long, default_value_t = 1, requires = "from_catalog")]
        pick: usize,
    },

    /// Search the book catalog
    #[command(display_order = 2)]
    Search {
        /// Search words
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List your library
    #[command(alias = "ls", display_order = 3)]
    List {
        /// all, reading, finished or want
        #[arg(short, long, default_value = "all")]
        status: String,

        /// Only books of this genre
        #[arg(short, long)]
        genre: Option<String>,
    },

    /// Record the page you reached in a book
    #[command(alias = "p", display_order = 4)]
    Progress {
        /// Book index or title words
        #[arg(required = true, num_args = 1..)]
        book: Vec<String>,

        /// Page reached
        #[arg(short, long)]
        page: u32,
    },

    /// Edit a book's details
    #[command(alias = "e", display_order = 5)]
    Edit {
        /// Book index or title words
        #[arg(required = true, num_args = 1..)]
        book: Vec<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        /// Total number of pages
        #[arg(long)]
        pages: Option<u32>,

        /// Page you are on
        #[arg(long)]
        page: Option<u32>,

        /// reading, finished or want
        #[arg(short, long)]
        status: Option<String>,

        /// Genre, or "none" to clear it
        #[arg(short, long)]
        genre: Option<String>,

        /// Cover image file or URL
        #[arg(long)]
        cover: Option<String>,
    },

    /// Delete a book (its quotes are kept)
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Book index or title words
        #[arg(required = true, num_args = 1..)]
        book: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// Save a quote from a book
    Add {
        /// Book index or title words
        #[arg(required = true, num_args = 1..)]
        book: Vec<String>,

        /// The quote itself
        #[arg(short, long)]
        text: String,

        /// Page the quote is on
        #[arg(short, long)]
        page: Option<u32>,

        /// Mark as favorite
        #[arg(short, long)]
        favorite: bool,
    },

    /// List saved quotes
    #[command(alias = "ls")]
    List {
        /// Only favorites
        #[arg(short, long)]
        favorites: bool,
    },

    /// Toggle a quote's favorite mark
    Fav { index: usize },

    /// Delete a quote
    #[command(alias = "rm")]
    Delete { index: usize },
}

#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    /// Dashboard: greeting, totals and books in progress
    #[command(display_order = 30)]
    Home,

    /// Number of books per genre
    #[command(display_order = 31)]
    Genres,

    /// Reading statistics
    #[command(display_order = 32)]
    Stats,

    /// Reading activity calendar
    #[command(alias = "cal", display_order = 33)]
    Calendar {
        /// Month as YYYY-MM (defaults to this month)
        month: Option<String>,
    },

    /// What you read on a given day
    #[command(display_order = 34)]
    Day {
        /// Date as YYYY-MM-DD (defaults to today)
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Check and repair the activity ledger
    #[command(display_order = 40)]
    Doctor,

    /// Get or set configuration
    #[command(display_order = 41)]
    Config {
        /// Configuration key (api-key, max-results)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for bookmarkr or a subcommand
    #[command(display_order = 42)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

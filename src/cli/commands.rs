use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sl", about = concat!("[/] slate v", env!("CARGO_PKG_VERSION"), " - plan your days, pin your notes"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different workspace directory
    #[arg(short = 'C', long = "workspace-dir", global = true)]
    pub workspace_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new slate workspace in the current directory
    Init(InitArgs),
    /// Add a task
    Add(AddArgs),
    /// Flip a task's completion
    Toggle(ToggleArgs),
    /// Remove a task
    Rm(RmArgs),
    /// Tasks due today
    Today,
    /// The four date buckets: today, tomorrow, this week, later
    Upcoming,
    /// The Monday-start week grid
    Week,
    /// Tasks in the current month, grouped by day
    Month,
    /// List sticky notes
    Notes,
    /// Manage sticky notes
    Note(NoteCmd),
    /// Show or set the dark-mode flag
    Darkmode(DarkModeArgs),
    /// Sign in against the workspace user list
    Signin(SignInArgs),
    /// Register a new user in the workspace config
    Signup(SignUpArgs),
    /// Sign out
    Signout,
    /// Show who is signed in
    Whoami,
}

// ---------------------------------------------------------------------------
// Workspace / task args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Workspace name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Reinitialize even if slate/ already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Due date as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task id
    pub id: u64,
}

// ---------------------------------------------------------------------------
// Sticky-note args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct NoteCmd {
    #[command(subcommand)]
    pub command: NoteCommands,
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a sticky note
    Add(NoteAddArgs),
    /// Replace a note's title and items
    Edit(NoteEditArgs),
    /// Delete a note
    Rm(NoteRmArgs),
    /// Check or uncheck one item on a note
    Check(NoteCheckArgs),
}

#[derive(Args)]
pub struct NoteAddArgs {
    /// Note title
    pub title: String,
    /// Item line (repeatable)
    #[arg(short = 'i', long = "item")]
    pub items: Vec<String>,
}

#[derive(Args)]
pub struct NoteEditArgs {
    /// Note id
    pub id: u64,
    /// New title
    pub title: String,
    /// New item line (repeatable; replaces all items)
    #[arg(short = 'i', long = "item")]
    pub items: Vec<String>,
}

#[derive(Args)]
pub struct NoteRmArgs {
    /// Note id
    pub id: u64,
}

#[derive(Args)]
pub struct NoteCheckArgs {
    /// Note id
    pub id: u64,
    /// Item position, 1-based
    pub item: usize,
}

// ---------------------------------------------------------------------------
// Prefs / auth args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct DarkModeArgs {
    /// "on" or "off"; omit to print the current value
    pub state: Option<String>,
}

#[derive(Args)]
pub struct SignInArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Args)]
pub struct SignUpArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Must match --password
    #[arg(long)]
    pub confirm: String,
}

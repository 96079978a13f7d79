mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Local, NaiveDate};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::workspace::{self, Workspace, WorkspaceError};
use crate::model::task::Task;
use crate::ops::auth::{self, SignUpForm};
use crate::ops::buckets;
use crate::store::note_store::NoteStore;
use crate::store::prefs;
use crate::store::storage::FileStorage;
use crate::store::task_store::TaskStore;

/// Global override for workspace directory (set by -C flag)
static WORKSPACE_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for load_workspace_cwd()
    if let Some(ref dir) = cli.workspace_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        WORKSPACE_DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        // Init does not require a workspace context
        Commands::Init(args) => cmd_init(args),

        // Task write commands
        Commands::Add(args) => cmd_add(args, json),
        Commands::Toggle(args) => cmd_toggle(args),
        Commands::Rm(args) => cmd_rm(args),

        // Task views
        Commands::Today => cmd_today(json),
        Commands::Upcoming => cmd_upcoming(json),
        Commands::Week => cmd_week(json),
        Commands::Month => cmd_month(json),

        // Sticky notes
        Commands::Notes => cmd_notes(json),
        Commands::Note(cmd) => match cmd.command {
            NoteCommands::Add(args) => cmd_note_add(args, json),
            NoteCommands::Edit(args) => cmd_note_edit(args),
            NoteCommands::Rm(args) => cmd_note_rm(args),
            NoteCommands::Check(args) => cmd_note_check(args),
        },

        // Prefs / auth
        Commands::Darkmode(args) => cmd_darkmode(args),
        Commands::Signin(args) => cmd_signin(args),
        Commands::Signup(args) => cmd_signup(args),
        Commands::Signout => cmd_signout(),
        Commands::Whoami => cmd_whoami(json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_workspace_cwd() -> Result<Workspace, WorkspaceError> {
    let start = match WORKSPACE_DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(WorkspaceError::IoError)?,
    };
    let root = workspace::discover_workspace(&start)?;
    workspace::load_workspace(&root)
}

fn open_tasks(ws: &Workspace) -> TaskStore<FileStorage> {
    TaskStore::open(ws.storage())
}

fn open_notes(ws: &Workspace) -> NoteStore<FileStorage> {
    NoteStore::open(ws.storage())
}

/// "Today" is computed once per command invocation
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", s))
}

// ---------------------------------------------------------------------------
// Task write handlers
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let date = match args.date {
        Some(ref s) => parse_date(s)?,
        None => today(),
    };
    let mut store = open_tasks(&ws);
    // The store itself treats a blank title as a silent no-op; the CLI
    // reports it
    match store.add(&args.title, date) {
        Some(task) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&task_to_json(task))?);
            } else {
                println!("added: {}", task_line(task));
            }
            Ok(())
        }
        None => Err("task title cannot be empty".into()),
    }
}

fn cmd_toggle(args: ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let mut store = open_tasks(&ws);
    if store.get(args.id).is_none() {
        return Err(format!("no task with id {}", args.id).into());
    }
    store.toggle(args.id);
    let task = store.get(args.id).ok_or("task vanished during toggle")?;
    println!("{}", task_line(task));
    Ok(())
}

fn cmd_rm(args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let mut store = open_tasks(&ws);
    let Some(task) = store.get(args.id) else {
        return Err(format!("no task with id {}", args.id).into());
    };
    let title = task.title.clone();
    store.remove(args.id);
    println!("removed: {}", title);
    Ok(())
}

// ---------------------------------------------------------------------------
// Task view handlers
// ---------------------------------------------------------------------------

fn cmd_today(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let store = open_tasks(&ws);
    let today = today();
    let tasks: Vec<&Task> = store.filter_by_date(|d| d == today).collect();

    if json {
        let output = TaskListJson {
            count: tasks.len(),
            tasks: tasks_to_json(tasks.iter().copied()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Today, {} - {}", today, task_count(tasks.len()));
        print_task_lines(&tasks);
    }
    Ok(())
}

fn cmd_upcoming(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let horizon = ws.config.settings.horizon_days;
    let store = open_tasks(&ws);
    let split = buckets::partition(store.tasks(), today(), horizon);

    if json {
        let output = UpcomingJson {
            today: tasks_to_json(split.today.iter().copied()),
            tomorrow: tasks_to_json(split.tomorrow.iter().copied()),
            this_week: tasks_to_json(split.this_week.iter().copied()),
            later: tasks_to_json(split.later.iter().copied()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (label, bucket) in [
            ("Today", &split.today),
            ("Tomorrow", &split.tomorrow),
            ("This Week", &split.this_week),
            ("Later", &split.later),
        ] {
            println!("{}:", label);
            print_task_lines(bucket);
        }
    }
    Ok(())
}

fn cmd_week(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let store = open_tasks(&ws);
    let today = today();
    let grid = buckets::week_grid(store.tasks(), today);

    if json {
        let output: Vec<DayJson> = grid
            .iter()
            .map(|(date, tasks)| DayJson {
                date: date.to_string(),
                day: date.format("%A").to_string(),
                tasks: tasks_to_json(tasks.iter().copied()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let total: usize = grid.values().map(Vec::len).sum();
        println!("This Week - {}", task_count(total));
        for (date, tasks) in &grid {
            let marker = if *date == today { " <- today" } else { "" };
            println!("{} {}{}", date.format("%A"), date, marker);
            print_task_lines(tasks);
        }
    }
    Ok(())
}

fn cmd_month(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let store = open_tasks(&ws);
    let today = today();
    let grid = buckets::month_grid(store.tasks(), today);

    if json {
        let output: Vec<DayJson> = grid
            .iter()
            .map(|(date, tasks)| DayJson {
                date: date.to_string(),
                day: date.format("%A").to_string(),
                tasks: tasks_to_json(tasks.iter().copied()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let total: usize = grid.values().map(Vec::len).sum();
        println!("{} - {}", today.format("%B %Y"), task_count(total));
        if grid.is_empty() {
            println!("  (no tasks)");
        }
        for (date, tasks) in &grid {
            println!("{} {}", date.format("%A"), date);
            print_task_lines(tasks);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Sticky-note handlers
// ---------------------------------------------------------------------------

fn cmd_notes(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let store = open_notes(&ws);

    if json {
        let output: Vec<NoteJson> = store.notes().iter().map(note_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if store.notes().is_empty() {
        println!("(no sticky notes)");
    } else {
        for note in store.notes() {
            println!("{}  {} [{}]", note.id, note.title, note.color);
            for item in &note.items {
                println!("  - {}", item);
            }
        }
    }
    Ok(())
}

fn cmd_note_add(args: NoteAddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let mut store = open_notes(&ws);
    match store.add(&args.title, args.items) {
        Some(note) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&note_to_json(note))?);
            } else {
                println!("added note: {} [{}]", note.title, note.id);
            }
            Ok(())
        }
        None => Err("note title cannot be empty".into()),
    }
}

fn cmd_note_edit(args: NoteEditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let mut store = open_notes(&ws);
    if store.get(args.id).is_none() {
        return Err(format!("no note with id {}", args.id).into());
    }
    if !store.edit(args.id, &args.title, args.items) {
        return Err("note title cannot be empty".into());
    }
    println!("updated note {}", args.id);
    Ok(())
}

fn cmd_note_rm(args: NoteRmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let mut store = open_notes(&ws);
    let Some(note) = store.get(args.id) else {
        return Err(format!("no note with id {}", args.id).into());
    };
    let title = note.title.clone();
    store.remove(args.id);
    println!("removed note: {}", title);
    Ok(())
}

fn cmd_note_check(args: NoteCheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let mut store = open_notes(&ws);
    let Some(note) = store.get(args.id) else {
        return Err(format!("no note with id {}", args.id).into());
    };
    if args.item == 0 || args.item > note.items.len() {
        return Err(format!(
            "note {} has {} item(s); no item {}",
            args.id,
            note.items.len(),
            args.item
        )
        .into());
    }
    store.toggle_item(args.id, args.item - 1);
    let note = store.get(args.id).ok_or("note vanished during check")?;
    println!("{}", note.items[args.item - 1]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Prefs / auth handlers
// ---------------------------------------------------------------------------

fn cmd_darkmode(args: DarkModeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let mut storage = ws.storage();
    match args.state.as_deref() {
        None => {
            let on = prefs::dark_mode(&storage);
            println!("darkmode: {}", if on { "on" } else { "off" });
        }
        Some("on") => {
            prefs::set_dark_mode(&mut storage, true);
            println!("darkmode: on");
        }
        Some("off") => {
            prefs::set_dark_mode(&mut storage, false);
            println!("darkmode: off");
        }
        Some(other) => return Err(format!("expected 'on' or 'off', got '{}'", other).into()),
    }
    Ok(())
}

fn cmd_signin(args: SignInArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let user = auth::sign_in(&ws.config.users, &args.email, &args.password)?;
    let name = user.name.clone();
    let email = user.email.clone();
    let mut storage = ws.storage();
    prefs::set_session(&mut storage, &email);
    println!("signed in as {} <{}>", name, email);
    Ok(())
}

fn cmd_signup(args: SignUpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let form = SignUpForm {
        name: args.name,
        email: args.email,
        password: args.password,
        confirm: args.confirm,
    };
    let user = auth::validate_sign_up(&form, &ws.config.users)?;

    let (_config, mut doc) = config_io::read_config(&ws.slate_dir)?;
    config_io::add_user_to_config(&mut doc, &user);
    config_io::write_config(&ws.slate_dir, &doc)?;

    let mut storage = ws.storage();
    prefs::set_session(&mut storage, &user.email);
    println!("welcome, {} <{}>", user.name, user.email);
    Ok(())
}

fn cmd_signout() -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let mut storage = ws.storage();
    prefs::clear_session(&mut storage);
    println!("signed out");
    Ok(())
}

fn cmd_whoami(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = load_workspace_cwd()?;
    let storage = ws.storage();
    let email = prefs::session(&storage);
    let user = email
        .as_deref()
        .and_then(|e| ws.config.users.iter().find(|u| u.email == e));

    if json {
        let output = WhoamiJson {
            signed_in: email.is_some(),
            name: user.map(|u| u.name.clone()),
            email: email.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match (user, email) {
            (Some(user), _) => println!("{} <{}>", user.name, user.email),
            (None, Some(email)) => println!("<{}>", email),
            (None, None) => println!("(not signed in)"),
        }
    }
    Ok(())
}

//! CLI frontend for Roll Keeper: dice rolls, dice pools, and ICRPG character sheets.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "rk",
    about = "Roll Keeper: a dice roller and ICRPG character sheet keeper",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll one kind of die, optionally several times, and print the sum
    Roll {
        /// Number of faces (2 is a coin)
        sides: u32,

        /// How many dice to roll
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll a pool of dice and reduce it to one result
    Pool {
        /// Dice to roll, e.g. `2d6 d20 coin`
        #[arg(required = true)]
        dice: Vec<String>,

        /// Value added to numeric results
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        bonus: i64,

        /// How to combine the dice: sum, high, low
        #[arg(short, long, default_value = "sum")]
        mode: String,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive roller: build a pool, then roll it repeatedly
    Roller {
        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage ICRPG character sheets
    Sheet {
        /// Sheet store file
        #[arg(long, global = true, default_value = rk_sheet::config::DEFAULT_STORE_FILE)]
        store: PathBuf,

        /// RNG seed for sheet rolls
        #[arg(long, global = true)]
        seed: Option<u64>,

        #[command(subcommand)]
        command: SheetCommand,
    },
}

#[derive(Subcommand)]
enum SheetCommand {
    /// Create a new character
    New {
        /// Character name
        name: String,

        /// Character class
        #[arg(short, long, default_value = "")]
        class: String,
    },

    /// List every stored character
    List,

    /// Show a character sheet
    Show {
        /// Character name (case-insensitive)
        name: String,
    },

    /// Delete a character
    Delete {
        /// Character name (case-insensitive)
        name: String,
    },

    /// Set a numeric field, e.g. `str`, `con-loot`, `guns`, `hp`, `max-hp`, `coin`
    Set {
        /// Character name (case-insensitive)
        name: String,

        /// Field to set
        field: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Roll a d20 ability check
    Check {
        /// Character name (case-insensitive)
        name: String,

        /// Ability, e.g. `str` or `wisdom`
        ability: String,
    },

    /// Roll an effort die
    Effort {
        /// Character name (case-insensitive)
        name: String,

        /// Effort: basic, weapons, guns, magic, ultimate
        effort: String,
    },

    /// Roll a d20 armor check
    Armor {
        /// Character name (case-insensitive)
        name: String,
    },

    /// Roll a death saving throw
    DeathSave {
        /// Character name (case-insensitive)
        name: String,
    },

    /// Add or remove mastery points
    Mastery {
        /// Character name (case-insensitive)
        name: String,

        /// Points to add (negative to remove)
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },

    /// Add an entry to one of the text lists
    Note {
        /// Character name (case-insensitive)
        name: String,

        /// Entry text
        text: String,

        /// List to add to: abilities, powers, augments, notes
        #[arg(short, long, default_value = "notes")]
        list: String,
    },

    /// Add a piece of gear (carried, not equipped)
    Gear {
        /// Character name (case-insensitive)
        name: String,

        /// Item description
        text: String,
    },

    /// Toggle whether a piece of gear is equipped
    Equip {
        /// Character name (case-insensitive)
        name: String,

        /// Position of the item in the loot list (1-based)
        index: usize,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rk=warn,rk_dice=warn,rk_sheet=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { sides, count, seed } => commands::roll::run(sides, count, seed),
        Commands::Pool {
            dice,
            bonus,
            mode,
            seed,
            json,
        } => commands::pool::run(&dice, bonus, &mode, seed, json),
        Commands::Roller { seed } => commands::roller::run(seed),
        Commands::Sheet {
            store,
            seed,
            command,
        } => run_sheet(commands::sheet::SheetContext::new(&store, seed), command),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_sheet(mut ctx: commands::sheet::SheetContext, command: SheetCommand) -> Result<(), String> {
    use commands::sheet;

    match command {
        SheetCommand::New { name, class } => sheet::new(&ctx, &name, &class),
        SheetCommand::List => sheet::list(&ctx),
        SheetCommand::Show { name } => sheet::show(&ctx, &name),
        SheetCommand::Delete { name } => sheet::delete(&ctx, &name),
        SheetCommand::Set { name, field, value } => sheet::set(&mut ctx, &name, &field, &value),
        SheetCommand::Check { name, ability } => sheet::check(&mut ctx, &name, &ability),
        SheetCommand::Effort { name, effort } => sheet::effort(&mut ctx, &name, &effort),
        SheetCommand::Armor { name } => sheet::armor(&mut ctx, &name),
        SheetCommand::DeathSave { name } => sheet::death_save(&mut ctx, &name),
        SheetCommand::Mastery { name, delta } => sheet::mastery(&ctx, &name, delta),
        SheetCommand::Note { name, text, list } => sheet::note(&ctx, &name, &list, &text),
        SheetCommand::Gear { name, text } => sheet::gear(&ctx, &name, &text),
        SheetCommand::Equip { name, index } => sheet::equip(&ctx, &name, index),
    }
}

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crypto_heroes::{
    GameConfig, GameError, GameState, Hero, handle_error,
    report::{render_hero, write_battle},
};

#[derive(Parser, Debug)]
#[command(name = "crypto_heroes")]
#[command(about = "Mint heroes and simulate battles against AI opponents", long_about = None)]
struct Cli {
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Name of a hero to mint (repeatable); a random name is used when none is given
    #[arg(long = "hero")]
    heroes: Vec<String>,

    /// Fight only the opponent with this name
    #[arg(long)]
    opponent: Option<String>,

    /// Battles per minted hero
    #[arg(long, default_value_t = 1)]
    battles: u32,

    /// Print battles as JSON instead of text
    #[arg(long, default_value = "false")]
    json: bool,

    /// Keep the simulated transaction delays
    #[arg(long, default_value = "false")]
    latency: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = if self.latency {
            GameConfig::default()
        } else {
            GameConfig::instant()
        };
        config.seed = self.seed;
        config
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = cli.config();
    info!(latency = cli.latency, seed = ?config.seed, "starting session");

    run(&cli, config).map_err(|err| {
        let message = handle_error(&err);
        anyhow::Error::new(err).context(message)
    })
}

fn run(cli: &Cli, config: GameConfig) -> Result<(), GameError> {
    let mut out = io::stdout().lock();
    let mut state = GameState::new(config);
    let address = state.connect_wallet()?.address.clone();
    writeln!(out, "Wallet {address} connected (seed {})", state.seed())?;

    let names = if cli.heroes.is_empty() {
        vec![state.random_hero_name()]
    } else {
        cli.heroes.clone()
    };

    let mut minted: Vec<Hero> = Vec::with_capacity(names.len());
    for name in &names {
        minted.push(state.mint_hero(name)?);
    }

    let opponents: Vec<String> = state
        .opponents()
        .into_iter()
        .filter(|h| cli.opponent.as_deref().is_none_or(|name| h.name == name))
        .map(|h| h.id.clone())
        .collect();
    if opponents.is_empty() {
        return Err(GameError::HeroNotFound(
            cli.opponent.clone().unwrap_or_default(),
        ));
    }

    for (i, hero) in minted.iter().enumerate() {
        for n in 0..cli.battles as usize {
            let opponent = &opponents[(i + n) % opponents.len()];
            let battle = state.initiate_battle(&hero.id, opponent)?;
            write_battle(&mut out, &battle, cli.json)?;
        }
    }

    if !cli.json {
        for hero in state.my_heroes() {
            writeln!(out, "{}\n", render_hero(hero))?;
        }
    }
    out.flush()?;
    Ok(())
}

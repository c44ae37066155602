use color_eyre::eyre::{
    Result,
    WrapErr,
    eyre,
};
use one_armed_bandit::{
    MachineConfig,
    RandomIcons,
    SlotMachine,
    config::expand_path,
    driver,
    presenter::LogPresenter,
};
use std::path::PathBuf;

mod app;
mod logging;
mod ui;

#[derive(Debug)]
struct CliArgs {
    config: MachineConfig,
    seed: Option<u64>,
    simulate: Option<u32>,
    log_dir: PathBuf,
}

fn print_usage_and_exit() -> ! {
    println!(
        "Usage: one-armed-bandit [--config <path>] [--fruits <n>] [--repetitions <n>]\n\
         [--delay-ms <n>] [--seed <n>] [--simulate <n>] [--log-dir <path>]\n\
         \n\
         Flags:\n\
           --config <path>     JSON file with fruit_count, total_repetitions, frame_delay_ms\n\
           --fruits <n>        Number of fruits on the reels, 1-6 (default {})\n\
           --repetitions <n>   Spin length, {}-{} (default {})\n\
           --delay-ms <n>      Delay between animation frames (default {})\n\
           --seed <n>          Seed the reels for a reproducible game\n\
           --simulate <n>      Play n spins without the terminal UI and print statistics\n\
           --log-dir <path>    Where log files go (default {})",
        one_armed_bandit::config::DEFAULT_FRUIT_COUNT,
        one_armed_bandit::config::MIN_TOTAL_REPETITIONS,
        one_armed_bandit::config::MAX_TOTAL_REPETITIONS,
        one_armed_bandit::config::DEFAULT_TOTAL_REPETITIONS,
        one_armed_bandit::config::DEFAULT_FRAME_DELAY_MS,
        logging::DEFAULT_LOG_DIR,
    );
    std::process::exit(0);
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = value.ok_or_else(|| eyre!("{flag} requires a numeric argument"))?;
    value
        .parse()
        .map_err(|_| eyre!("{flag} expects a number, got {value:?}"))
}

fn parse_cli_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut fruits: Option<u8> = None;
    let mut repetitions: Option<u32> = None;
    let mut delay_ms: Option<u64> = None;
    let mut seed: Option<u64> = None;
    let mut simulate: Option<u32> = None;
    let mut log_dir: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| eyre!("--config requires a path argument"))?;
                if config_path.is_some() {
                    return Err(eyre!("--config may only be specified once"));
                }
                config_path = Some(expand_path(&path));
            }
            "--fruits" => fruits = Some(parse_number("--fruits", args.next())?),
            "--repetitions" => {
                repetitions = Some(parse_number("--repetitions", args.next())?)
            }
            "--delay-ms" => delay_ms = Some(parse_number("--delay-ms", args.next())?),
            "--seed" => seed = Some(parse_number("--seed", args.next())?),
            "--simulate" => simulate = Some(parse_number("--simulate", args.next())?),
            "--log-dir" => {
                let dir = args
                    .next()
                    .ok_or_else(|| eyre!("--log-dir requires a path argument"))?;
                log_dir = Some(expand_path(&dir));
            }
            "--help" | "-h" => print_usage_and_exit(),
            other => return Err(eyre!("Unknown argument: {other}")),
        }
    }

    let mut config = match config_path {
        Some(path) => MachineConfig::load(&path)?,
        None => MachineConfig::default(),
    };
    if let Some(n) = fruits {
        config.fruit_count = n;
    }
    if let Some(n) = repetitions {
        config.total_repetitions = n;
    }
    if let Some(n) = delay_ms {
        config.frame_delay_ms = n;
    }
    config.validate()?;

    Ok(CliArgs {
        config,
        seed,
        simulate,
        log_dir: log_dir.unwrap_or_else(|| PathBuf::from(logging::DEFAULT_LOG_DIR)),
    })
}

/// Installs color-eyre and restores the terminal before a panic report is
/// printed, so a panic inside the UI does not leave the shell in raw mode.
fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;
    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(err) = ui::terminal_exit() {
            eprintln!("failed to restore terminal: {err}");
        }
        panic_hook(info);
    }));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    install_hooks()?;
    let args = parse_cli_args()?;
    let _log_guard = logging::init_tracing(&args.log_dir)?;
    tracing::info!(config = ?args.config, seed = ?args.seed, "starting one-armed bandit");

    let icons = match args.seed {
        Some(seed) => RandomIcons::seeded(seed),
        None => RandomIcons::from_os_rng(),
    };

    let stats = match args.simulate {
        Some(sessions) => {
            let mut machine = SlotMachine::new(args.config, icons, LogPresenter::default())
                .wrap_err("invalid machine configuration")?;
            driver::run_sessions(&mut machine, sessions).await;
            *machine.stats()
        }
        None => app::run_app(args.config, icons).await?,
    };
    println!("{stats}");
    Ok(())
}

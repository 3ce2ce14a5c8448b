use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gridreveal", version)]
struct Cli {
    /// Log grid decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the open and close timelines for one tile as JSON.
    Plan(PlanArgs),
    /// Replay a script of user events and print the state after each step.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct PageSource {
    /// Page fixture JSON.
    #[arg(long)]
    page: Option<PathBuf>,

    /// Use the built-in demo gallery with this many tiles.
    #[arg(long)]
    demo: Option<usize>,
}

#[derive(Args, Debug)]
struct Common {
    #[command(flatten)]
    source: PageSource,

    /// Nav slots in the demo gallery.
    #[arg(long, default_value_t = 6)]
    slots: usize,

    /// Viewport width of the demo gallery.
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Viewport height of the demo gallery.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Grid configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    common: Common,

    /// Tile index (0-based, document order).
    #[arg(long)]
    item: usize,

    /// Seed for random nav offsets.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    common: Common,

    /// Script JSON.
    #[arg(long)]
    script: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_json_file(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("open {what} '{}'", path.display()))
}

fn load_page(common: &Common) -> anyhow::Result<gridreveal::MemoryPage> {
    let fixture = match (&common.source.page, common.source.demo) {
        (Some(path), _) => {
            let raw = read_json_file(path, "page fixture")?;
            gridreveal::PageFixture::from_json_str(&raw)
                .with_context(|| format!("parse page fixture '{}'", path.display()))?
        }
        (None, Some(items)) => {
            let fixture = gridreveal::demo_fixture(
                items,
                common.slots,
                gridreveal::Size::new(common.width, common.height),
            );
            fixture.validate()?;
            fixture
        }
        (None, None) => anyhow::bail!("either --page or --demo is required"),
    };
    Ok(fixture.build())
}

fn load_config(common: &Common) -> anyhow::Result<gridreveal::GridConfig> {
    let Some(path) = &common.config else {
        return Ok(gridreveal::GridConfig::default());
    };
    let raw = read_json_file(path, "config")?;
    gridreveal::GridConfig::from_json_str(&raw)
        .with_context(|| format!("parse config '{}'", path.display()))
}

#[derive(serde::Serialize)]
struct TimelineDump {
    timeline: gridreveal::Timeline,
    schedule: gridreveal::Schedule,
}

impl TimelineDump {
    fn of(session: &gridreveal::HeadlessSession) -> anyhow::Result<Self> {
        let timeline = session
            .grid()
            .tweener()
            .last_played()
            .cloned()
            .context("no timeline was played")?;
        let schedule = timeline.schedule()?;
        Ok(Self { timeline, schedule })
    }
}

#[derive(serde::Serialize)]
struct PlanDump {
    item: usize,
    docked: Vec<usize>,
    remaining: Vec<usize>,
    open: TimelineDump,
    close: TimelineDump,
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let page = load_page(&args.common)?;
    let config = load_config(&args.common)?;
    let mut session = gridreveal::HeadlessSession::new(page, config, args.seed)?;

    let outcome = session.dispatch(gridreveal::GridEvent::ItemClick(args.item))?;
    if outcome != gridreveal::Outcome::Applied {
        anyhow::bail!("tile {} could not be opened", args.item);
    }
    let open = TimelineDump::of(&session)?;
    let docked = session.grid().docked_items();
    let remaining = session.grid().remaining_items();
    session.settle()?;

    session.dispatch(gridreveal::GridEvent::BackClick)?;
    let close = TimelineDump::of(&session)?;
    session.settle()?;

    let dump = PlanDump {
        item: args.item,
        docked,
        remaining,
        open,
        close,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&dump).context("serialize plan")?
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let page = load_page(&args.common)?;
    let config = load_config(&args.common)?;
    let raw = read_json_file(&args.script, "script")?;
    let script = gridreveal::Script::from_json_str(&raw)
        .with_context(|| format!("parse script '{}'", args.script.display()))?;

    let mut session = gridreveal::HeadlessSession::new(page, config, script.seed)?;
    let records = session.run(&script)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&records).context("serialize state log")?
    );
    eprintln!("ran {} steps", records.len());
    Ok(())
}

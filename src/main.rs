use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use molscope::builder::molecule_from_formula;
use molscope::color::ColorScheme;
use molscope::options::{Quality, ViewMode};
use molscope::scene::{build_molecule_scene, export_scene, Scene};
use molscope::store::StructureStore;
use molscope::{MolscopeError, Options, ViewState};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Build 3D scenes for sample proteins and small molecules."
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the sample structures.
    List,
    /// Print the info-panel summary of a structure.
    Info {
        /// Structure identifier, e.g. 1cbn.
        id: String,
    },
    /// Build the scene for a structure.
    Show(ShowArgs),
    /// Build a small-molecule scene from a preset or formula.
    Molecule {
        /// Formula such as H2O or C3H8.
        formula: String,
        /// Write the scene as JSON into this directory.
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },
    /// Print the JSON schema of the view options.
    Schema,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Structure identifier, e.g. 1cbn.
    id: String,

    /// View options preset (TOML). Flags below override it.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// cartoon, ball-and-stick, space-filling or surface.
    #[arg(long)]
    mode: Option<ViewMode>,

    /// chainId, cpk, residueType, secondaryStructure, hydrophobicity,
    /// charge or bFactor.
    #[arg(long)]
    scheme: Option<ColorScheme>,

    /// low, medium or high.
    #[arg(long)]
    quality: Option<Quality>,

    /// Show hydrogen atoms.
    #[arg(long)]
    hydrogens: bool,

    /// Show water molecules.
    #[arg(long)]
    water: bool,

    /// Show side-chain atoms.
    #[arg(long)]
    side_chains: bool,

    /// Add the axes helper and grid.
    #[arg(long)]
    axes: bool,

    /// Zoom in this many steps.
    #[arg(long, default_value_t = 0, value_name = "STEPS")]
    zoom: u32,

    /// Write the scene as JSON into this directory.
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str()),
    )
    .init();
}

fn write_stats(out: &mut impl Write, scene: &Scene) -> io::Result<()> {
    let stats = scene.stats();
    writeln!(out, "{} ({})", scene.title, scene.mode)?;
    writeln!(out, "  primitives: {}", stats.primitives)?;
    writeln!(out, "  vertices:   {}", stats.vertices)?;
    writeln!(out, "  triangles:  {}", stats.triangles)?;
    writeln!(out, "  spheres:    {}", stats.spheres)?;
    writeln!(out, "  cylinders:  {}", stats.cylinders)
}

fn list(out: &mut impl Write) -> Result<(), MolscopeError> {
    let store = StructureStore::default();
    for (id, name) in store.names() {
        writeln!(out, "{id:<8} {name}")?;
    }
    Ok(())
}

fn info(out: &mut impl Write, id: &str) -> Result<(), MolscopeError> {
    let mut state = ViewState::default();
    let _ = state.submit_identifier(id)?;
    writeln!(out, "{}", state.summary())?;
    Ok(())
}

fn show(out: &mut impl Write, args: &ShowArgs) -> Result<(), MolscopeError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let mut state = ViewState::new(options);
    let _ = state.submit_identifier(&args.id)?;

    let display = state.display_mut();
    if let Some(mode) = args.mode {
        display.mode = mode;
    }
    if let Some(scheme) = args.scheme {
        display.color_scheme = scheme;
    }
    if let Some(quality) = args.quality {
        display.quality = quality;
    }
    display.show_hydrogens |= args.hydrogens;
    display.show_water |= args.water;
    display.show_side_chains |= args.side_chains;
    display.show_axes |= args.axes;
    for _ in 0..args.zoom {
        state.zoom_in();
    }

    let scene = state.build_scene();
    write_stats(out, &scene)?;
    if let Some(dir) = &args.export {
        let path = state.export(dir)?;
        writeln!(out, "exported {}", path.display())?;
    }
    Ok(())
}

fn molecule(
    out: &mut impl Write,
    formula: &str,
    export: Option<&Path>,
) -> Result<(), MolscopeError> {
    let molecule = molecule_from_formula(formula);
    let scene = build_molecule_scene(&molecule, &Options::default());
    write_stats(out, &scene)?;
    if let Some(dir) = export {
        let path = export_scene(&scene, formula, dir)?;
        writeln!(out, "exported {}", path.display())?;
    }
    Ok(())
}

fn schema(out: &mut impl Write) -> Result<(), MolscopeError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())?;
    writeln!(out, "{schema}")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut out = io::stdout().lock();
    let result = match cli.command {
        Commands::List => list(&mut out),
        Commands::Info { id } => info(&mut out, &id),
        Commands::Show(args) => show(&mut out, &args),
        Commands::Molecule { formula, export } => {
            molecule(&mut out, &formula, export.as_deref())
        }
        Commands::Schema => schema(&mut out),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use ts_app::{
    AppResult, ControlSettings, ControlSurface, K_SLIDER, N_MAX_SLIDER, ParameterChange,
    RenderFrame, Renderer, SliderSpec, V0_SLIDER, W_SLIDER, load_settings,
};
use ts_engine::Variant;

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(about = "TankSim CLI - dirty/clean water volume sequences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the two daily series for a parameter set
    Run {
        /// Recurrence variant (e.g. dirty-first, clean-first, mixing, evaporation)
        #[arg(long)]
        variant: Option<String>,
        /// Initial volume V0
        #[arg(long)]
        v0: Option<f64>,
        /// Growth rate K
        #[arg(long)]
        k: Option<f64>,
        /// Number of days Nmax
        #[arg(long)]
        n_max: Option<usize>,
        /// Evaporated volume per day W
        #[arg(long)]
        w: Option<f64>,
        /// Tank capacity V
        #[arg(long)]
        capacity: Option<f64>,
        /// YAML or JSON preset applied before the flags
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available variants
    Variants,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

struct RunArgs {
    variant: Option<String>,
    v0: Option<f64>,
    k: Option<f64>,
    n_max: Option<usize>,
    w: Option<f64>,
    capacity: Option<f64>,
    settings: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            variant,
            v0,
            k,
            n_max,
            w,
            capacity,
            settings,
            format,
            output,
        } => cmd_run(
            RunArgs {
                variant,
                v0,
                k,
                n_max,
                w,
                capacity,
                settings,
            },
            format,
            output.as_deref(),
        ),
        Commands::Variants => {
            cmd_variants();
            Ok(())
        }
    }
}

fn cmd_run(args: RunArgs, format: OutputFormat, output: Option<&Path>) -> AppResult<()> {
    let base = match &args.settings {
        Some(path) => load_settings(path)?,
        None => ControlSettings::default(),
    };

    for label in base.out_of_range() {
        tracing::warn!("{} in settings is outside the control panel range", label);
    }

    let mut changes = Vec::new();
    if let Some(name) = &args.variant {
        changes.push(ParameterChange::Variant(name.parse::<Variant>()?));
    }
    if let Some(v) = args.v0 {
        warn_if_clamped(&V0_SLIDER, v);
        changes.push(ParameterChange::V0(v));
    }
    if let Some(v) = args.k {
        warn_if_clamped(&K_SLIDER, v);
        changes.push(ParameterChange::K(v));
    }
    if let Some(n) = args.n_max {
        warn_if_clamped(&N_MAX_SLIDER, n as f64);
        changes.push(ParameterChange::NMax(n));
    }
    if let Some(v) = args.w {
        warn_if_clamped(&W_SLIDER, v);
        changes.push(ParameterChange::Evaporation(v));
    }
    if let Some(v) = args.capacity {
        changes.push(ParameterChange::Capacity(v));
    }

    let settings = changes
        .into_iter()
        .fold(base, |settings, change| settings.with_change(change));
    if args.w.is_some() && !settings.evaporation_visible() {
        tracing::warn!("W is ignored by the {} variant", settings.variant);
    }

    let mut surface = ControlSurface::new(settings);
    let mut renderer = TextRenderer::new(format);
    surface.refresh(&mut renderer)?;
    let text = renderer.into_output()?;

    if let Some(path) = output {
        std::fs::write(path, &text)?;
        println!(
            "✓ Exported {} days to {}",
            surface.frame().map(RenderFrame::len).unwrap_or(0),
            path.display()
        );
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn warn_if_clamped(spec: &SliderSpec, value: f64) {
    let clamped = spec.clamp(value);
    if clamped != value {
        tracing::warn!("{} = {} adjusted to {}", spec.label, value, clamped);
    }
}

fn cmd_variants() {
    println!("Variants:");
    for variant in Variant::ALL {
        let w_note = if variant.uses_evaporation() {
            "  [uses W]"
        } else {
            ""
        };
        println!(
            "  {:<24} ({}){}",
            variant.label(),
            variant.french_label(),
            w_note
        );
    }
}

/// Formats each rendered frame into a text buffer.
struct TextRenderer {
    format: OutputFormat,
    output: Result<String, serde_json::Error>,
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    variant: Variant,
    days: &'a [usize],
    dirty: &'a [f64],
    clean: &'a [f64],
}

impl TextRenderer {
    fn new(format: OutputFormat) -> Self {
        Self {
            format,
            output: Ok(String::new()),
        }
    }

    fn into_output(self) -> AppResult<String> {
        Ok(self.output?)
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        self.output = match self.format {
            OutputFormat::Table => Ok(render_table(frame)),
            OutputFormat::Csv => Ok(render_csv(frame)),
            OutputFormat::Json => render_json(frame),
        };
    }
}

fn render_table(frame: &RenderFrame) -> String {
    let mut out = format!("Variant: {}\n", frame.variant);
    out.push_str(&format!("{:>6}  {:>16}  {:>16}\n", "day", "dirty", "clean"));
    for ((day, dirty), clean) in frame.days.iter().zip(&frame.dirty).zip(&frame.clean) {
        out.push_str(&format!(
            "{:>6}  {:>16}  {:>16}\n",
            day,
            ts_app::format_volume(*dirty),
            ts_app::format_volume(*clean)
        ));
    }
    out
}

fn render_csv(frame: &RenderFrame) -> String {
    let mut csv = String::from("day,dirty,clean\n");
    for ((day, dirty), clean) in frame.days.iter().zip(&frame.dirty).zip(&frame.clean) {
        csv.push_str(&format!("{},{},{}\n", day, dirty, clean));
    }
    csv
}

fn render_json(frame: &RenderFrame) -> Result<String, serde_json::Error> {
    let json = JsonFrame {
        variant: frame.variant,
        days: &frame.days,
        dirty: &frame.dirty,
        clean: &frame.clean,
    };
    let mut text = serde_json::to_string_pretty(&json)?;
    text.push('\n');
    Ok(text)
}

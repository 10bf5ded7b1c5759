use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use tag_cloud_core::{
    layout_items, Cloud, CloudStats, LayoutItem, LayouterConfig, Point, to_json_array,
    to_json_hash,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "tag-cloud",
    about = "Lay out tag rectangles into a circular cloud",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show a spinner while laying out (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out sizes read from a file (JSON array or `key width height` lines)
    Layout(LayoutArgs),
    /// Lay out seeded random sizes
    Random(RandomArgs),
    /// Simple timing bench (lays out random sizes once, prints time + waste)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct LayoutArgs {
    /// Input file: JSON array of {key, width, height} or one `[key] width height` per line
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    #[command(flatten)]
    layouter: LayouterArgs,
    #[command(flatten)]
    export: ExportArgs,
}

#[derive(Parser, Debug, Clone)]
struct RandomArgs {
    /// Number of rectangles
    #[arg(long, default_value_t = 100, help_heading = "Input/Output")]
    count: usize,
    /// Minimum side (inclusive)
    #[arg(long, default_value_t = 5, help_heading = "Input/Output")]
    min: i32,
    /// Maximum side (exclusive)
    #[arg(long, default_value_t = 70, help_heading = "Input/Output")]
    max: i32,
    /// RNG seed
    #[arg(long, default_value_t = 10, help_heading = "Input/Output")]
    seed: u64,
    #[command(flatten)]
    layouter: LayouterArgs,
    #[command(flatten)]
    export: ExportArgs,
}

#[derive(Args, Debug, Clone)]
struct LayouterArgs {
    /// Center x
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, help_heading = "Layout")]
    center_x: i32,
    /// Center y
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, help_heading = "Layout")]
    center_y: i32,
    /// Spiral step (radius gained per full turn)
    #[arg(long, default_value_t = tag_cloud_core::DEFAULT_STEP, help_heading = "Layout")]
    step: i32,
    /// Spiral points tried per rectangle before giving up
    #[arg(long, help_heading = "Layout")]
    max_attempts: Option<u64>,
    /// Search without an attempt cap (overrides --max-attempts)
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    unbounded: bool,
    /// YAML config file path (keys present in the file override flags)
    #[arg(long, help_heading = "Layout")]
    config: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Layout")]
    print_config_format: String,
}

#[derive(Args, Debug, Clone)]
struct ExportArgs {
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Export")]
    out_dir: PathBuf,
    /// Base name of written files
    #[arg(short, long, default_value = "cloud", help_heading = "Export")]
    name: String,
    /// Metadata format: json-array | json (alias) | json-hash | template
    #[arg(long, default_value = "json-array", help_heading = "Export")]
    metadata: String,
    /// Handlebars template file, used when --metadata template
    #[arg(long, help_heading = "Export")]
    template: Option<PathBuf>,
    /// File extension for template output
    #[arg(long, default_value = "txt", help_heading = "Export")]
    template_ext: String,
    /// Export cloud stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Dry run: compute layout and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of rectangles
    #[arg(long, default_value_t = 500)]
    count: usize,
    /// Minimum side (inclusive)
    #[arg(long, default_value_t = 5)]
    min: i32,
    /// Maximum side (exclusive)
    #[arg(long, default_value_t = 70)]
    max: i32,
    /// RNG seed
    #[arg(long, default_value_t = 10)]
    seed: u64,
    /// Spiral step
    #[arg(long, default_value_t = tag_cloud_core::DEFAULT_STEP)]
    step: i32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    let show_progress = cli.progress && !cli.quiet;
    match &cli.command {
        Commands::Layout(args) => {
            let items = read_items(&args.input)?;
            info!(count = items.len(), input = ?args.input, "loaded items");
            run_layout(items, &args.layouter, &args.export, show_progress)
        }
        Commands::Random(args) => {
            let items = random_items(args.count, args.min, args.max, args.seed)?;
            info!(count = items.len(), seed = args.seed, "generated items");
            run_layout(items, &args.layouter, &args.export, show_progress)
        }
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_layout(
    items: Vec<LayoutItem<String>>,
    layouter: &LayouterArgs,
    export: &ExportArgs,
    show_progress: bool,
) -> anyhow::Result<()> {
    let cfg = build_config(layouter)?;

    if layouter.print_config {
        match layouter.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let spinner = if show_progress {
        use indicatif::{ProgressBar, ProgressStyle};
        let s = ProgressBar::new_spinner();
        s.set_style(ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_msg}")?);
        s.set_message(format!("laying out {} items", items.len()));
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    };
    let cloud = layout_items(items, cfg).context("layout failed")?;
    if let Some(s) = &spinner {
        s.finish_and_clear();
    }

    for r in &cloud.rejected {
        warn!(index = r.index, key = %r.key, reason = %r.reason, "item skipped");
    }
    let stats = cloud.stats();
    info!(
        placed = cloud.placements.len(),
        rejected = cloud.rejected.len(),
        waste_pct = stats.waste_percentage,
        "layout done"
    );

    if export.dry_run {
        println!("{}", stats.summary());
        return Ok(());
    }

    fs::create_dir_all(&export.out_dir)
        .with_context(|| format!("create out_dir {}", export.out_dir.display()))?;

    match export.metadata.as_str() {
        "json-array" | "json" => {
            let json_path = export.out_dir.join(format!("{}.json", export.name));
            let json = serde_json::to_string_pretty(&to_json_array(&cloud))?;
            fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
            info!(?json_path, placements = cloud.placements.len(), "cloud written");
        }
        "json-hash" => {
            let json_path = export.out_dir.join(format!("{}.json", export.name));
            let json = serde_json::to_string_pretty(&to_json_hash(&cloud))?;
            fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
            info!(?json_path, placements = cloud.placements.len(), "cloud written");
        }
        "template" => {
            let Some(template_path) = &export.template else {
                anyhow::bail!("--metadata template requires --template <file>");
            };
            let tpl = fs::read_to_string(template_path)
                .with_context(|| format!("read template {}", template_path.display()))?;
            let rendered = render_template(&tpl, &cloud, &stats)?;
            let out_path = export
                .out_dir
                .join(format!("{}.{}", export.name, export.template_ext));
            fs::write(&out_path, rendered)
                .with_context(|| format!("write {}", out_path.display()))?;
            info!(?out_path, placements = cloud.placements.len(), "template written");
        }
        other => anyhow::bail!("unknown metadata format: {}", other),
    }

    if let Some(stats_path) = &export.export_stats {
        fs::write(stats_path, serde_json::to_string_pretty(&stats)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }
    Ok(())
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    use std::time::Instant;
    let items = random_items(b.count, b.min, b.max, b.seed)?;
    let cfg = LayouterConfig::builder().step(b.step).build();
    let start = Instant::now();
    let cloud = layout_items(items, cfg)?;
    let dur = start.elapsed();
    let stats = cloud.stats();
    println!(
        "rects={} waste={:.2}% time={}",
        stats.num_rects,
        stats.waste_percentage,
        bench_fmt_dur(dur)
    );
    Ok(())
}

fn bench_fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn build_config(args: &LayouterArgs) -> anyhow::Result<LayouterConfig> {
    let mut cfg = LayouterConfig::builder()
        .center(args.center_x, args.center_y)
        .step(args.step)
        .build();
    if let Some(n) = args.max_attempts {
        cfg.max_spiral_attempts = Some(n);
    }
    if args.unbounded {
        cfg.max_spiral_attempts = None;
    }
    if let Some(path) = &args.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg = y.into_layouter_config(cfg);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn random_items(
    count: usize,
    min: i32,
    max: i32,
    seed: u64,
) -> anyhow::Result<Vec<LayoutItem<String>>> {
    use rand::{Rng, SeedableRng};
    if min >= max {
        anyhow::bail!("--min ({}) must be less than --max ({})", min, max);
    }
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|i| {
            let w = rng.gen_range(min..max);
            let h = rng.gen_range(min..max);
            LayoutItem::new(format!("r{}", i), w, h)
        })
        .collect())
}

fn read_items(path: &Path) -> anyhow::Result<Vec<LayoutItem<String>>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        || text.trim_start().starts_with('[');
    if is_json {
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
    } else {
        parse_lines(&text).with_context(|| format!("parse {}", path.display()))
    }
}

/// One item per line: `key width height` or `width height` (key = item index).
/// Blank lines and `#` comments are skipped.
fn parse_lines(text: &str) -> anyhow::Result<Vec<LayoutItem<String>>> {
    let mut items = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (key, w, h) = match parts.as_slice() {
            [w, h] => (items.len().to_string(), *w, *h),
            [key, w, h] => (key.to_string(), *w, *h),
            _ => anyhow::bail!("line {}: expected `[key] width height`", lineno + 1),
        };
        let w: i32 = w
            .parse()
            .with_context(|| format!("line {}: bad width {:?}", lineno + 1, w))?;
        let h: i32 = h
            .parse()
            .with_context(|| format!("line {}: bad height {:?}", lineno + 1, h))?;
        items.push(LayoutItem::new(key, w, h));
    }
    Ok(items)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Serialize)]
struct TemplatePlacement {
    key: String,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    order: usize,
}

#[derive(Serialize)]
struct TemplateContext {
    center: Point,
    step: i32,
    placements: Vec<TemplatePlacement>,
    stats: CloudStats,
}

fn build_template_context(cloud: &Cloud<String>, stats: &CloudStats) -> TemplateContext {
    let placements = cloud
        .placements
        .iter()
        .enumerate()
        .map(|(order, p)| TemplatePlacement {
            key: p.key.clone(),
            x: p.rect.x,
            y: p.rect.y,
            w: p.rect.w,
            h: p.rect.h,
            order,
        })
        .collect();
    TemplateContext {
        center: cloud.center,
        step: cloud.step,
        placements,
        stats: *stats,
    }
}

fn render_template(tpl: &str, cloud: &Cloud<String>, stats: &CloudStats) -> anyhow::Result<String> {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);
    hb.register_template_string("cloud", tpl)
        .context("invalid template")?;
    let ctx = build_template_context(cloud, stats);
    Ok(hb.render("cloud", &ctx)?)
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    center_x: Option<i32>,
    center_y: Option<i32>,
    step: Option<i32>,
    max_spiral_attempts: Option<u64>,
    unbounded: Option<bool>,
}

impl YamlConfig {
    fn into_layouter_config(self, mut cfg: LayouterConfig) -> LayouterConfig {
        if let Some(v) = self.center_x {
            cfg.center.x = v;
        }
        if let Some(v) = self.center_y {
            cfg.center.y = v;
        }
        if let Some(v) = self.step {
            cfg.step = v;
        }
        if let Some(v) = self.max_spiral_attempts {
            cfg.max_spiral_attempts = Some(v);
        }
        if self.unbounded == Some(true) {
            cfg.max_spiral_attempts = None;
        }
        cfg
    }
}

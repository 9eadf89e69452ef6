use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pointset::api::{
    build_grid, render_grid, validate_difficulty, AnswerVerifier, ClusterGenerator, GeneratorCfg,
    GrowthCfg, PuzzleInstance, ReplayToken, SelectCfg, DEFAULT_DIFFICULTY, DEFAULT_QUESTION_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "pointset-cli")]
#[command(about = "Generate and verify 3D point-set classification puzzles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Debug)]
struct GenOpts {
    #[arg(long, default_value_t = DEFAULT_DIFFICULTY)]
    difficulty: u32,
    /// Seed for reproducible output; instance i is replayable from (seed, i)
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = SelectCfg::default().boundary_cutoff)]
    boundary_cutoff: f64,
    #[arg(long, default_value_t = SelectCfg::default().internal_cutoff)]
    internal_cutoff: f64,
    #[arg(long, default_value_t = GrowthCfg::default().fill_probability)]
    fill_probability: f64,
}

impl GenOpts {
    fn cfg(&self) -> GeneratorCfg {
        GeneratorCfg {
            growth: GrowthCfg {
                fill_probability: self.fill_probability,
                ..GrowthCfg::default()
            },
            select: SelectCfg {
                boundary_cutoff: self.boundary_cutoff,
                internal_cutoff: self.internal_cutoff,
            },
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print puzzles as JSON lines on stdout
    Generate {
        #[arg(long, default_value_t = DEFAULT_QUESTION_COUNT)]
        count: usize,
        #[command(flatten)]
        opts: GenOpts,
    },
    /// Check a free-text answer against a ground-truth label
    Verify {
        #[arg(long)]
        label: String,
        #[arg(long)]
        answer: String,
    },
    /// Print one grown cluster as a layered diagram
    Render {
        #[command(flatten)]
        opts: GenOpts,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { count, opts } => {
            for line in generate(count, &opts)? {
                println!("{line}");
            }
            Ok(())
        }
        Action::Verify { label, answer } => {
            println!("{}", verify(&label, &answer));
            Ok(())
        }
        Action::Render { opts } => {
            print!("{}", render(&opts)?);
            Ok(())
        }
        Action::Report => report(),
    }
}

fn generate(count: usize, opts: &GenOpts) -> Result<Vec<String>> {
    tracing::info!(count, difficulty = opts.difficulty, seed = ?opts.seed, "generate");
    let cfg = opts.cfg();
    let puzzles: Vec<PuzzleInstance> = match opts.seed {
        Some(seed) => ClusterGenerator::generate_seeded_batch(&cfg, seed, count, opts.difficulty)?,
        None => {
            ClusterGenerator::with_cfg(cfg, rand_seed_rng()).generate(count, opts.difficulty)?
        }
    };
    puzzles
        .iter()
        .map(|p| serde_json::to_string(p).context("serializing puzzle"))
        .collect()
}

fn rand_seed_rng() -> StdRng {
    StdRng::from_entropy()
}

fn verify(label: &str, answer: &str) -> bool {
    let verifier = AnswerVerifier::new();
    let matched = verifier.verify_label(label, answer);
    tracing::info!(label, matched, "verify");
    matched
}

fn render(opts: &GenOpts) -> Result<String> {
    validate_difficulty(opts.difficulty)?;
    let cfg = opts.cfg();
    let grid = match opts.seed {
        Some(seed) => build_grid(
            opts.difficulty,
            &cfg.growth,
            &mut ReplayToken { seed, index: 0 }.to_std_rng(),
        ),
        None => build_grid(opts.difficulty, &cfg.growth, &mut rand_seed_rng()),
    };
    tracing::info!(size = grid.size(), filled = grid.count_filled(), "render");
    Ok(render_grid(&grid))
}

fn report() -> Result<()> {
    let defaults = GeneratorCfg::default();
    let doc = provenance::record(provenance::Payload::new(json!({
        "growth": {
            "base_size": defaults.growth.base_size,
            "min_iterations": defaults.growth.min_iterations,
            "iteration_slack": defaults.growth.iteration_slack,
            "fill_probability": defaults.growth.fill_probability
        },
        "select": {
            "boundary_cutoff": defaults.select.boundary_cutoff,
            "internal_cutoff": defaults.select.internal_cutoff
        }
    })));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

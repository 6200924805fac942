use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use serde_json::Value;
use tracing::info;

use rowforge::engine::core::Row;
use rowforge::engine::directive::DirectiveRegistry;
use rowforge::engine::pipeline::Pipeline;
use rowforge::logging;
use rowforge::shared::config::CONFIG;

#[derive(Parser)]
#[command(name = "rowforge")]
#[command(about = "Run a directive recipe over a stream of JSON rows", long_about = None)]
struct Args {
    /// Recipe text; directives separated by newlines or ';'
    #[arg(short, long)]
    recipe: Option<String>,

    /// Read the recipe from a file instead
    #[arg(long, value_name = "PATH")]
    recipe_file: Option<PathBuf>,

    /// Input file with one JSON object per line (defaults to stdin)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Rows per batch (defaults to engine.batch_size from config)
    #[arg(short, long)]
    batch_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init()?;

    let recipe = match (&args.recipe, &args.recipe_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => anyhow::bail!("either --recipe or --recipe-file is required"),
    };

    let registry = DirectiveRegistry::with_builtins();
    let mut pipeline = Pipeline::from_recipe(&recipe, &registry).inspect_err(|e| e.log_error())?;

    let batch_size = args.batch_size.unwrap_or(CONFIG.engine.batch_size).max(1);
    info!(target: "rowforge::cli", steps = pipeline.len(), batch_size, "Starting run");

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(fs::File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut batch: Vec<Row> = Vec::with_capacity(batch_size);
    let mut line_no = 0u64;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(&line)
            .map_err(|e| anyhow::anyhow!("line {}: invalid JSON: {}", line_no, e))?;
        let row = Row::from_json_object(&value)
            .ok_or_else(|| anyhow::anyhow!("line {}: expected a JSON object", line_no))?;

        batch.push(row);
        if batch.len() == batch_size {
            let rows = pipeline
                .process(std::mem::take(&mut batch))
                .inspect_err(|e| e.log_error())?;
            emit(&mut out, rows)?;
        }
    }

    if !batch.is_empty() {
        let rows = pipeline.process(batch).inspect_err(|e| e.log_error())?;
        emit(&mut out, rows)?;
    }

    let rows = pipeline.finish().inspect_err(|e| e.log_error())?;
    emit(&mut out, rows)?;

    Ok(())
}

fn emit(out: &mut impl Write, rows: Vec<Row>) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row.to_json_object())?;
    }
    Ok(())
}

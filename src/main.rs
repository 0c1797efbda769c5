//! Docrank CLI entrypoint: rerank a JSONL candidate file.

use std::path::PathBuf;

use docrank::config::Config;
use docrank::query::QueryDecomposer;
use docrank::rerank::Reranker;
use docrank::scoring::StringMatchScorer;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let mut args = std::env::args().skip(1);
    let input_path: PathBuf = match args.next().map(PathBuf::from).or(config.input_path.clone()) {
        Some(path) => path,
        None => anyhow::bail!("no input file: pass a path or set DOCRANK_INPUT_PATH"),
    };
    let output_path: PathBuf = match args.next().map(PathBuf::from).or(config.output_path.clone())
    {
        Some(path) => path,
        None => anyhow::bail!("no output file: pass a path or set DOCRANK_OUTPUT_PATH"),
    };

    tracing::info!(
        input = %input_path.display(),
        output = %output_path.display(),
        cutoff_k = config.cutoff_k,
        "Docrank starting"
    );

    let decomposer = QueryDecomposer::with_capacity(config.query_cache_capacity);
    let reranker = Reranker::with_scorer(decomposer, StringMatchScorer::new());

    let summary = reranker.rerank_file(&input_path, &output_path, config.cutoff_k)?;

    for skipped in &summary.skipped_queries {
        tracing::warn!(
            query = skipped.query(),
            kind = skipped.kind(),
            "Query group skipped"
        );
    }

    tracing::info!(
        candidates_seen = summary.candidates_seen,
        candidates_scored = summary.candidates_scored,
        beyond_cutoff = summary.beyond_cutoff,
        groups_emitted = summary.groups_emitted,
        "Done"
    );

    Ok(())
}

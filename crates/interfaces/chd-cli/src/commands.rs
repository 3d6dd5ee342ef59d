use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chd_app_core::discovery::collect_folder_inputs;
use chd_app_core::domain::{NO_MATCHING_FILES_MESSAGE, TOOL_NOT_FOUND_MESSAGE};
use chd_app_core::{
    run_batch, BatchKind, BatchRequest, BatchSummary, ChdmanConverter, ConversionRunEvent,
    ConverterPort,
};
use chd_core::{DiscPath, SystemProfile};
use humansize::{format_size, DECIMAL};
use indicatif::{ProgressBar, ProgressStyle};

/// Real converter, optionally pinned to an explicit `chdman` binary.
pub fn default_converter(chdman: Option<Utf8PathBuf>) -> Arc<dyn ConverterPort> {
    Arc::new(
        ChdmanConverter::new().with_tool_override(chdman.map(Utf8PathBuf::into_std_path_buf)),
    )
}

pub async fn cmd_convert(
    converter: Arc<dyn ConverterPort>,
    input: Utf8PathBuf,
    output: Option<Utf8PathBuf>,
    system: SystemProfile,
) -> Result<BatchSummary> {
    let input = input.into_std_path_buf();
    let output = output
        .map(Utf8PathBuf::into_std_path_buf)
        .unwrap_or_else(|| DiscPath::container_path(&input));

    println!(":: Converting {}", input.display());
    println!("   System: {}", system);
    println!("   Output: {}", output.display());

    let request = BatchRequest::single(system, input, output);
    execute(converter, request).await
}

pub async fn cmd_batch(
    converter: Arc<dyn ConverterPort>,
    folder: Utf8PathBuf,
    system: SystemProfile,
) -> Result<BatchSummary> {
    println!(":: Scanning folder: {}", folder);
    ensure_folder(&folder)?;

    let inputs = collect_folder_inputs(folder.as_std_path(), system.extensions())?;
    if inputs.is_empty() {
        println!("   {}", NO_MATCHING_FILES_MESSAGE);
        return Ok(BatchSummary {
            kind: BatchKind::Batch,
            system,
            converted: 0,
            total: 0,
        });
    }
    println!("   Found {} image(s) for {}", inputs.len(), system);

    let request = BatchRequest::beside_sources(system, inputs);
    execute(converter, request).await
}

async fn execute(converter: Arc<dyn ConverterPort>, request: BatchRequest) -> Result<BatchSummary> {
    let tool = converter.locate_tool().context(TOOL_NOT_FOUND_MESSAGE)?;
    tracing::debug!("Using converter at {}", tool.display());

    let outputs: Vec<PathBuf> = request
        .items
        .iter()
        .map(|item| {
            item.output
                .clone()
                .unwrap_or_else(|| DiscPath::container_path(&item.input))
        })
        .collect();

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n[{bar:40.cyan/blue}] {pos:>3}%")
            .context("Invalid progress template")?
            .progress_chars("=>-"),
    );

    let worker_pb = pb.clone();
    let summary = tokio::task::spawn_blocking(move || {
        let mut current = 0;
        let mut emit = |ev: ConversionRunEvent| match ev {
            ConversionRunEvent::FileStarted { index, total, name } => {
                current = index - 1;
                worker_pb.set_position(0);
                worker_pb.set_message(format!("[{index}/{total}] Converting: {name}"));
            }
            ConversionRunEvent::Progress(p) => worker_pb.set_position(p.round() as u64),
            ConversionRunEvent::OutputTail(tail) => tracing::trace!("chdman: {tail}"),
            ConversionRunEvent::FileFinished { ok } => {
                worker_pb.println(file_line(ok, &outputs[current]));
            }
            _ => {}
        };
        run_batch(converter.as_ref(), &tool, &request, &mut emit)
    })
    .await?;
    pb.finish_and_clear();

    println!("\n:: {}", summary.title());
    for line in summary.message().lines() {
        println!("   {}", line);
    }
    Ok(summary)
}

fn file_line(ok: bool, output: &std::path::Path) -> String {
    if !ok {
        return format!("   FAILED {}", DiscPath::display_name(output));
    }
    match std::fs::metadata(output) {
        Ok(meta) => format!(
            "   OK     {} ({})",
            DiscPath::display_name(output),
            format_size(meta.len(), DECIMAL)
        ),
        Err(_) => format!("   OK     {}", DiscPath::display_name(output)),
    }
}

fn ensure_folder(folder: &Utf8Path) -> Result<()> {
    if !folder.is_dir() {
        anyhow::bail!("{} is not a folder", folder);
    }
    Ok(())
}

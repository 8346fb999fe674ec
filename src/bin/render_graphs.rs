use std::fs;
use std::path::{Path, PathBuf};

use graph_plot::api::{DrawingInstructions, GraphRenderConfig, GraphRenderer};
use graph_plot::batch::{load_graph_dir, render_batch};
use graph_plot::core::Viewport;
use graph_plot::telemetry::init_default_tracing;

const DEFAULT_INPUT_DIR: &str = "graphs";
const DEFAULT_OUTPUT_DIR: &str = "graph_renders";

struct CliArgs {
    input_dir: PathBuf,
    output_dir: PathBuf,
    config_path: Option<PathBuf>,
    viewport: Viewport,
    json: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            GraphRenderConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => GraphRenderConfig::default(),
    };
    let renderer = GraphRenderer::new(config).map_err(|err| err.to_string())?;

    let sources = load_graph_dir(&args.input_dir).map_err(|err| err.to_string())?;
    if sources.is_empty() {
        println!("No graph files found in {}.", args.input_dir.display());
        return Ok(());
    }
    println!(
        "Found {} graph files in {}",
        sources.len(),
        args.input_dir.display()
    );

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    if !args.json && !cfg!(feature = "cairo-backend") {
        println!("PNG output requires feature `cairo-backend`; writing JSON drawing instructions.");
    }

    let total = sources.len();
    let mut written = 0usize;
    for (index, item) in render_batch(&renderer, &sources).into_iter().enumerate() {
        println!("Visualizing graph {}/{total}: {}", index + 1, item.id);
        match item.result {
            Ok(instructions) => match write_output(&args, &renderer, &item.id, &instructions) {
                Ok(output_path) => {
                    println!("  -> {}", output_path.display());
                    written += 1;
                }
                Err(err) => eprintln!("  skipped {}: {err}", item.id),
            },
            Err(err) => eprintln!("  skipped {}: {err}", item.id),
        }
    }

    println!("Rendered {written}/{total} graphs into {}", args.output_dir.display());
    Ok(())
}

fn output_path_for(output_dir: &Path, id: &str, extension: &str) -> PathBuf {
    output_dir.join(Path::new(id).with_extension(extension))
}

fn write_json(
    output_dir: &Path,
    id: &str,
    instructions: &DrawingInstructions,
) -> Result<PathBuf, String> {
    let path = output_path_for(output_dir, id, "json");
    let json = instructions
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    fs::write(&path, json).map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    Ok(path)
}

#[cfg(feature = "cairo-backend")]
fn write_output(
    args: &CliArgs,
    renderer: &GraphRenderer,
    id: &str,
    instructions: &DrawingInstructions,
) -> Result<PathBuf, String> {
    use graph_plot::render::{CairoRenderer, Renderer};

    if args.json {
        return write_json(&args.output_dir, id, instructions);
    }

    let frame = instructions
        .build_render_frame(args.viewport, &renderer.config().style)
        .map_err(|err| format!("graph `{id}` frame build failed: {err}"))?;
    let width = i32::try_from(args.viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(args.viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let mut backend = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    backend
        .set_clear_color(renderer.config().style.background_color)
        .map_err(|err| err.to_string())?;
    backend.render(&frame).map_err(|err| err.to_string())?;

    let path = output_path_for(&args.output_dir, id, "png");
    backend.write_png(&path).map_err(|err| err.to_string())?;
    Ok(path)
}

#[cfg(not(feature = "cairo-backend"))]
fn write_output(
    args: &CliArgs,
    renderer: &GraphRenderer,
    id: &str,
    instructions: &DrawingInstructions,
) -> Result<PathBuf, String> {
    // Without a pixel backend, still check the bundle projects cleanly.
    instructions
        .build_render_frame(args.viewport, &renderer.config().style)
        .map_err(|err| format!("graph `{id}` frame build failed: {err}"))?;
    write_json(&args.output_dir, id, instructions)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_dir = PathBuf::from(DEFAULT_INPUT_DIR);
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut config_path: Option<PathBuf> = None;
    let mut viewport = Viewport::default();
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_dir = PathBuf::from(value);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--width" => {
                viewport.width = parse_pixels(args.next(), "--width")?;
            }
            "--height" => {
                viewport.height = parse_pixels(args.next(), "--height")?;
            }
            "--json" => json = true,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        input_dir,
        output_dir,
        config_path,
        viewport,
        json,
    })
}

fn parse_pixels(value: Option<String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    match value.parse::<u32>() {
        Ok(pixels) if pixels > 0 => Ok(pixels),
        _ => Err(format!("{flag} must be a positive integer, found `{value}`")),
    }
}

fn usage_message() -> String {
    format!(
        "usage: render_graphs [--input INPUT_DIR] [--output OUTPUT_DIR] [--config FILE] [--width PX] [--height PX] [--json]\n\
         \n\
         Renders every *.txt graph in INPUT_DIR (default `{DEFAULT_INPUT_DIR}`) into OUTPUT_DIR \
         (default `{DEFAULT_OUTPUT_DIR}`). Writes PNG files when built with feature \
         `cairo-backend`, JSON drawing instructions otherwise or with --json. A graph that \
         fails to parse, render or write is reported and skipped."
    )
}

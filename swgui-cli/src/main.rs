//! SWG UI editor CLI - layout and texture debugging tool
//!
//! Usage:
//!   swgui layout <tree.json>            Resolve every element and print its box
//!   swgui layout <tree.json> --json     Same, as JSON
//!   swgui texture <file.dds>            Print header info and decode the surface
//!   swgui texture <file.dds> --raw-out out.rgba
//!
//! The element tree is a JSON description of already-parsed markup:
//! `{ "tag": "Page", "attrs": { "PackSize": "f,f" }, "children": [ ... ] }`
//! (or an array of such nodes).

mod tree;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use serde::Serialize;
use swgui_codec::error::fourcc_display;
use swgui_codec::{Bc1Decoder, ContainerHeader, TextureDecoder, parse_header};
use swgui_common::warning::warn_once;
use swgui_dom::{ElementId, ElementTree};
use swgui_layout::{FrameConfig, LayoutTree, ReferenceFrame, ResolvedBox};

/// SWG UI editor core inspector
#[derive(Parser, Debug)]
#[command(name = "swgui")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Resolve a layout against the default 501x486 -> 512x512 frame
    swgui layout map.json

    # Resolve against a custom output canvas
    swgui layout map.json --output-width 1024 --output-height 1024

    # Decode a background texture and dump raw RGBA
    swgui texture ui_map_galaxy.dds --raw-out galaxy.rgba
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the boxes of a JSON element tree
    Layout(LayoutArgs),
    /// Decode a block-compressed texture container
    Texture(TextureArgs),
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Path to the JSON element tree
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Frame configuration file (JSON with referenceWidth, referenceHeight,
    /// outputWidth, outputHeight)
    #[arg(long, value_name = "FILE")]
    frame: Option<PathBuf>,

    /// Override the reference frame width
    #[arg(long)]
    reference_width: Option<f32>,

    /// Override the reference frame height
    #[arg(long)]
    reference_height: Option<f32>,

    /// Override the output canvas width
    #[arg(long)]
    output_width: Option<f32>,

    /// Override the output canvas height
    #[arg(long)]
    output_height: Option<f32>,

    /// Print resolved boxes as JSON
    #[arg(short, long)]
    json: bool,
}

#[derive(Args, Debug)]
struct TextureArgs {
    /// Path to the texture container
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Write the decoded RGBA8 pixels to this file
    #[arg(long, value_name = "FILE")]
    raw_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Layout(args) => run_layout(&args),
        Command::Texture(args) => run_texture(&args),
    }
}

/// Build the frame from the config file (if any) plus command-line overrides.
fn load_frame(args: &LayoutArgs) -> Result<ReferenceFrame> {
    let mut config = match &args.frame {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read frame config '{}'", path.display()))?;
            serde_json::from_str::<FrameConfig>(&text)
                .with_context(|| format!("invalid frame config '{}'", path.display()))?
        }
        None => FrameConfig::default(),
    };

    config.reference_width = args.reference_width.or(config.reference_width);
    config.reference_height = args.reference_height.or(config.reference_height);
    config.output_width = args.output_width.or(config.output_width);
    config.output_height = args.output_height.or(config.output_height);

    Ok(ReferenceFrame::from_config(&config))
}

/// One row of `--json` layout output.
#[derive(Serialize)]
struct BoxReport<'a> {
    id: usize,
    depth: usize,
    tag: &'a str,
    name: Option<&'a str>,
    #[serde(rename = "box")]
    resolved: ResolvedBox,
}

fn run_layout(args: &LayoutArgs) -> Result<()> {
    let frame = load_frame(args)?;
    let tree = tree::load_tree(&args.path)?;
    let layout = LayoutTree::build(&tree, &frame);

    let reports: Vec<BoxReport<'_>> = tree
        .iter_all()
        .filter(|&id| id != ElementId::ROOT)
        .filter_map(|id| {
            let element = tree.as_element(id)?;
            Some(BoxReport {
                id: id.0,
                depth: tree.depth(id),
                tag: &element.tag_name,
                name: element.name(),
                resolved: layout.get(id)?,
            })
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "{} {}x{} -> {}x{} (scale {:.4}, {:.4})",
        "=== Frame ===".bold(),
        frame.reference_width(),
        frame.reference_height(),
        frame.output_width(),
        frame.output_height(),
        frame.scale_x(),
        frame.scale_y()
    );
    print_reports(&tree, &reports);
    Ok(())
}

fn print_reports(tree: &ElementTree, reports: &[BoxReport<'_>]) {
    println!("{} ({} of {} nodes)", "=== Boxes ===".bold(), reports.len(), tree.len() - 1);
    for report in reports {
        let indent = "  ".repeat(report.depth.saturating_sub(1));
        let b = report.resolved;
        println!(
            "{indent}{} {} x={:.2} y={:.2} w={:.2} h={:.2}",
            format!("<{}>", report.tag).cyan(),
            report.name.unwrap_or("(unnamed)").dimmed(),
            b.x,
            b.y,
            b.width,
            b.height
        );
    }
}

fn run_texture(args: &TextureArgs) -> Result<()> {
    let bytes = read_bytes(&args.path)?;
    let decoder = Bc1Decoder;
    if !decoder.supports(&bytes) {
        anyhow::bail!("'{}' is not a {} container", args.path.display(), decoder.name());
    }

    let header = parse_header(&bytes)
        .with_context(|| format!("failed to parse header of '{}'", args.path.display()))?;
    println!("{}", "=== Header ===".bold());
    println!("  size:      {}x{}", header.width, header.height);
    println!("  format:    {}", fourcc_display(header.four_cc));
    println!("  mip maps:  {}", header.mip_map_count);
    println!("  blocks:    {}x{}", header.blocks_wide(), header.blocks_high());
    if let Some(message) = ignored_mips_message(&header) {
        warn_once("texture", &message);
    }

    let image = decoder
        .decode(&bytes)
        .with_context(|| format!("failed to decode '{}'", args.path.display()))?;
    let transparent = image
        .pixels()
        .chunks_exact(4)
        .filter(|px| px[3] == 0)
        .count();
    println!(
        "{} {}x{}, {} transparent pixels",
        "Decoded:".green(),
        image.width(),
        image.height(),
        transparent
    );

    if let Some(out) = &args.raw_out {
        fs::write(out, image.into_pixels())
            .with_context(|| format!("failed to write '{}'", out.display()))?;
        println!("RGBA written to: {}", out.display());
    }
    Ok(())
}

/// Warning text for containers carrying mip levels below the top one.
fn ignored_mips_message(header: &ContainerHeader) -> Option<String> {
    (header.mip_map_count > 1).then(|| {
        format!(
            "{} mip levels present, only the top level is decoded",
            header.mip_map_count
        )
    })
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
}

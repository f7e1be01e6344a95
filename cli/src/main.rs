//! unnotes CLI - recovered note rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unnotes::render::{self, NoteRenderer};
use unnotes::{load_note, DocumentOptions, JsonFormat, Note, RenderOptions};

#[derive(Parser)]
#[command(name = "unnotes")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render recovered notes to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input note file (JSON run list or note object)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a note to all formats (HTML, text, JSON)
    Convert {
        /// Input note file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Render a note to HTML
    Html {
        /// Input note file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit a full HTML document instead of a fragment
        #[arg(short, long)]
        document: bool,

        /// NFC-normalize text before rendering
        #[arg(long)]
        normalize: bool,

        /// Merge adjacent runs with identical formatting
        #[arg(long)]
        merge: bool,

        /// Leave the stylesheet out of full documents
        #[arg(long)]
        no_style: bool,
    },

    /// Convert a note to plain text
    Text {
        /// Input note file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// NFC-normalize text
        #[arg(long)]
        normalize: bool,
    },

    /// Convert a note's rendered tree to JSON
    Json {
        /// Input note file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show note information
    Info {
        /// Input note file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render every note in a directory
    Batch {
        /// Directory of note files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Emit full HTML documents
        #[arg(short, long)]
        document: bool,

        /// Render on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Html {
            input,
            output,
            document,
            normalize,
            merge,
            no_style,
        }) => {
            let options = RenderOptions::new()
                .with_normalize_unicode(normalize)
                .with_merge_adjacent_runs(merge)
                .with_document(DocumentOptions::new().with_stylesheet(!no_style));
            cmd_html(&input, output.as_deref(), document, &options)
        }
        Some(Commands::Text {
            input,
            output,
            normalize,
        }) => cmd_text(&input, output.as_deref(), normalize),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Batch {
            input,
            output,
            document,
            sequential,
        }) => cmd_batch(&input, &output, document, sequential),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: unnotes <FILE> [OUTPUT]".yellow());
                println!("       unnotes --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading note...");
    let note = load_note(input)?;
    let options = RenderOptions::new();
    pb.inc(1);

    pb.set_message("Generating HTML...");
    let tree = NoteRenderer::new(options.clone()).render(&note.runs);
    fs::write(output_dir.join("note.html"), tree.to_html()?)?;
    let document = render::to_html_document(&note, &options)?;
    fs::write(output_dir.join("document.html"), &document)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = render::to_text(&note.runs, &options)?;
    fs::write(output_dir.join("note.txt"), &text)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = render::to_json(&tree, JsonFormat::Pretty)?;
    fs::write(output_dir.join("tree.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} note.html", "├─".dimmed());
    println!("  {} document.html", "├─".dimmed());
    println!("  {} note.txt", "├─".dimmed());
    println!("  {} tree.json", "└─".dimmed());

    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    document: bool,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let note = load_note(input)?;

    let html = if document {
        render::to_html_document(&note, options)?
    } else {
        render::to_html(&note.runs, options)?
    };

    write_or_print(output, &html)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    normalize: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let note = load_note(input)?;
    let options = RenderOptions::new().with_normalize_unicode(normalize);
    let text = render::to_text(&note.runs, &options)?;

    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let note = load_note(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let tree = render::render_runs(&note.runs);
    let json = render::to_json(&tree, format)?;

    write_or_print(output, &json)
}

fn cmd_info(input: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let note = load_note(input)?;
    let result = render::to_html_with_stats(&note, &RenderOptions::new())?;
    let stats = &result.stats;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
        return Ok(());
    }

    println!("{}", "Note Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), note.display_title());

    let metadata = &note.metadata;
    if let Some(ref folder) = metadata.folder {
        println!("{}: {}", "Folder".bold(), folder);
    }
    if let Some(ref account) = metadata.account {
        println!("{}: {}", "Account".bold(), account);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = note.runs.plain_text();
    println!("{}: {}", "Runs".bold(), stats.run_count);
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Code blocks".bold(), stats.monospaced_count);
    println!("{}: {}", "Lists".bold(), stats.list_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!(
        "{}: {} checked, {} unchecked",
        "Checklist".bold(),
        stats.checked_count,
        stats.unchecked_count
    );
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Attachments".bold(), stats.attachment_count);

    Ok(())
}

fn note_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    log::debug!("Found {} note files in {}", files.len(), dir.display());
    Ok(files)
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    document: bool,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = note_files(input)?;
    if files.is_empty() {
        println!("{} {}", "No note files in".yellow(), input.display());
        return Ok(());
    }
    fs::create_dir_all(output)?;

    let pb = ProgressBar::new(files.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading notes...");
    let mut loaded: Vec<(PathBuf, Note)> = Vec::with_capacity(files.len());
    let mut failed = 0usize;
    for path in files {
        match load_note(&path) {
            Ok(note) => loaded.push((path, note)),
            Err(e) => {
                pb.println(format!("{} {}: {}", "Skipped".yellow(), path.display(), e));
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.set_message("Rendering...");
    let options = RenderOptions::new().with_parallel(!sequential);
    let (paths, notes): (Vec<PathBuf>, Vec<Note>) = loaded.into_iter().unzip();
    let rendered = if document {
        render::render_documents(&notes, &options)
    } else {
        render::render_notes(&notes, &options)
    };

    let mut written = 0usize;
    for (path, html) in paths.iter().zip(rendered) {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        match html {
            Ok(html) => {
                fs::write(output.join(format!("{}.html", stem)), html)?;
                written += 1;
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "Failed".red(), path.display(), e));
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");
    println!(
        "\n{} {} rendered, {} failed",
        "Done!".green().bold(),
        written,
        failed
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unnotes".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Recovered note rendering tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unnotes".dimmed());
    println!("License: MIT");
}

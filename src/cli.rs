//! Minimal CLI: schema document in → (markdown | blocks)
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::render::{Block, render_schema_section};
use crate::schema::SubSchemas;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// render JSON Schema documents into readable property sections
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render and print the section blocks joined into markdown text
    Markdown(MarkdownOut),
    /// render and print the raw ordered block sequence as JSON
    Blocks(BlocksOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON file mapping `$ref` keys to display type names
    #[arg(long)]
    sub_schemas: Option<PathBuf>,

    /// starting nesting depth (drives bullet indentation)
    #[arg(long, default_value_t = 0)]
    depth: usize,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct MarkdownOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .md file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct BlocksOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_sub_schemas(&self) -> anyhow::Result<SubSchemas> {
        let Some(path) = self.sub_schemas.as_ref() else {
            return Ok(SubSchemas::new());
        };
        let source = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("failed to read {}: {error}", path.display()))?;
        crate::parse::sub_schemas_from_str(&source)
    }

    /// Render every input document, feeding each block sequence to `apply`.
    /// One bad document must not abort the batch: failures are reported on
    /// stderr and skipped.
    fn render_each(&self, mut apply: impl FnMut(Vec<Block>)) -> anyhow::Result<()> {
        let sub_schemas = self.load_sub_schemas()?;
        let source_paths = resolve_file_path_patterns(&self.input)?;
        for source_path in source_paths {
            let source_path_str = source_path.to_string_lossy().to_string();
            let rendered = std::fs::read_to_string(&source_path)
                .map_err(anyhow::Error::from)
                .and_then(|source| crate::parse::schema_from_str(&source))
                .and_then(|schema_node| {
                    render_schema_section(self.depth, &schema_node, &sub_schemas)
                        .map_err(anyhow::Error::from)
                });
            match rendered {
                Ok(blocks) => apply(blocks),
                Err(error) => {
                    eprintln!("{} {source_path_str}: {error}", "skipped".red());
                }
            }
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Markdown(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let mut sections = Vec::new();
                target.input_settings.render_each(|blocks| {
                    sections.push(blocks.join("\n\n"));
                })?;
                let markdown = sections.join("\n\n");
                write_output(target.out.as_deref(), &markdown)
            }
            Command::Blocks(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let mut all_blocks = Vec::new();
                target.input_settings.render_each(|blocks| {
                    all_blocks.push(blocks);
                })?;
                let listing = serde_json::to_string_pretty(&all_blocks)?;
                write_output(target.out.as_deref(), &listing)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&std::path::Path>, contents: &str) -> anyhow::Result<()> {
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(out, contents)?;
    } else {
        println!("{contents}");
    }
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            // Treat as a glob pattern
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                matched_any = true;
                out.push(entry?);
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

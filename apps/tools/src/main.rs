use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use detail_core::{
    load_settings, render_detail,
    text::{render_form_text, render_text},
    validators, AnnotationForm, Field, MemoryStore, Settings, SubmitOutcome,
};
use shared::{
    domain::{Rating, ResourceId},
    error::ApiException,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Directory snapshot to load instead of the configured one.
    #[arg(long)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the resources in the snapshot.
    List,
    /// Print the detail view for one resource.
    Render { resource_id: i64 },
    /// Run an annotation through the form and the in-memory store, then re-render.
    Submit {
        resource_id: i64,
        #[arg(long, value_parser = parse_rating)]
        rating: Option<Rating>,
        #[arg(long)]
        author: String,
        #[arg(long, default_value = "")]
        body: String,
        /// Print the normalized submission as JSON instead of the re-rendered view.
        #[arg(long)]
        json: bool,
    },
    /// Run a single field validator.
    Validate {
        #[arg(value_enum)]
        check: Check,
        value: String,
        #[arg(long, default_value_t = 2)]
        len: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Check {
    Required,
    MinLength,
    MaxLength,
    Number,
    Email,
}

fn parse_rating(raw: &str) -> Result<Rating, String> {
    Rating::parse(raw).ok_or_else(|| format!("rating must be one of 1-5, got '{raw}'"))
}

fn load_store(data: Option<PathBuf>, settings: &Settings) -> Result<MemoryStore> {
    let path = data.unwrap_or_else(|| settings.data_path.clone());
    MemoryStore::load(&path).with_context(|| format!("loading directory from '{}'", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = load_settings();

    match cli.command {
        Command::Validate { check, value, len } => {
            let ok = match check {
                Check::Required => validators::required(&value),
                Check::MinLength => validators::min_length(len)(&value),
                Check::MaxLength => validators::max_length(len)(&value),
                Check::Number => validators::is_number(&value),
                Check::Email => validators::valid_email(&value),
            };
            println!("{}", if ok { "valid" } else { "invalid" });
        }
        Command::List => {
            let store = load_store(cli.data, &settings)?;
            for resource in store.resources() {
                println!("{}\t{}", resource.id, resource.name);
            }
        }
        Command::Render { resource_id } => {
            let store = load_store(cli.data, &settings)?;
            let resource_id = ResourceId(resource_id);
            if store.resource(resource_id).is_none() {
                tracing::warn!(resource_id = resource_id.0, "resource not in snapshot");
            }
            let view = render_detail(&store.detail_props(resource_id), &settings.parent_link);
            print!("{}", render_text(&view));
        }
        Command::Submit {
            resource_id,
            rating,
            author,
            body,
            json,
        } => {
            let mut store = load_store(cli.data, &settings)?;
            let resource_id = ResourceId(resource_id);
            let mut form = AnnotationForm::with_rules(resource_id, settings.form_rules).toggle();
            if let Some(rating) = rating {
                form = form.select_rating(rating);
            }
            let form = form
                .change(Field::Author, author)
                .blur(Field::Author)
                .change(Field::Body, body)
                .blur(Field::Body);

            let (form, outcome) = form.submit(&mut store);
            match outcome {
                SubmitOutcome::Accepted(submission) if json => {
                    println!("{}", serde_json::to_string_pretty(&submission)?);
                }
                SubmitOutcome::Accepted(_) => {
                    let view =
                        render_detail(&store.detail_props(resource_id), &settings.parent_link);
                    print!("{}", render_text(&view));
                }
                SubmitOutcome::Rejected(errors) => {
                    eprint!("{}", render_form_text(&form));
                    bail!("annotation rejected: {errors}");
                }
                SubmitOutcome::Failed(err) => {
                    return Err(ApiException::from(err)).context("store refused annotation");
                }
                SubmitOutcome::Ignored => bail!("annotation form was not open"),
            }
        }
    }

    Ok(())
}

mod client;
mod form;
mod highlight;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::style::Stylize;

use crate::client::ApiClient;
use crate::form::{slice_text, Mode, ResponseLength, RoastForm};
use crate::highlight::{render_ansi, tokenize};

/// Upload a PDF resume and get it roasted (or constructively reviewed).
#[derive(Parser)]
#[command(name = "roaster", version)]
struct Args {
    /// Path to the resume PDF
    resume: PathBuf,

    /// Commentary persona
    #[arg(long, value_enum, default_value_t = Mode::Roast)]
    mode: Mode,

    /// Requested response length
    #[arg(long = "length", value_enum, default_value_t = ResponseLength::Medium)]
    response_length: ResponseLength,

    /// Base URL of the roaster API
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut form = RoastForm {
        mode: args.mode,
        response_length: args.response_length,
        ..RoastForm::default()
    };

    // Client-side guard: a non-PDF selection never reaches the network.
    form.select_file(&args.resume);
    let Some(file) = form.file.clone() else {
        bail!(form.error.unwrap_or_else(|| "No file selected".to_string()));
    };

    form.is_loading = true;
    println!("{}", "Processing...".dim());

    let api = ApiClient::new(args.server);
    match api.roast(&file, form.mode, form.response_length).await {
        Ok(response) => {
            form.is_loading = false;
            form.result = Some(response.result.clone());

            let verb = match form.mode {
                Mode::Roast => "roasted",
                Mode::Feedback => "analyzed",
            };
            println!(
                "We just {verb} - {}\n",
                slice_text(&response.original_file_name).bold()
            );
            println!("{}", render_ansi(&tokenize(&response.result)));
            Ok(())
        }
        Err(e) => {
            form.is_loading = false;
            form.error = Some(e.to_string());
            bail!(e)
        }
    }
}

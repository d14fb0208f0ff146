//! Product command handlers

use anyhow::{Context, Result};
use colored::*;
use log::info;

use super::super::exit_codes;
use super::{CreateArgs, ProductCommands, ProductSubcommands};
use crate::api::AdminClient;
use crate::catalog;
use crate::config::Config;
use crate::product::{
    CompletionStatus, CreationReport, CreationRequest, ErrorKind, LeafExecution, ProductCreator, StepFailure,
    StepState,
};

pub async fn handle_product_command(cmd: ProductCommands, store: Option<&str>) -> Result<i32> {
    let config = Config::load()?;
    let store_config = config.resolve_store(store)?;
    let client = AdminClient::new(&store_config, &config.settings)?;
    info!("Using Admin API endpoint {}", client.endpoint());

    match cmd.command {
        ProductSubcommands::Create(args) => {
            let leaf_execution = if args.sequential || !config.settings.concurrent_steps {
                LeafExecution::Sequential
            } else {
                LeafExecution::Concurrent
            };
            create_product(client, args, leaf_execution).await
        }
        ProductSubcommands::List { first } => {
            list_products(&client, first).await?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

async fn create_product(client: AdminClient, args: CreateArgs, leaf_execution: LeafExecution) -> Result<i32> {
    let json = args.json;
    let request = creation_request(args);

    if !json {
        println!("🔄 {}", format!("Creating product '{}'...", request.title).dimmed());
    }

    let report = ProductCreator::new(client)
        .with_leaf_execution(leaf_execution)
        .create(&request)
        .await;

    if json {
        println!("{}", report.to_json_pretty().context("Failed to serialize creation report")?);
    } else {
        print_report(&report);
    }

    Ok(exit_code(report.status()))
}

fn creation_request(args: CreateArgs) -> CreationRequest {
    let request = CreationRequest::new(args.title, args.price, args.description, args.collection_id);
    match args.image_url {
        Some(url) => request.with_image_url(url),
        None => request,
    }
}

pub fn exit_code(status: CompletionStatus) -> i32 {
    match status {
        CompletionStatus::Completed => exit_codes::SUCCESS,
        CompletionStatus::PartiallyCompleted => exit_codes::PARTIAL,
        CompletionStatus::Failed => exit_codes::FAILURE,
    }
}

fn print_report(report: &CreationReport) {
    println!();
    match report {
        CreationReport::Failed { step, error } => {
            println!("{} {} failed, {}", "✗".bright_red().bold(), step, creation_failure_note(error.kind));
            print_failure(error);
        }
        CreationReport::Created {
            status,
            product,
            variant,
            collection,
            media,
        } => {
            println!("{} Product created: {}", "✓".bright_green().bold(), product.id.bright_green().bold());
            println!("  Variant: {}", product.variant.id.cyan());

            print_state("Price", variant, |v| format!("{} on {}", v.price, v.id));
            print_state("Collection", collection, |c| match &c.title {
                Some(title) => format!("{} ({})", c.collection_id, title),
                None => c.collection_id.clone(),
            });
            print_state("Media", media, |m| format!("{} ({})", m.media_content_type, m.status));

            println!();
            match status {
                CompletionStatus::Completed => println!("{}", "All steps completed.".bright_green()),
                _ => println!(
                    "{}",
                    "Product exists but some attachments failed; nothing was rolled back.".bright_yellow()
                ),
            }
        }
    }
}

/// A transport failure (timeout, dropped connection) can hide a create the
/// remote side already committed.
fn creation_failure_note(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::TransportFailure => "the product may not have been created; check the store before retrying",
        _ => "product was not created",
    }
}

fn print_state<T>(label: &str, state: &StepState<T>, describe: impl Fn(&T) -> String) {
    match state {
        StepState::Succeeded(value) => {
            println!("  {} {}: {}", "✓".bright_green(), label, describe(value));
        }
        StepState::Failed(failure) => {
            println!("  {} {}: {}", "✗".bright_red(), label, failure.kind.as_str().bright_red());
            print_failure(failure);
        }
        StepState::NotAttempted => {
            println!("  {} {}: {}", "-".dimmed(), label, "not attempted".dimmed());
        }
    }
}

fn print_failure(failure: &StepFailure) {
    println!("      {}", failure.detail.dimmed());
    for user_error in &failure.user_errors {
        println!("      • {}", user_error.describe().yellow());
    }
}

async fn list_products(client: &AdminClient, first: u32) -> Result<()> {
    let products = catalog::fetch_products(client, first).await?;

    if products.is_empty() {
        println!("  {}", "No products found".bright_yellow());
        return Ok(());
    }

    println!();
    println!("  {}", "Products:".bright_white().bold());
    for product in &products {
        let handle = product.handle.as_deref().unwrap_or("-");
        let image = product
            .featured_image
            .as_ref()
            .map(|image| image.url.as_str())
            .unwrap_or("no image");
        println!("  {} {} [{}] {}", product.title.bright_green(), handle.dimmed(), product.id.cyan(), image.dimmed());
    }
    println!();

    Ok(())
}

// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_typed::{
    BlockId, ClientConfig, Command, CommandLineInput, DatabaseId, ListChildrenOptions,
    NotionClient, NotionHttpClient, OpaqueValue, PageId, QueryDatabaseRequest, SearchRequest,
    Sort,
};
use serde::Serialize;
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_typed.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries the JSON output; logs go to stderr.
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_json_arg(raw: &str, what: &str) -> anyhow::Result<OpaqueValue> {
    serde_json::from_str(raw).with_context(|| format!("--{} is not valid JSON", what))
}

async fn run(cli: CommandLineInput) -> anyhow::Result<()> {
    let config = ClientConfig::resolve(&cli)?;
    let transport = NotionHttpClient::new(config.base_url.clone())?;
    let client = NotionClient::new(transport, config.api_key, config.version);

    match cli.command {
        Command::Children {
            block,
            all,
            start_cursor,
            page_size,
        } => {
            let block_id = BlockId::parse(&block)?;
            if all {
                let children = client.list_all_children(&block_id).await?;
                log::info!("Fetched {} children of {}", children.len(), block_id);
                print_json(&children)
            } else {
                let options = ListChildrenOptions {
                    start_cursor,
                    page_size,
                };
                print_json(&client.list_children_page(&block_id, &options).await?)
            }
        }
        Command::Append { block, json } => {
            let block_id = BlockId::parse(&block)?;
            let payload = parse_json_arg(&json, "json")?;
            print_json(&client.append_children(&block_id, &payload).await?)
        }
        Command::Search {
            query,
            filter,
            sort,
            start_cursor,
            page_size,
        } => {
            let request = SearchRequest {
                query,
                sort: sort.map(|order| Sort::last_edited(order.into())),
                filter: filter.map(Into::into),
                start_cursor,
                page_size,
            };
            let results = client.search(&request).await?;
            for result in &results.results {
                log::info!(
                    "{} {} '{}'",
                    result.object_type_name(),
                    result.id(),
                    result.display_title()
                );
            }
            print_json(&results)
        }
        Command::Page {
            page,
            decode_properties,
        } => {
            let page = client.retrieve_page(&PageId::parse(&page)?).await?;
            if decode_properties {
                print_json(&page.decode_properties()?)
            } else {
                print_json(&page)
            }
        }
        Command::Database { database } => {
            print_json(&client.retrieve_database(&DatabaseId::parse(&database)?).await?)
        }
        Command::Query {
            database,
            filter,
            sorts,
            all,
        } => {
            let database_id = DatabaseId::parse(&database)?;
            let request = QueryDatabaseRequest {
                filter: filter.as_deref().map(|f| parse_json_arg(f, "filter")).transpose()?,
                sorts: sorts.as_deref().map(|s| parse_json_arg(s, "sorts")).transpose()?,
                ..QueryDatabaseRequest::default()
            };
            if all {
                print_json(&client.query_all_rows(&database_id, &request).await?)
            } else {
                print_json(&client.query_database(&database_id, &request).await?)
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    run(cli).await
}

// src/config.rs
use crate::api::{SearchFilter, SortDirection};
use crate::constants::{NOTION_API_BASE_URL, NOTION_API_VERSION};
use crate::error::AppError;
use crate::types::{ApiKey, ApiVersion, BaseUrl};
use clap::{Parser, Subcommand, ValueEnum};

/// Environment variable holding the integration token.
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Value sent in the Notion-Version header
    #[arg(long, global = true, default_value = NOTION_API_VERSION)]
    pub notion_version: String,

    /// API root every endpoint is joined onto
    #[arg(long, global = true, default_value = NOTION_API_BASE_URL)]
    pub base_url: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the children of a block or page
    Children {
        /// Block or page URL or ID
        block: String,

        /// Follow cursors and print every child
        #[arg(long, default_value_t = false)]
        all: bool,

        /// Cursor returned by a previous call
        #[arg(long)]
        start_cursor: Option<String>,

        /// Number of children per page (max 100)
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Append children to a block; the payload is sent as the request body
    Append {
        /// Block or page URL or ID
        block: String,

        /// JSON body, e.g. '{"children": [...]}'
        #[arg(long)]
        json: String,
    },

    /// Search pages and databases shared with the integration
    Search {
        /// Text to search titles for
        #[arg(short, long)]
        query: Option<String>,

        /// Only return one kind of object
        #[arg(long, value_enum)]
        filter: Option<ObjectKind>,

        /// Order by last edited time
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        #[arg(long)]
        start_cursor: Option<String>,

        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Retrieve a page
    Page {
        /// Page URL or ID
        page: String,

        /// Decode the raw property values into typed properties
        #[arg(long, default_value_t = false)]
        decode_properties: bool,
    },

    /// Retrieve a database and its property schema
    Database {
        /// Database URL or ID
        database: String,
    },

    /// Query the rows of a database
    Query {
        /// Database URL or ID
        database: String,

        /// Filter object in the API's filter grammar
        #[arg(long)]
        filter: Option<String>,

        /// Sorts array in the API's sort grammar
        #[arg(long)]
        sorts: Option<String>,

        /// Follow cursors and print every row
        #[arg(long, default_value_t = false)]
        all: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Page,
    Database,
}

impl From<ObjectKind> for SearchFilter {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Page => SearchFilter::object("page"),
            ObjectKind::Database => SearchFilter::object("database"),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Ascending,
            SortOrder::Desc => SortDirection::Descending,
        }
    }
}

/// Resolved client configuration, validated and ready to build a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub version: ApiVersion,
    pub base_url: BaseUrl,
}

impl ClientConfig {
    /// Resolves the configuration from CLI input and the environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        Self::from_parts(
            std::env::var(API_KEY_ENV).ok(),
            &cli.notion_version,
            &cli.base_url,
        )
    }

    pub fn from_parts(
        api_key: Option<String>,
        version: &str,
        base_url: &str,
    ) -> Result<Self, AppError> {
        let api_key = api_key.filter(|key| !key.is_empty()).ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            version: ApiVersion::new(version)?,
            base_url: BaseUrl::parse(base_url)?,
        })
    }
}

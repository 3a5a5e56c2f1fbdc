//! Blog CLI client.
//!
//! Drives the four post RPCs against a running server.

use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use blog_shared::AppConfig;
use blog_shared::StatusBody;
use blog_shared::dto::{
    CreatePostRequest, CreatePostResponse, DeletePostRequest, DeletePostResponse, GetPostRequest,
    GetPostResponse, UpdatePostRequest, UpdatePostResponse,
};

const SERVICE_PATH: &str = "/blog.v1.BlogService";

#[derive(Parser, Debug)]
#[command(name = "blog-client", about = "Create, read, update and delete blog posts")]
struct Cli {
    /// Server address, overrides CLIENT_SERVER_ADDRESS
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a post
    Create(PostFields),
    /// Fetch a post by id
    Get {
        #[arg(long)]
        id: String,
    },
    /// Replace title, content, author and tags of a post
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: PostFields,
    },
    /// Delete a post by id
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug)]
struct PostFields {
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    content: String,
    #[arg(long, default_value = "")]
    author: String,
    /// Publication date, ignored on update
    #[arg(long, default_value = "")]
    date: String,
    /// Comma separated tags
    #[arg(long, default_value = "")]
    tags: String,
}

/// Describe a failed call by its canonical code rather than the raw number.
fn failure_message(method: &str, status: &StatusBody) -> String {
    format!("{method} failed with {}: {}", status.code(), status.message)
}

/// Split a comma separated list, dropping empty segments.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

struct BlogClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlogClient {
    fn new(address: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;

        let base_url = if address.starts_with("http://") || address.starts_with("https://") {
            address.trim_end_matches('/').to_string()
        } else {
            format!("http://{address}")
        };

        Ok(Self { http, base_url })
    }

    async fn call<Req, Resp>(&self, method: &str, req: &Req) -> anyhow::Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{SERVICE_PATH}/{method}", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?;

        if response.status().is_success() {
            return response
                .json()
                .await
                .with_context(|| format!("malformed {method} response"));
        }

        let http_status = response.status();
        match response.json::<StatusBody>().await {
            Ok(status) => bail!(failure_message(method, &status)),
            Err(_) => bail!("{method} failed with HTTP {http_status}"),
        }
    }
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let address = cli.server.unwrap_or(config.client.server_address);
    let client = BlogClient::new(&address, Duration::from_secs(config.client.timeout_seconds))?;

    match cli.command {
        Command::Create(fields) => {
            let req = CreatePostRequest {
                title: fields.title,
                content: fields.content,
                author: fields.author,
                publication_date: fields.date,
                tags: split_tags(&fields.tags),
            };
            let resp: CreatePostResponse = client.call("CreatePost", &req).await?;
            println!("created post: {:#?}", resp.post);
        }
        Command::Get { id } => {
            let resp: GetPostResponse = client
                .call("GetPost", &GetPostRequest { post_id: id })
                .await?;
            println!("post: {:#?}", resp.post);
        }
        Command::Update { id, fields } => {
            let req = UpdatePostRequest {
                post_id: id,
                title: fields.title,
                content: fields.content,
                author: fields.author,
                tags: split_tags(&fields.tags),
            };
            let resp: UpdatePostResponse = client.call("UpdatePost", &req).await?;
            println!("updated post: {:#?}", resp.post);
        }
        Command::Delete { id } => {
            let resp: DeletePostResponse = client
                .call("DeletePost", &DeletePostRequest { post_id: id })
                .await?;
            println!("delete success: {}", resp.success);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("failed to load config")?;
    tracing::debug!(?config, "Loaded configuration");

    run(cli, config).await
}

#[cfg(test)]
mod tests {
    use blog_shared::Code;

    use super::*;

    #[test]
    fn test_split_tags_drops_empty_segments() {
        assert_eq!(split_tags("rust,,grpc,"), vec!["rust", "grpc"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_failure_message_names_the_code() {
        let status = StatusBody::new(Code::NotFound, "post not found");
        assert_eq!(
            failure_message("GetPost", &status),
            "GetPost failed with NOT_FOUND: post not found"
        );

        let unknown = StatusBody {
            code: 99,
            status: "MYSTERY".to_string(),
            message: "internal error".to_string(),
        };
        assert_eq!(
            failure_message("DeletePost", &unknown),
            "DeletePost failed with INTERNAL: internal error"
        );
    }

    #[test]
    fn test_cli_parses_update() {
        let cli = Cli::try_parse_from([
            "blog-client",
            "update",
            "--id",
            "p1",
            "--title",
            "New",
            "--tags",
            "a,b",
        ])
        .unwrap();

        match cli.command {
            Command::Update { id, fields } => {
                assert_eq!(id, "p1");
                assert_eq!(fields.title, "New");
                assert_eq!(split_tags(&fields.tags), vec!["a", "b"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_base_url_adds_scheme() {
        let client = BlogClient::new("localhost:50051", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "http://localhost:50051");

        let client = BlogClient::new("https://blog.example/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "https://blog.example");
    }
}

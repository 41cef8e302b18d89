//! todosync-client CLI entry point.

use clap::Parser;
use todosync_client::cli::{Cli, Commands, OutputFormat};
use todosync_client::client::TodoSyncClient;
use todosync_client::output::{format_output, pretty};
use todosync_core::todo::{filter_by_name, CreateTodoRequest, UpdateTodoRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TodoSyncClient::new(&cli.base_url, &cli.token);

    match cli.command {
        Commands::Todos(todos_cmd) => {
            use todosync_client::cli::todos::TodosAction;
            match todos_cmd.action {
                TodosAction::List { search } => {
                    let mut todos = client.list_todos().await?;
                    if let Some(term) = search {
                        todos = filter_by_name(&todos, &term);
                    }
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todos, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_todos(&todos)),
                    }
                }
                TodosAction::Create {
                    name,
                    due_date,
                    description,
                } => {
                    let todo = client
                        .create_todo(CreateTodoRequest {
                            name,
                            due_date,
                            description,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_todo(&todo))
                        }
                    }
                }
                TodosAction::Update {
                    id,
                    name,
                    due_date,
                    description,
                    status,
                } => {
                    client
                        .update_todo(
                            id,
                            UpdateTodoRequest {
                                name,
                                due_date,
                                description,
                                status,
                            },
                        )
                        .await?;
                    if !cli.quiet {
                        println!("Updated todo {}", id);
                    }
                }
                TodosAction::Delete { id } => {
                    client.delete_todo(id).await?;
                    if !cli.quiet {
                        println!("Deleted todo {}", id);
                    }
                }
                TodosAction::Attach {
                    id,
                    file,
                    content_type,
                } => {
                    let bytes = std::fs::read(&file)?;
                    let upload_url = client.request_upload_url(id).await?;
                    client
                        .upload_attachment(&upload_url, bytes, &content_type)
                        .await?;
                    if !cli.quiet {
                        println!("Attached {} to todo {}", file.display(), id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use todosync_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Livez => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("Server is live at {}", client.base_url());
                    }
                }
            }
        }
    }

    Ok(())
}

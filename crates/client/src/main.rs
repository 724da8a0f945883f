use bookshelf_client::{AddBookForm, BooksView, BookshelfClient};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct CliOptions {
    /// The GraphQL endpoint of the Bookshelf API.
    #[clap(
        long,
        env = "BOOKSHELF_ENDPOINT",
        default_value = "http://localhost:3030/graphql"
    )]
    endpoint: Url,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists all books.
    List,
    /// Adds a book, then lists all books.
    Add {
        #[clap(long)]
        title: String,
        #[clap(long)]
        author: String,
        #[clap(long, allow_hyphen_values = true)]
        year: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = CliOptions::parse();
    let client = BookshelfClient::new(options.endpoint);
    let mut view = BooksView::new();

    match options.command {
        Command::List => {
            view.refresh(&client).await?;
        }
        Command::Add {
            title,
            author,
            year,
        } => {
            let mut form = AddBookForm {
                title,
                author,
                year,
            };
            let title = form.submit(&client, &mut view).await?;
            println!("Added \"{}\"", title);
        }
    }

    print!("{}", view.render());
    Ok(())
}

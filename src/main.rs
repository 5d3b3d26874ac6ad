use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::{error, info};

use retro_ideas::{Idea, IdeaSubmissionClient};

#[derive(Parser, Debug)]
#[command(name = "retro-ideas")]
#[command(about = "Submit an idea to a retro")]
#[command(version)]
struct Args {
    /// Column the idea belongs in, e.g. happy, meh, sad
    #[arg(short, long)]
    category: Option<String>,

    /// Idea text; words are joined with spaces
    #[arg(required = true)]
    text: Vec<String>,
}

impl Args {
    fn into_idea(self) -> Idea {
        let idea = Idea::new(self.text.join(" "));
        match self.category {
            Some(category) => idea.with_category(category),
            None => idea,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let idea = Args::parse().into_idea();
    let client = IdeaSubmissionClient::from_env()?;

    match client.submit(&idea).await {
        Ok(()) => {
            info!("Idea submitted to retro {}", client.context().retro_id());
            Ok(())
        }
        Err(e) => {
            error!("Failed to submit idea: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("retro-ideas").chain(list.iter().copied()))
    }

    #[test]
    fn joins_words_into_text() {
        let idea = parse(&["Add", "more", "breaks"]).unwrap().into_idea();
        assert_eq!(idea, Idea::new("Add more breaks"));
    }

    #[test]
    fn reads_category_flag() {
        let idea = parse(&["--category", "happy", "Pairing", "worked"])
            .unwrap()
            .into_idea();
        assert_eq!(idea, Idea::new("Pairing worked").with_category("happy"));

        let idea = parse(&["-c", "sad", "Flaky", "CI"]).unwrap().into_idea();
        assert_eq!(idea, Idea::new("Flaky CI").with_category("sad"));
    }

    #[test]
    fn requires_text() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["-c", "sad"]).is_err());
        assert!(parse(&["Text", "--category"]).is_err());
    }

    #[test]
    fn args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

use completion_requester::{
    logging, CompletionRequester, Config, Error, OpenAIProvider, DEFAULT_MODEL, DEFAULT_PROMPT,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::from_env()?;
    let provider = OpenAIProvider::from_config(&config)?;
    let requester = CompletionRequester::new(provider, DEFAULT_MODEL);

    let mut stdout = std::io::stdout().lock();
    requester.print_completion(DEFAULT_PROMPT, &mut stdout).await
}

#[cfg(test)]
pub mod tests {
    use reqwest::Client;
    use std::sync::Arc;

    use lexicon_app::{
        app::AppBus, config::Config, test_utils::tests::MockUnitOfWorkProvider,
        uow::UnitOfWorkProvider,
    };
    use lexicon_ranking::models::example_suggestion::ExampleSuggestion;
    use lexicon_types::{Result, errors::ApplicationError};
    use lexicon_web::{AppState, WebRouter};

    pub struct TestServer {
        pub client: Client,
        pub base_url: String,
        pub uow_provider: Arc<MockUnitOfWorkProvider>,
    }

    impl TestServer {
        pub fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Serves the leaderboard routes on an ephemeral port, backed by
    /// in-memory repositories seeded with `suggestions`.
    pub async fn setup_web_app(suggestions: Vec<ExampleSuggestion>) -> Result<TestServer> {
        let uow_provider = Arc::new(MockUnitOfWorkProvider::new());
        {
            let uow = uow_provider.begin().await?;
            let repo = uow.example_suggestions();
            for suggestion in &suggestions {
                repo.save(suggestion).await?;
            }
        }

        let config = Arc::new(Config {
            rankings_per_page: 2,
            max_per_page: 100,
            http_port: 0,
        });
        let app_bus = Arc::new(AppBus::new(config, uow_provider.clone()));
        let router = WebRouter::router(AppState::new(app_bus));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        tokio::spawn(async move { axum::serve(listener, router).await });

        Ok(TestServer {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            uow_provider,
        })
    }
}

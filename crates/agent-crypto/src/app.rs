//! Application shell wiring the query and trend flows to a display surface
//!
//! Both flows are stateless: each action validates its input, shows a busy
//! status, does its work, renders the result and goes back to idle. Nothing
//! is carried over from one action to the next.

use crate::chart::TrendChart;
use crate::commands::Command;
use crate::display::{DisplaySurface, Status};
use crate::error::{CryptoError, Result};
use crate::query::{EMPTY_QUERY_WARNING, FAILURE_MESSAGE, QueryHandler, QueryOutcome};
use crate::series;
use crate::symbol::Symbol;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Shown when the symbol box is empty
pub const EMPTY_SYMBOL_WARNING: &str = "Please enter a cryptocurrency symbol.";

const QUERY_BUSY: &str = "Fetching information...";
const QUERY_SUCCESS: &str = "Here is the information:";

/// The crypto agent application
pub struct CryptoAgentApp<S: DisplaySurface> {
    queries: QueryHandler,
    surface: S,
}

impl<S: DisplaySurface> CryptoAgentApp<S> {
    pub fn new(queries: QueryHandler, surface: S) -> Self {
        Self { queries, surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Query flow: ask the model and show its answer.
    ///
    /// Empty input only produces a warning; the model is not called.
    pub async fn submit_query(&mut self, text: &str) -> Result<QueryOutcome> {
        let Ok(query) = QueryHandler::validate_query(text) else {
            self.surface.show_status(Status::warning(EMPTY_QUERY_WARNING))?;
            return Ok(QueryOutcome::Rejected(EMPTY_QUERY_WARNING));
        };

        self.surface.show_status(Status::busy(QUERY_BUSY))?;
        let outcome = self.queries.handle(query).await;

        // `query` is non-empty, so anything but an answer is a failure.
        if let QueryOutcome::Answered(answer) = &outcome {
            self.surface.show_status(Status::success(QUERY_SUCCESS))?;
            self.surface.render_text(answer)?;
        } else {
            self.surface.show_status(Status::error(FAILURE_MESSAGE))?;
        }

        self.surface.show_status(Status::Idle)?;
        Ok(outcome)
    }

    /// Trend flow: generate the simulated series and draw it.
    ///
    /// Returns the rendered chart, or `None` when the input was rejected.
    pub fn show_trends(&mut self, symbol: &str) -> Result<Option<TrendChart>> {
        if symbol.trim().is_empty() {
            self.surface.show_status(Status::warning(EMPTY_SYMBOL_WARNING))?;
            return Ok(None);
        }
        let symbol = Symbol::new(symbol);

        self.surface
            .show_status(Status::busy(format!("Loading trends for {symbol}...")))?;

        let series = series::generate(symbol.as_str());
        info!(symbol = %symbol, points = series.len(), "Rendering simulated trends");

        let rendered = if series.is_empty() {
            self.surface
                .show_status(Status::warning(format!("No data found for {symbol}.")))?;
            None
        } else {
            let chart = TrendChart::new(series);
            self.surface.render_chart(&chart)?;
            Some(chart)
        };

        self.surface.show_status(Status::Idle)?;
        Ok(rendered)
    }

    /// Run one parsed command
    pub async fn execute(&mut self, command: Command) -> Result<ControlFlow<()>> {
        debug!(?command, "Executing command");
        match command {
            Command::Query { text } => {
                self.submit_query(&text).await?;
            }
            Command::Trend { symbol } => {
                self.show_trends(&symbol)?;
            }
            Command::Help => self.surface.render_text(Command::help_text())?,
            Command::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Parse and run one line of input; bad commands become warnings.
    pub async fn process_input(&mut self, input: &str) -> Result<ControlFlow<()>> {
        match Command::parse(input) {
            Ok(command) => self.execute(command).await,
            Err(CryptoError::Command(msg)) => {
                self.surface
                    .show_status(Status::warning(format!("{msg}. Type /help for commands.")))?;
                Ok(ControlFlow::Continue(()))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProvider, test_config};
    use agent_llm::LLMError;
    use mockall::{Sequence, mock};

    mock! {
        pub Surface {}

        impl DisplaySurface for Surface {
            fn show_status(&mut self, status: Status) -> Result<()>;
            fn render_text(&mut self, text: &str) -> Result<()>;
            fn render_chart(&mut self, chart: &TrendChart) -> Result<()>;
        }
    }

    fn handler(provider: MockProvider) -> QueryHandler {
        QueryHandler::new(std::sync::Arc::new(provider), test_config())
    }

    fn silent_provider() -> MockProvider {
        let mut provider = MockProvider::new();
        provider.expect_complete().times(0);
        provider
    }

    #[tokio::test]
    async fn test_empty_query_warns_without_calling_model() {
        let mut surface = MockSurface::new();
        surface
            .expect_show_status()
            .times(1)
            .withf(|status| matches!(status, Status::Warning(m) if m == "Please enter a query."))
            .returning(|_| Ok(()));
        surface.expect_render_text().times(0);

        let mut app = CryptoAgentApp::new(handler(silent_provider()), surface);
        let outcome = app.submit_query("  \n").await.unwrap();
        assert!(matches!(outcome, QueryOutcome::Rejected(_)));
    }

    #[tokio::test]
    async fn test_failed_query_shows_generic_error() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Err(LLMError::AuthenticationFailed));

        let mut seq = Sequence::new();
        let mut surface = MockSurface::new();
        surface
            .expect_show_status()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|status| matches!(status, Status::Busy(_)))
            .returning(|_| Ok(()));
        surface
            .expect_show_status()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|status| matches!(status, Status::Error(m) if m == FAILURE_MESSAGE))
            .returning(|_| Ok(()));
        surface
            .expect_show_status()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|status| *status == Status::Idle)
            .returning(|_| Ok(()));
        surface.expect_render_text().times(0);

        let mut app = CryptoAgentApp::new(handler(provider), surface);
        let outcome = app.submit_query("Is now a good time to buy?").await.unwrap();
        assert_eq!(outcome, QueryOutcome::Failed(FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_query_sent_trimmed_and_answer_rendered() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .withf(|req| req.messages == vec![agent_llm::Message::user("What is DeFi?")])
            .returning(|_| {
                Ok(agent_llm::CompletionResponse {
                    message: agent_llm::Message::assistant("Decentralized finance."),
                    stop_reason: agent_llm::StopReason::EndTurn,
                    usage: None,
                })
            });

        let mut seq = Sequence::new();
        let mut surface = MockSurface::new();
        surface
            .expect_show_status()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|status| *status == Status::busy(QUERY_BUSY))
            .returning(|_| Ok(()));
        surface
            .expect_show_status()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|status| *status == Status::success(QUERY_SUCCESS))
            .returning(|_| Ok(()));
        surface
            .expect_render_text()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|text| text == "Decentralized finance.")
            .returning(|_| Ok(()));
        surface
            .expect_show_status()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|status| *status == Status::Idle)
            .returning(|_| Ok(()));

        let mut app = CryptoAgentApp::new(handler(provider), surface);
        let outcome = app.submit_query("\n  What is DeFi?  ").await.unwrap();
        assert_eq!(outcome, QueryOutcome::Answered("Decentralized finance.".to_string()));
    }

    #[test]
    fn test_trends_render_chart() {
        let mut seq = Sequence::new();
        let mut surface = MockSurface::new();
        surface
            .expect_show_status()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|status| matches!(status, Status::Busy(m) if m == "Loading trends for BTC..."))
            .returning(|_| Ok(()));
        surface
            .expect_render_chart()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|chart| chart.title == "BTC Price Trends" && chart.series.len() == 100)
            .returning(|_| Ok(()));
        surface
            .expect_show_status()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|status| *status == Status::Idle)
            .returning(|_| Ok(()));

        let mut app = CryptoAgentApp::new(handler(silent_provider()), surface);
        let chart = app.show_trends("btc").unwrap();
        assert!(chart.is_some());
    }

    #[test]
    fn test_empty_symbol_warns() {
        let mut surface = MockSurface::new();
        surface
            .expect_show_status()
            .times(1)
            .withf(|status| matches!(status, Status::Warning(m) if m == EMPTY_SYMBOL_WARNING))
            .returning(|_| Ok(()));
        surface.expect_render_chart().times(0);

        let mut app = CryptoAgentApp::new(handler(silent_provider()), surface);
        assert!(app.show_trends("   ").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exit_and_unknown_command() {
        let mut surface = MockSurface::new();
        surface
            .expect_show_status()
            .times(1)
            .withf(|status| matches!(status, Status::Warning(m) if m.starts_with("Unknown command: /moon")))
            .returning(|_| Ok(()));

        let mut app = CryptoAgentApp::new(handler(silent_provider()), surface);
        assert_eq!(
            app.process_input("/moon").await.unwrap(),
            ControlFlow::Continue(())
        );
        assert_eq!(app.process_input("/exit").await.unwrap(), ControlFlow::Break(()));
    }
}

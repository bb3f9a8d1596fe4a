//! Timed mini-game rounds

use super::{ensure_ok, Session};
use crate::countdown::countdown;
use matchfarm_core::{Error, GameClaimRequest, GamePlay, GameRule, Result};
use matchfarm_networking::Endpoint;
use rand::Rng;
use tracing::{info, warn};

impl Session<'_> {
    /// Play every remaining game
    ///
    /// A round whose claim fails is not counted; a fresh round is started
    /// instead, up to `max_game_claim_failures` consecutive failures.
    pub(super) async fn play_games(&mut self) -> Result<()> {
        let response = self.get(Endpoint::GameRule).await?;
        ensure_ok(Endpoint::GameRule, &response)?;
        let rule: GameRule = response.data(Endpoint::GameRule)?;

        let mut remaining = rule.game_count.max(0);
        info!("Remaining game plays: {}", remaining);

        let mut consecutive_failures: u32 = 0;
        while remaining > 0 {
            let response = self.get(Endpoint::GamePlay).await?;
            ensure_ok(Endpoint::GamePlay, &response)?;
            let play: GamePlay = response.data(Endpoint::GamePlay)?;
            info!("Starting game ID: {}", play.game_id);

            countdown(self.config.game_dwell_secs, self.config.show_countdown).await;

            let point = rand::thread_rng().gen_range(self.config.score_range());
            let claim = GameClaimRequest {
                game_id: play.game_id,
                point,
            };
            let response = self.post(Endpoint::GameClaim, &claim).await?;

            if !response.is_ok() {
                consecutive_failures += 1;
                warn!("Unable to end game! Status: {}", response.status);
                if consecutive_failures >= self.config.max_game_claim_failures {
                    return Err(Error::GameClaimExhausted {
                        failures: consecutive_failures,
                    });
                }
                continue;
            }

            consecutive_failures = 0;
            remaining -= 1;
            self.report.games_played += 1;
            info!("Game completed, earned: {}", point);
            info!("Remaining game plays: {}", remaining);
        }

        warn!("No more game plays!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::test_config;
    use crate::session::Session;
    use crate::testing::{ScriptedTransport, CREDENTIAL_LINE};
    use matchfarm_core::{Credential, Error, SessionConfig};
    use matchfarm_networking::Endpoint;
    use serde_json::json;

    fn session<'a>(transport: &'a ScriptedTransport, config: &'a SessionConfig) -> Session<'a> {
        Session::new(transport, config, Credential::parse(CREDENTIAL_LINE).unwrap())
    }

    #[tokio::test]
    async fn test_each_success_decrements_once() {
        let transport = ScriptedTransport::happy_path()
            .with_default(Endpoint::GameRule, 200, json!({"data": {"game_count": 3}}));
        let config = test_config();
        let mut session = session(&transport, &config);

        session.play_games().await.unwrap();

        assert_eq!(transport.count(Endpoint::GamePlay), 3);
        assert_eq!(transport.count(Endpoint::GameClaim), 3);
        assert_eq!(session.report.games_played, 3);
    }

    #[tokio::test]
    async fn test_failed_claim_restarts_round_without_decrement() {
        let transport = ScriptedTransport::happy_path()
            .with_default(Endpoint::GameRule, 200, json!({"data": {"game_count": 2}}))
            .on(Endpoint::GameClaim, 500, json!({}));
        let config = test_config();
        let mut session = session(&transport, &config);

        session.play_games().await.unwrap();

        assert_eq!(transport.count(Endpoint::GamePlay), 3);
        assert_eq!(session.report.games_played, 2);
    }

    #[tokio::test]
    async fn test_scores_stay_in_range() {
        let transport = ScriptedTransport::happy_path()
            .with_default(Endpoint::GameRule, 200, json!({"data": {"game_count": 20}}));
        let config = test_config();
        let mut session = session(&transport, &config);

        session.play_games().await.unwrap();

        for call in transport.calls().iter().filter(|c| c.endpoint == Endpoint::GameClaim) {
            let body = call.body.as_ref().unwrap();
            let point = body["point"].as_u64().unwrap();
            assert!((100..=150).contains(&point), "score {point} out of range");
            assert_eq!(body["game_id"], json!("g-1"));
        }
    }

    #[tokio::test]
    async fn test_persistent_claim_failure_is_bounded() {
        let transport = ScriptedTransport::happy_path()
            .with_default(Endpoint::GameClaim, 500, json!({}));
        let config = SessionConfig {
            max_game_claim_failures: 3,
            ..test_config()
        };
        let mut session = session(&transport, &config);

        let err = session.play_games().await.unwrap_err();

        assert!(matches!(err, Error::GameClaimExhausted { failures: 3 }));
        assert_eq!(transport.count(Endpoint::GamePlay), 3);
        assert_eq!(session.report.games_played, 0);
    }

    #[tokio::test]
    async fn test_failed_start_aborts() {
        let transport = ScriptedTransport::happy_path().with_default(Endpoint::GamePlay, 500, json!({}));
        let config = test_config();
        let mut session = session(&transport, &config);

        assert!(matches!(
            session.play_games().await,
            Err(Error::ApiStatus { status: 500, .. })
        ));
        assert_eq!(transport.count(Endpoint::GameClaim), 0);
    }

    #[tokio::test]
    async fn test_no_games_left() {
        let transport = ScriptedTransport::happy_path()
            .with_default(Endpoint::GameRule, 200, json!({"data": {"game_count": 0}}));
        let config = test_config();
        let mut session = session(&transport, &config);

        session.play_games().await.unwrap();
        assert_eq!(transport.count(Endpoint::GamePlay), 0);
    }
}

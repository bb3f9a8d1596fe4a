//! Daily quiz

use super::Session;
use matchfarm_core::{QuizQuestion, QuizSubmission, Result};
use matchfarm_networking::Endpoint;
use tracing::{debug, info, warn};

impl Session<'_> {
    /// Answer today's quiz; every failure here is soft
    pub(super) async fn complete_quiz(&self) -> bool {
        match self.submit_quiz().await {
            Ok(true) => {
                info!("Successfully answered quiz questions!");
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!("Quiz unavailable, probably already answered today: {}", e);
                false
            }
        }
    }

    async fn submit_quiz(&self) -> Result<bool> {
        let response = self.get(Endpoint::QuizProgress).await?;
        if !response.is_ok() {
            warn!("Error fetching quiz questions! Status: {}", response.status);
            return Ok(false);
        }

        let questions: Vec<QuizQuestion> = response.data(Endpoint::QuizProgress)?;
        let submission = QuizSubmission::from_questions(&questions);
        debug!("Submitting {} quiz answers", submission.answer_result.len());

        let response = self.post(Endpoint::QuizSubmit, &submission).await?;
        if response.is_ok() && response.code() == Some(200) {
            Ok(true)
        } else {
            warn!(
                "Error submitting quiz answers! Status: {}, code: {:?}",
                response.status,
                response.code()
            );
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::test_config;
    use crate::session::Session;
    use crate::testing::{ScriptedTransport, CREDENTIAL_LINE};
    use matchfarm_core::Credential;
    use matchfarm_networking::Endpoint;
    use serde_json::json;

    #[tokio::test]
    async fn test_quiz_submits_flagged_answers_in_one_batch() {
        let transport = ScriptedTransport::happy_path();
        let config = test_config();
        let session = Session::new(&transport, &config, Credential::parse(CREDENTIAL_LINE).unwrap());

        assert!(session.complete_quiz().await);

        let submit = transport
            .calls()
            .into_iter()
            .find(|call| call.endpoint == Endpoint::QuizSubmit)
            .unwrap();
        assert_eq!(
            submit.body.unwrap(),
            json!({"answer_result": [{"quiz_id": 1, "selected_item": "B", "correct_item": "B"}]})
        );
    }

    #[tokio::test]
    async fn test_rejected_submission_is_soft() {
        let transport = ScriptedTransport::happy_path()
            .on(Endpoint::QuizSubmit, 200, json!({"code": 500, "msg": "already answered"}));
        let config = test_config();
        let session = Session::new(&transport, &config, Credential::parse(CREDENTIAL_LINE).unwrap());

        assert!(!session.complete_quiz().await);
    }

    #[tokio::test]
    async fn test_unreadable_questions_are_soft() {
        let transport = ScriptedTransport::happy_path()
            .on(Endpoint::QuizProgress, 200, json!({"code": 200, "data": null}));
        let config = test_config();
        let session = Session::new(&transport, &config, Credential::parse(CREDENTIAL_LINE).unwrap());

        assert!(!session.complete_quiz().await);
        assert_eq!(transport.count(Endpoint::QuizSubmit), 0);
    }
}

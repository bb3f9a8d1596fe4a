//! Scripted transport for session and scheduler tests

use async_trait::async_trait;
use matchfarm_core::{EpochMillis, Result};
use matchfarm_networking::{ApiResponse, Endpoint, Transport};
use reqwest::header::HeaderMap;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// uid 42, first name "Ann"
pub(crate) const CREDENTIAL_LINE: &str = "query_id=AAF&user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Ann%22%2C%22last_name%22%3A%22Lee%22%2C%22username%22%3A%22ann%22%7D&auth_date=1700000000&hash=abc";

/// uid 43, first name "Bo"
pub(crate) const SECOND_CREDENTIAL_LINE: &str = "query_id=AAG&user=%7B%22id%22%3A43%2C%22first_name%22%3A%22Bo%22%2C%22username%22%3A%22bo%22%7D&auth_date=1700000000&hash=def";

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub endpoint: Endpoint,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// Replies from per-endpoint queues, falling back to a fixed default once a
/// queue runs dry; endpoints with neither answer 404.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    queued: Mutex<HashMap<Endpoint, VecDeque<ApiResponse>>>,
    defaults: HashMap<Endpoint, ApiResponse>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    /// Every endpoint succeeds; one task, one game, farm matures in two hours
    pub fn happy_path() -> Self {
        let farming_until = EpochMillis::now().as_i64() + 7_200_000;

        Self::default()
            .with_default(Endpoint::Login, 200, json!({"code": 200, "data": {"token": "token-abc"}}))
            .with_default(Endpoint::Balance, 200, json!({"code": 200, "data": 5000}))
            .with_default(
                Endpoint::QuizProgress,
                200,
                json!({"code": 200, "data": [
                    {"Id": 1, "items": [
                        {"number": "A", "is_correct": false},
                        {"number": "B", "is_correct": true}
                    ]}
                ]}),
            )
            .with_default(Endpoint::QuizSubmit, 200, json!({"code": 200, "data": true}))
            .with_default(
                Endpoint::DailyTaskStatus,
                200,
                json!({"code": 200, "data": [
                    {"type": "daily", "current_count": 0, "task_count": 1},
                    {"type": "game", "current_count": 0, "task_count": 1}
                ]}),
            )
            .with_default(Endpoint::DailyPurchase, 200, json!({"code": 200, "data": "ok"}))
            .with_default(
                Endpoint::RewardStatus,
                200,
                json!({"code": 200, "data": {"next_claim_timestamp": farming_until}}),
            )
            .with_default(Endpoint::RewardFarming, 200, json!({"code": 200, "data": true}))
            .with_default(Endpoint::RewardClaim, 200, json!({"code": 200, "data": 1000}))
            .with_default(
                Endpoint::TaskList,
                200,
                json!({"code": 200, "data": {
                    "Tasks": [
                        {"name": "follow_x", "complete": false},
                        {"name": "join_match_group", "complete": false}
                    ],
                    "Extra Tasks": []
                }}),
            )
            .with_default(Endpoint::TaskComplete, 200, json!({"code": 200, "data": true}))
            .with_default(Endpoint::TaskClaim, 200, json!({"code": 200, "data": "success"}))
            .with_default(Endpoint::GameRule, 200, json!({"code": 200, "data": {"game_count": 1}}))
            .with_default(Endpoint::GamePlay, 200, json!({"code": 200, "data": {"game_id": "g-1"}}))
            .with_default(Endpoint::GameClaim, 200, json!({"code": 200, "data": true}))
    }

    pub fn with_default(mut self, endpoint: Endpoint, status: u16, body: Value) -> Self {
        self.defaults.insert(endpoint, ApiResponse::new(status, Some(body)));
        self
    }

    /// Queue a one-shot reply, served before the endpoint's default
    pub fn on(self, endpoint: Endpoint, status: u16, body: Value) -> Self {
        self.queued
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(ApiResponse::new(status, Some(body)));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.calls().into_iter().map(|call| call.endpoint).collect()
    }

    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.calls().iter().filter(|call| call.endpoint == endpoint).count()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        endpoint: Endpoint,
        headers: &HeaderMap,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint,
            headers: headers.clone(),
            body: body.cloned(),
        });

        let queued = self
            .queued
            .lock()
            .unwrap()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front);

        Ok(queued
            .or_else(|| self.defaults.get(&endpoint).cloned())
            .unwrap_or_else(|| ApiResponse::new(404, None)))
    }
}

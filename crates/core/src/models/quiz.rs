//! Daily quiz models

use serde::{Deserialize, Serialize};

/// One question from `GET /daily/quiz/progress`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "Id")]
    pub id: serde_json::Value,
    #[serde(default)]
    pub items: Vec<QuizItem>,
}

/// A selectable answer; `number` is forwarded back as-is
#[derive(Debug, Clone, Deserialize)]
pub struct QuizItem {
    pub number: serde_json::Value,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizAnswer {
    pub quiz_id: serde_json::Value,
    pub selected_item: serde_json::Value,
    pub correct_item: serde_json::Value,
}

/// Body of `POST /daily/quiz/submit`
#[derive(Debug, Clone, Serialize)]
pub struct QuizSubmission {
    pub answer_result: Vec<QuizAnswer>,
}

impl QuizSubmission {
    /// Pick the flagged item of every question; questions without one are skipped
    pub fn from_questions(questions: &[QuizQuestion]) -> Self {
        let answer_result = questions
            .iter()
            .filter_map(|question| {
                let correct = question.items.iter().find(|item| item.is_correct)?;
                Some(QuizAnswer {
                    quiz_id: question.id.clone(),
                    selected_item: correct.number.clone(),
                    correct_item: correct.number.clone(),
                })
            })
            .collect();

        Self { answer_result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_uses_flagged_items() {
        let questions: Vec<QuizQuestion> = serde_json::from_value(json!([
            {"Id": 11, "items": [
                {"number": "A", "is_correct": false},
                {"number": "B", "is_correct": true}
            ]},
            {"Id": 12, "items": [
                {"number": "A", "is_correct": false}
            ]},
            {"Id": 13, "items": [
                {"number": "C", "is_correct": true}
            ]}
        ]))
        .unwrap();

        let submission = QuizSubmission::from_questions(&questions);
        assert_eq!(submission.answer_result.len(), 2);
        assert_eq!(submission.answer_result[0].quiz_id, json!(11));
        assert_eq!(submission.answer_result[0].selected_item, json!("B"));
        assert_eq!(submission.answer_result[0].correct_item, json!("B"));
        assert_eq!(submission.answer_result[1].quiz_id, json!(13));
    }
}

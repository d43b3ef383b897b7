// src/utils/quiz.rs

use std::collections::HashMap;

use rand::seq::SliceRandom;

use crate::{
    error::AppError,
    models::question::{PublicQuestion, Question, SubmittedAnswer},
};

/// Fixed, in-memory pool of multiple-choice questions.
#[derive(Debug, Clone)]
pub struct QuestionPool {
    questions: Vec<Question>,
    /// Question id -> index into `questions`.
    by_id: HashMap<i64, usize>,
}

impl QuestionPool {
    pub fn new(questions: Vec<Question>) -> Self {
        let by_id = questions
            .iter()
            .enumerate()
            .map(|(idx, q)| (q.id, idx))
            .collect();
        Self { questions, by_id }
    }

    /// The APUSH question set served under `/api/quiz/apush`.
    pub fn apush() -> Self {
        Self::new(APUSH_QUESTIONS.to_vec())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Question> {
        self.by_id.get(&id).map(|&idx| &self.questions[idx])
    }

    /// Draws `n` distinct questions uniformly at random, answers stripped.
    pub fn sample(&self, n: usize) -> Result<Vec<PublicQuestion>, AppError> {
        if n > self.questions.len() {
            return Err(AppError::BadRequest(format!(
                "Requested {} questions but the pool only has {}",
                n,
                self.questions.len()
            )));
        }

        let mut rng = rand::thread_rng();
        Ok(self
            .questions
            .choose_multiple(&mut rng, n)
            .map(PublicQuestion::from)
            .collect())
    }

    /// One point per answer that exactly matches the stored correct option.
    /// Unknown question ids score nothing.
    pub fn score(&self, answers: &[SubmittedAnswer]) -> i64 {
        answers
            .iter()
            .filter(|a| {
                self.get(a.question_id)
                    .is_some_and(|q| q.correct_answer == a.answer)
            })
            .count() as i64
    }
}

const APUSH_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        question: "Who was the first President of the United States?",
        options: ["John Adams", "George Washington", "Thomas Jefferson", "James Madison"],
        correct_answer: "George Washington",
    },
    Question {
        id: 2,
        question: "In what year was the Declaration of Independence signed?",
        options: ["1776", "1781", "1787", "1791"],
        correct_answer: "1776",
    },
    Question {
        id: 3,
        question: "Which document served as the first constitution of the United States?",
        options: [
            "The Federalist Papers",
            "The Bill of Rights",
            "The Articles of Confederation",
            "The Mayflower Compact",
        ],
        correct_answer: "The Articles of Confederation",
    },
    Question {
        id: 4,
        question: "Which purchase doubled the size of the United States in 1803?",
        options: ["Gadsden Purchase", "Alaska Purchase", "Louisiana Purchase", "Florida Purchase"],
        correct_answer: "Louisiana Purchase",
    },
    Question {
        id: 5,
        question: "Which Supreme Court case established judicial review?",
        options: ["Marbury v. Madison", "McCulloch v. Maryland", "Gibbons v. Ogden", "Dred Scott v. Sandford"],
        correct_answer: "Marbury v. Madison",
    },
    Question {
        id: 6,
        question: "Which compromise admitted Missouri as a slave state and Maine as a free state?",
        options: [
            "Compromise of 1850",
            "Missouri Compromise",
            "Great Compromise",
            "Three-Fifths Compromise",
        ],
        correct_answer: "Missouri Compromise",
    },
    Question {
        id: 7,
        question: "Who was President during the Civil War?",
        options: ["Andrew Johnson", "James Buchanan", "Abraham Lincoln", "Ulysses S. Grant"],
        correct_answer: "Abraham Lincoln",
    },
    Question {
        id: 8,
        question: "Which amendment abolished slavery?",
        options: ["13th Amendment", "14th Amendment", "15th Amendment", "19th Amendment"],
        correct_answer: "13th Amendment",
    },
    Question {
        id: 9,
        question: "Which amendment granted women the right to vote?",
        options: ["15th Amendment", "18th Amendment", "19th Amendment", "21st Amendment"],
        correct_answer: "19th Amendment",
    },
    Question {
        id: 10,
        question: "The New Deal was a series of programs enacted under which President?",
        options: ["Herbert Hoover", "Franklin D. Roosevelt", "Harry S. Truman", "Woodrow Wilson"],
        correct_answer: "Franklin D. Roosevelt",
    },
    Question {
        id: 11,
        question: "Which event brought the United States into World War II?",
        options: [
            "Sinking of the Lusitania",
            "Attack on Pearl Harbor",
            "Invasion of Poland",
            "Zimmermann Telegram",
        ],
        correct_answer: "Attack on Pearl Harbor",
    },
    Question {
        id: 12,
        question: "Which Supreme Court case declared segregated public schools unconstitutional?",
        options: ["Plessy v. Ferguson", "Roe v. Wade", "Brown v. Board of Education", "Miranda v. Arizona"],
        correct_answer: "Brown v. Board of Education",
    },
    Question {
        id: 13,
        question: "Which policy aimed to contain the spread of communism after World War II?",
        options: ["Manifest Destiny", "Containment", "Isolationism", "Dollar Diplomacy"],
        correct_answer: "Containment",
    },
    Question {
        id: 14,
        question: "Who delivered the \"I Have a Dream\" speech in 1963?",
        options: ["Malcolm X", "Martin Luther King Jr.", "John Lewis", "Thurgood Marshall"],
        correct_answer: "Martin Luther King Jr.",
    },
    Question {
        id: 15,
        question: "Which scandal led to the resignation of President Richard Nixon?",
        options: ["Teapot Dome", "Iran-Contra", "Watergate", "Credit Mobilier"],
        correct_answer: "Watergate",
    },
];

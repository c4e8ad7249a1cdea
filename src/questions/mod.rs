use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

mod pool;

pub const CHOICES_PER_QUESTION: usize = 4;

/// A multiple-choice trivia question. Content is immutable and shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub choices: [&'static str; CHOICES_PER_QUESTION],
    pub answer: usize,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer
    }

    pub fn correct_choice(&self) -> &'static str {
        self.choices[self.answer]
    }
}

/// Result of a draw. `recycled` is set when the unused pool had run dry and
/// the used-set was cleared to serve this question.
#[derive(Debug, Clone, Copy)]
pub struct QuestionDraw {
    pub question: &'static Question,
    pub recycled: bool,
}

/// Serves questions without repetition until the pool is exhausted.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    used: HashSet<u32>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool() -> &'static [Question] {
        &pool::POOL
    }

    pub fn pool_size(&self) -> usize {
        pool::POOL.len()
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn remaining(&self) -> usize {
        self.pool_size() - self.used.len()
    }

    pub fn reset(&mut self) {
        self.used.clear();
    }

    pub fn draw(&mut self, rng: &mut impl Rng) -> QuestionDraw {
        let unused: Vec<&'static Question> = pool::POOL
            .iter()
            .filter(|q| !self.used.contains(&q.id))
            .collect();

        if let Some(question) = unused.choose(rng).copied() {
            self.used.insert(question.id);
            return QuestionDraw {
                question,
                recycled: false,
            };
        }

        // Exhausted: start over, and leave this pick out of the fresh used-set.
        self.used.clear();
        let idx = rng.gen_range(0..pool::POOL.len());
        QuestionDraw {
            question: &pool::POOL[idx],
            recycled: true,
        }
    }
}

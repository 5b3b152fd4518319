//! In-process idea collection and lifecycle transitions.
//!
//! Ids are assigned from a counter that only moves forward, so an id is never
//! handed out twice even if ideas are dropped from the list later. Reads come
//! back in append order.

mod demo;

use chrono::{DateTime, Utc};
use social_agent_core::{Idea, IdeaStage, IdeaStatus};

use crate::engagement::{EngagementGenerator, RandomEngagement};
use crate::error::ContentError;

/// A lifecycle step applied to one idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Approve,
    Schedule,
    Publish,
}

impl Transition {
    /// Status an idea must be in for this step to apply.
    #[must_use]
    pub fn requires(self) -> IdeaStatus {
        match self {
            Transition::Approve => IdeaStatus::Draft,
            Transition::Schedule => IdeaStatus::Approved,
            Transition::Publish => IdeaStatus::Scheduled,
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Approve => write!(f, "approve"),
            Transition::Schedule => write!(f, "schedule"),
            Transition::Publish => write!(f, "publish"),
        }
    }
}

pub struct IdeaStore {
    ideas: Vec<Idea>,
    next_id: i64,
    engagement: Box<dyn EngagementGenerator>,
}

impl Default for IdeaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaStore {
    /// Empty store with random engagement.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(Box::new(RandomEngagement))
    }

    #[must_use]
    pub fn with_generator(engagement: Box<dyn EngagementGenerator>) -> Self {
        Self {
            ideas: Vec::new(),
            next_id: 1,
            engagement,
        }
    }

    /// Seeds the demo board: two scheduled ideas and three posted ones.
    #[must_use]
    pub fn with_demo_ideas(mut self) -> Self {
        for idea in demo::ideas() {
            self.push_with_fresh_id(idea);
        }
        self
    }

    fn push_with_fresh_id(&mut self, mut idea: Idea) -> &Idea {
        idea.id = self.next_id;
        self.next_id += 1;
        self.ideas.push(idea);
        &self.ideas[self.ideas.len() - 1]
    }

    /// Appends `idea` as a new draft under a freshly assigned id.
    ///
    /// Whatever id and stage the caller supplied are discarded.
    pub fn append_draft(&mut self, mut idea: Idea) -> Idea {
        idea.stage = IdeaStage::Draft;
        self.push_with_fresh_id(idea).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    #[must_use]
    pub fn list(&self) -> &[Idea] {
        &self.ideas
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Idea> {
        self.ideas.iter().find(|i| i.id == id)
    }

    /// Ideas satisfying `predicate`, in append order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&Idea>
    where
        P: Fn(&Idea) -> bool,
    {
        self.ideas.iter().filter(|i| predicate(i)).collect()
    }

    #[must_use]
    pub fn by_status(&self, status: IdeaStatus) -> Vec<&Idea> {
        self.filter(|i| i.status() == status)
    }

    fn find_mut(&mut self, id: i64) -> Result<&mut Idea, ContentError> {
        self.ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(ContentError::NotFound { kind: "idea", id })
    }

    /// Moves a draft to `approved`. Approving an approved idea is a no-op.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] for an unknown id,
    /// [`ContentError::InvalidTransition`] if the idea is scheduled or posted.
    pub fn approve(&mut self, id: i64) -> Result<&Idea, ContentError> {
        let idea = self.find_mut(id)?;
        match idea.stage {
            IdeaStage::Draft => {
                idea.stage = IdeaStage::Approved;
                tracing::debug!(id, "idea approved");
            }
            IdeaStage::Approved => {}
            _ => return Err(invalid(idea, Transition::Approve)),
        }
        Ok(&*idea)
    }

    /// Moves an approved idea to `scheduled` for `at`.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] for an unknown id,
    /// [`ContentError::InvalidTransition`] unless the idea is approved.
    pub fn schedule(&mut self, id: i64, at: DateTime<Utc>) -> Result<&Idea, ContentError> {
        let idea = self.find_mut(id)?;
        if idea.status() != Transition::Schedule.requires() {
            return Err(invalid(idea, Transition::Schedule));
        }
        idea.stage = IdeaStage::Scheduled { scheduled_for: at };
        tracing::debug!(id, scheduled_for = %at, "idea scheduled");
        Ok(&*idea)
    }

    /// Moves a scheduled idea to `posted` at `now` with generated engagement.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] for an unknown id,
    /// [`ContentError::InvalidTransition`] unless the idea is scheduled.
    pub fn publish(&mut self, id: i64, now: DateTime<Utc>) -> Result<&Idea, ContentError> {
        let index = self
            .ideas
            .iter()
            .position(|i| i.id == id)
            .ok_or(ContentError::NotFound { kind: "idea", id })?;
        if self.ideas[index].status() != Transition::Publish.requires() {
            return Err(invalid(&self.ideas[index], Transition::Publish));
        }
        let engagement = self.engagement.generate();
        let idea = &mut self.ideas[index];
        idea.stage = IdeaStage::Posted {
            published_at: now,
            engagement,
        };
        tracing::debug!(id, likes = engagement.likes, "idea published");
        Ok(&*idea)
    }
}

fn invalid(idea: &Idea, action: Transition) -> ContentError {
    ContentError::InvalidTransition {
        id: idea.id,
        from: idea.status(),
        action,
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

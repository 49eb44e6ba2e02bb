//! Shared default configuration steps.

use std::sync::Arc;

use parking_lot::RwLock;

/// A configuration step applied to a builder before it is built.
pub type ConfigureStep<B> = Arc<dyn Fn(&mut B) + Send + Sync>;

/// Append-only list of steps applied to every newly created slot.
///
/// Appends copy the list; readers take an `Arc` snapshot, so a slot never sees
/// steps added after it was created.
pub struct DefaultSteps<B> {
    steps: RwLock<Arc<[ConfigureStep<B>]>>,
}

impl<B> DefaultSteps<B> {
    pub fn new() -> Self {
        Self {
            steps: RwLock::new(Arc::from(Vec::<ConfigureStep<B>>::new())),
        }
    }

    /// Append a step after all previously added ones.
    pub fn push(&self, step: ConfigureStep<B>) {
        let mut steps = self.steps.write();
        let mut next: Vec<ConfigureStep<B>> = steps.iter().cloned().collect();
        next.push(step);
        *steps = Arc::from(next);
    }

    /// Immutable view of the current list.
    pub fn snapshot(&self) -> Arc<[ConfigureStep<B>]> {
        self.steps.read().clone()
    }

    pub fn len(&self) -> usize {
        self.steps.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.read().is_empty()
    }
}

impl<B> Default for DefaultSteps<B> {
    fn default() -> Self {
        Self::new()
    }
}

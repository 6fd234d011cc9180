use std::collections::HashSet;
use std::hash::Hash;

pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot scroll animations.
///
/// An observed element is marked animated the first time at least
/// [`REVEAL_THRESHOLD`] of it is visible, then dropped from observation.
#[derive(Debug)]
pub struct ScrollReveal<K> {
    threshold: f64,
    observed: HashSet<K>,
    animated: HashSet<K>,
}

impl<K: Eq + Hash + Clone> Default for ScrollReveal<K> {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl<K: Eq + Hash + Clone> ScrollReveal<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: HashSet::new(),
            animated: HashSet::new(),
        }
    }

    /// Returns false for elements that already animated.
    pub fn observe(&mut self, element: K) -> bool {
        if self.animated.contains(&element) {
            return false;
        }
        self.observed.insert(element)
    }

    /// Feeds a visibility change. Returns true only when `element` becomes animated.
    pub fn on_visibility(&mut self, element: &K, visible_ratio: f64) -> bool {
        if visible_ratio < self.threshold || !self.observed.remove(element) {
            return false;
        }
        self.animated.insert(element.clone());
        true
    }

    pub fn is_animated(&self, element: &K) -> bool {
        self.animated.contains(element)
    }

    pub fn is_observed(&self, element: &K) -> bool {
        self.observed.contains(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animates_once_at_threshold() {
        let mut reveal = ScrollReveal::default();
        assert!(reveal.observe("hero"));

        assert!(!reveal.on_visibility(&"hero", 0.05));
        assert!(!reveal.is_animated(&"hero"));

        assert!(reveal.on_visibility(&"hero", 0.1));
        assert!(reveal.is_animated(&"hero"));
        assert!(!reveal.is_observed(&"hero"));

        assert!(!reveal.on_visibility(&"hero", 0.0));
        assert!(!reveal.on_visibility(&"hero", 1.0));
        assert!(reveal.is_animated(&"hero"));
        assert!(!reveal.observe("hero"));
    }

    #[test]
    fn unobserved_elements_never_animate() {
        let mut reveal: ScrollReveal<u32> = ScrollReveal::default();
        assert!(!reveal.on_visibility(&7, 1.0));
        assert!(!reveal.is_animated(&7));
    }
}

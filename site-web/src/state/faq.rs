//! FAQ disclosure state

/// Which FAQ entry, if any, is expanded. At most one is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqViewState {
    expanded_index: Option<usize>,
}

impl FaqViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open entry `index`, or close it if it is the one already open.
    pub fn toggle(&mut self, index: usize) {
        self.expanded_index = match self.expanded_index {
            Some(open) if open == index => None,
            _ => Some(index),
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded_index == Some(index)
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: usize = 8;

    fn expanded_count(faq: &FaqViewState) -> usize {
        (0..ENTRIES).filter(|&i| faq.is_expanded(i)).count()
    }

    #[test]
    fn test_starts_collapsed() {
        let faq = FaqViewState::new();
        assert_eq!(faq.expanded_index(), None);
        assert_eq!(expanded_count(&faq), 0);
    }

    #[test]
    fn test_support_page_scenario() {
        let mut faq = FaqViewState::new();

        faq.toggle(0);
        assert!(faq.is_expanded(0));
        assert!(!faq.is_expanded(1));

        faq.toggle(0);
        assert_eq!(expanded_count(&faq), 0);

        faq.toggle(2);
        assert_eq!(faq.expanded_index(), Some(2));
        assert_eq!(expanded_count(&faq), 1);
    }

    #[test]
    fn test_opening_another_entry_closes_the_first() {
        let mut faq = FaqViewState::new();
        faq.toggle(1);
        faq.toggle(5);
        assert!(!faq.is_expanded(1));
        assert!(faq.is_expanded(5));
    }

    /// Every click sequence of length 4 over the first three entries.
    #[test]
    fn test_never_more_than_one_open() {
        for seq in 0..3usize.pow(4) {
            let mut faq = FaqViewState::new();
            let mut clicks = seq;
            for _ in 0..4 {
                let index = clicks % 3;
                clicks /= 3;

                let was_open = faq.is_expanded(index);
                faq.toggle(index);

                assert!(expanded_count(&faq) <= 1);
                assert_eq!(faq.is_expanded(index), !was_open);
            }
        }
    }
}

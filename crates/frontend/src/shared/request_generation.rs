//! Monotonic request tokens.
//!
//! Every fetch takes a token from [`RequestGeneration::next`]. When the
//! response arrives it is applied only if the token is still the latest one,
//! so a slow answer to an old query never overwrites a newer one.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Starts a new request and returns its token. Older tokens become stale.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }

    /// Makes every outstanding token stale without starting a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_wins() {
        let mut generation = RequestGeneration::default();
        let first = generation.next();
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate_discards_outstanding() {
        let mut generation = RequestGeneration::default();
        let token = generation.next();
        generation.invalidate();
        assert!(!generation.is_current(token));
        let next = generation.next();
        assert!(generation.is_current(next));
    }
}

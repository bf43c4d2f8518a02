use crate::tier::BlinkTier;

/// Destination of the period selected by the [`ModeSelector`]
pub trait PeriodSink {
    fn push_period(&mut self, period_ms: u32);
}

/// Edge handler cycling through the blink tiers
///
/// Owns the active tier: nothing else mutates it.
/// Bounce on the input produces extra edges and thus extra advances, no debouncing is done.
#[derive(Debug, Default)]
pub struct ModeSelector {
    tier: BlinkTier,
}

impl ModeSelector {
    /// Create a selector on the fastest tier
    pub fn new() -> Self {
        Self { tier: BlinkTier::Fast }
    }

    pub fn tier(&self) -> BlinkTier {
        self.tier
    }

    /// Handle one edge event: advance the tier and push its period exactly once
    pub fn on_edge<S: PeriodSink + ?Sized>(&mut self, sink: &mut S) -> BlinkTier {
        self.tier.next();
        sink.push_period(self.tier.period_ms());
        self.tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordSink {
        pushed: Vec<u32>,
    }

    impl PeriodSink for RecordSink {
        fn push_period(&mut self, period_ms: u32) {
            self.pushed.push(period_ms);
        }
    }

    #[test]
    fn starts_on_fast_tier() {
        assert_eq!(ModeSelector::new().tier(), BlinkTier::Fast);
        assert_eq!(ModeSelector::default().tier(), BlinkTier::Fast);
    }

    #[test]
    fn each_edge_pushes_one_period() {
        let mut selector = ModeSelector::new();
        let mut sink = RecordSink::default();
        assert_eq!(selector.on_edge(&mut sink), BlinkTier::Medium);
        assert_eq!(sink.pushed, [500]);
        assert_eq!(selector.on_edge(&mut sink), BlinkTier::Slow);
        assert_eq!(selector.on_edge(&mut sink), BlinkTier::Fast);
        assert_eq!(sink.pushed, [500, 1000, 250]);
    }

    #[test]
    fn long_press_sequence_stays_in_cycle() {
        let mut selector = ModeSelector::new();
        let mut sink = RecordSink::default();
        for n in 1..=30u32 {
            let tier = selector.on_edge(&mut sink);
            assert_eq!(tier.to_u8() as u32, (n % 3) + 1);
        }
        assert_eq!(sink.pushed.len(), 30);
        assert_eq!(selector.tier(), BlinkTier::Fast);
    }
}

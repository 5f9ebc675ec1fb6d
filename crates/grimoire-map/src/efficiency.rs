use grimoire_model::{AffinityTier, Efficiency, SpellContext};
use tracing::trace;

/// Element treated as neutral for every bloodline, on either side.
pub const NEUTRAL_ELEMENT: &str = "Sun";

#[derive(Debug, Clone, Copy)]
pub struct EfficiencyCalculator<'a> {
    context: &'a SpellContext,
}

impl<'a> EfficiencyCalculator<'a> {
    pub fn new(context: &'a SpellContext) -> Self {
        Self { context }
    }

    /// Affinity of a bloodline for an element.
    ///
    /// `Sun` on either side is neutral, a bloodline matching the element is
    /// `Best 100%`, otherwise the first tier (in [`AffinityTier::PRIORITY`]
    /// order) listing the element decides. Unlisted pairs are neutral.
    pub fn efficiency(&self, bloodline: &str, element: &str) -> Efficiency {
        if element == NEUTRAL_ELEMENT || bloodline == NEUTRAL_ELEMENT {
            return Efficiency::neutral();
        }
        if bloodline == element {
            return Efficiency::self_affinity();
        }
        let affinities = self.context.affinities();
        for tier in AffinityTier::PRIORITY {
            if affinities
                .elements(bloodline, tier)
                .iter()
                .any(|listed| listed == element)
            {
                trace!(bloodline, element, tier = tier.label(), "affinity tier found");
                return Efficiency::from_tier(tier);
            }
        }
        Efficiency::neutral()
    }
}

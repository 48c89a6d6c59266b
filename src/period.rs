multiversx_sc::imports!();

/// Period clock. All proposal windows are counted in periods of
/// `periodDuration` seconds since the organization was summoned.
#[multiversx_sc::module]
pub trait PeriodModule {
    fn init_period_clock(&self, period_duration: u64) {
        require!(period_duration > 0, "_periodDuration cannot be 0");

        let now = self.blockchain().get_block_timestamp();
        self.summoning_time().set(now);
        self.period_duration().set(period_duration);
    }

    /// `floor((now - summoningTime) / periodDuration)`, integer division only.
    #[view(getCurrentPeriod)]
    fn get_current_period(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let elapsed = now.saturating_sub(self.summoning_time().get());
        elapsed / self.period_duration().get()
    }

    #[view(getSummoningTime)]
    #[storage_mapper("summoningTime")]
    fn summoning_time(&self) -> SingleValueMapper<u64>;

    #[view(getPeriodDuration)]
    #[storage_mapper("periodDuration")]
    fn period_duration(&self) -> SingleValueMapper<u64>;
}

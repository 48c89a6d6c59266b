multiversx_sc::imports!();

/// Cost in EGLD to mint `quantity` internal tokens when `supply` tokens were
/// already minted, on the linear curve `price(n) = base_price + slope * n`.
///
/// Sums the per-token price over `[supply, supply + quantity)`:
/// `quantity * base_price + slope * (quantity * supply + quantity * (quantity - 1) / 2)`.
/// Non-decreasing in both `quantity` and `supply`.
pub fn linear_mint_cost<M: ManagedTypeApi>(
    base_price: &BigUint<M>,
    slope: &BigUint<M>,
    quantity: &BigUint<M>,
    supply: &BigUint<M>,
) -> BigUint<M> {
    if *quantity == 0u64 {
        return BigUint::zero();
    }

    let flat = base_price * quantity;
    let preceding = quantity * supply;
    let triangle = (quantity * &(quantity - &BigUint::from(1u64))) / BigUint::from(2u64);
    let ramp = slope * &(preceding + triangle);

    flat + ramp
}

/// Curved pricing for the guild bank's internal token. Quotes only; the guild
/// bank performs the mint when a proposal passes.
#[multiversx_sc::module]
pub trait PricingModule {
    fn init_curve(&self, base_price: BigUint, slope: BigUint) {
        require!(base_price > 0u64, "_curveBasePrice cannot be 0");

        self.curve_base_price().set(&base_price);
        self.curve_slope().set(&slope);
    }

    fn price_to_mint(&self, quantity: &BigUint, supply: &BigUint) -> BigUint {
        linear_mint_cost(
            &self.curve_base_price().get(),
            &self.curve_slope().get(),
            quantity,
            supply,
        )
    }

    #[view(getCurveBasePrice)]
    #[storage_mapper("curveBasePrice")]
    fn curve_base_price(&self) -> SingleValueMapper<BigUint>;

    #[view(getCurveSlope)]
    #[storage_mapper("curveSlope")]
    fn curve_slope(&self) -> SingleValueMapper<BigUint>;
}

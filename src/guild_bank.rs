multiversx_sc::imports!();

/// Guild bank: pooled EGLD and internal tokens backing the members' shares,
/// plus the escrow where pending proposals keep their tribute payment and
/// deposit until they are processed.
///
/// None of these methods are endpoints. Only the organization's own entry
/// points can move funds in or out.
#[multiversx_sc::module]
pub trait GuildBankModule {
    // ========================================================
    // Guild bank balances
    // ========================================================

    fn deposit(&self, amount: &BigUint) {
        self.guild_bank_balance().update(|balance| *balance += amount);
    }

    /// Mints `quantity` internal tokens into the bank, paid for with `payment`.
    fn mint_tribute(&self, quantity: &BigUint, payment: &BigUint) {
        self.deposit(payment);
        self.guild_bank_tokens().update(|tokens| *tokens += quantity);
        self.token_supply().update(|supply| *supply += quantity);
    }

    /// Pays EGLD and moves internal tokens out of the bank to `beneficiary`.
    fn withdraw(&self, beneficiary: &ManagedAddress, amount: &BigUint, tokens: &BigUint) {
        let balance = self.guild_bank_balance().get();
        require!(amount <= &balance, "insufficient guild bank balance");
        let bank_tokens = self.guild_bank_tokens().get();
        require!(tokens <= &bank_tokens, "insufficient guild bank tokens");

        self.guild_bank_balance().set(&balance - amount);
        self.guild_bank_tokens().set(&bank_tokens - tokens);
        self.token_balance(beneficiary).update(|held| *held += tokens);

        if *amount > 0u64 {
            self.send().direct_egld(beneficiary, amount);
        }
    }

    // ========================================================
    // Proposal escrow
    // ========================================================

    fn hold_in_escrow(&self, amount: &BigUint) {
        self.escrow_balance().update(|escrow| *escrow += amount);
    }

    /// Removes `amount` from escrow without paying it out. Used when escrowed
    /// tribute is settled into the guild bank.
    fn take_from_escrow(&self, amount: &BigUint) {
        let escrow = self.escrow_balance().get();
        require!(amount <= &escrow, "insufficient escrow balance");
        self.escrow_balance().set(&escrow - amount);
    }

    fn release_escrow(&self, to: &ManagedAddress, amount: &BigUint) {
        self.take_from_escrow(amount);
        if *amount > 0u64 {
            self.send().direct_egld(to, amount);
        }
    }

    // ========================================================
    // Storage
    // ========================================================

    #[view(getGuildBankBalance)]
    #[storage_mapper("guildBankBalance")]
    fn guild_bank_balance(&self) -> SingleValueMapper<BigUint>;

    #[view(getGuildBankTokens)]
    #[storage_mapper("guildBankTokens")]
    fn guild_bank_tokens(&self) -> SingleValueMapper<BigUint>;

    /// Cumulative internal tokens ever minted. Drives the curve price.
    #[view(getTokenSupply)]
    #[storage_mapper("tokenSupply")]
    fn token_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getTokenBalance)]
    #[storage_mapper("tokenBalance")]
    fn token_balance(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getEscrowBalance)]
    #[storage_mapper("escrowBalance")]
    fn escrow_balance(&self) -> SingleValueMapper<BigUint>;
}

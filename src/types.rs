multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Vote: a member's recorded choice on one proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Vote {
    /// No vote recorded. Also the decoded value of empty storage.
    Null,
    Yes,
    No,
}

impl Vote {
    /// Maps the raw endpoint argument onto a vote. Callers reject values >= 3 first.
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Vote::Yes,
            2 => Vote::No,
            _ => Vote::Null,
        }
    }
}

// ============================================================
// Proposal State: derived from the period clock, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    /// Before the starting period. No votes, no processing.
    Queued,
    /// Inside the voting window.
    Voting,
    /// Voting closed, grace window still running.
    Grace,
    /// Grace elapsed. Anyone may process it, exactly once.
    ReadyToProcess,
    /// Processed and passed. Shares were minted.
    Passed,
    /// Processed and failed on votes, dilution or the share ceiling.
    Failed,
    /// Processed after the applicant aborted it.
    Aborted,
}

// ============================================================
// Proposal: one entry of the append-only queue
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// Identity that posted the anti-spam deposit.
    pub proposer: ManagedAddress<M>,
    /// Identity that receives the shares if the proposal passes.
    pub applicant: ManagedAddress<M>,
    pub shares_requested: BigUint<M>,
    /// First period in which votes are accepted.
    pub starting_period: u64,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    pub processed: bool,
    pub did_pass: bool,
    pub aborted: bool,
    /// Internal tokens minted into the guild bank if the proposal passes.
    pub token_tribute: BigUint<M>,
    /// EGLD escrowed to pay for the token tribute at the quoted curve price.
    pub value: BigUint<M>,
    pub deposited_currency: bool,
    pub details: ManagedBuffer<M>,
    /// Highest total share count observed at any "yes" vote.
    pub max_total_shares_at_yes_vote: BigUint<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// Derives the lifecycle state at `current_period`.
    pub fn state_at(
        &self,
        current_period: u64,
        voting_period_length: u64,
        grace_period_length: u64,
    ) -> ProposalState {
        if self.processed {
            return if self.aborted {
                ProposalState::Aborted
            } else if self.did_pass {
                ProposalState::Passed
            } else {
                ProposalState::Failed
            };
        }

        let voting_ends = self.starting_period.saturating_add(voting_period_length);
        let grace_ends = voting_ends.saturating_add(grace_period_length);

        if current_period < self.starting_period {
            ProposalState::Queued
        } else if current_period < voting_ends {
            ProposalState::Voting
        } else if current_period < grace_ends {
            ProposalState::Grace
        } else {
            ProposalState::ReadyToProcess
        }
    }
}

// ============================================================
// Member: registry record, keyed by the member's identity
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Member<M: ManagedTypeApi> {
    /// Identity allowed to cast this member's votes.
    pub delegate_key: ManagedAddress<M>,
    /// Voting weight and treasury claim. May be zero while `exists` stays true.
    pub shares: BigUint<M>,
    /// Set once on admission, never cleared.
    pub exists: bool,
    /// Queue index of the highest proposal this member voted "yes" on.
    pub highest_index_yes_vote: Option<u64>,
}
